use arrayvec::ArrayVec;
use cozy_chess::{Color, Piece, Square};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use utils::{piece_symbol, BoardModel};

use super::context::EvalContext;
use crate::piece_values::piece_value;

/// A piece that can be taken for less than it is worth, or for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HangingPiece {
    pub square: Square,
    pub piece: Piece,
    pub color: Color,
    pub value: u8,
    /// Value of the cheapest enemy attacker.
    pub attacker_value: u8,
}

impl Serialize for HangingPiece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HangingPiece", 4)?;
        state.serialize_field("square", &self.square.to_string())?;
        state.serialize_field("piece", &piece_symbol(self.piece, self.color).to_string())?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("attacker_value", &self.attacker_value)?;
        state.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TacticalThreats {
    /// In square order, a1 first.
    pub hanging_pieces: ArrayVec<HangingPiece, 64>,
}

impl TacticalThreats {
    pub fn hanging_for(&self, color: Color) -> impl Iterator<Item = &HangingPiece> {
        self.hanging_pieces.iter().filter(move |hanging| hanging.color == color)
    }

    pub fn is_empty(&self) -> bool {
        self.hanging_pieces.is_empty()
    }
}

impl Serialize for TacticalThreats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TacticalThreats", 1)?;
        state.serialize_field("hanging_pieces", self.hanging_pieces.as_slice())?;
        state.end()
    }
}

// One-ply check: no exchange sequences, pins or overloaded defenders
pub(super) fn evaluate<B: BoardModel + ?Sized>(ctx: &EvalContext<B>) -> TacticalThreats {
    let board = ctx.board;
    let mut threats = TacticalThreats::default();

    for square in board.occupied() {
        let Some((piece, color)) = board.piece_at(square) else {
            continue;
        };

        let attackers = board.attackers(!color, square);
        let Some(attacker_value) = attackers
            .into_iter()
            .filter_map(|from| board.piece_at(from))
            .map(|(attacker, _)| piece_value(attacker))
            .min()
        else {
            continue;
        };

        let value = piece_value(piece);
        let defended = !board.attackers(color, square).is_empty();
        if !defended || attacker_value < value {
            threats.hanging_pieces.push(HangingPiece {
                square,
                piece,
                color,
                value,
                attacker_value,
            });
        }
    }

    threats
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::Board;
    use utils::Position;

    fn threats(fen: &str) -> TacticalThreats {
        let position = Position::from_fen(fen).unwrap();
        evaluate(&EvalContext::new(&position))
    }

    #[test]
    fn test_startpos_has_no_threats() {
        let board = Board::default();
        assert!(evaluate(&EvalContext::new(&board)).is_empty());
    }

    #[test]
    fn test_queen_attacked_by_pawn() {
        let threats = threats("3k4/8/8/8/8/8/3p4/4Q1K1 w - - 0 1");

        let queen = threats.hanging_for(Color::White).next().unwrap();
        assert_eq!(queen.square, Square::E1);
        assert_eq!(queen.piece, Piece::Queen);
        assert_eq!((queen.value, queen.attacker_value), (9, 1));

        // The pawn is undefended, so the queen attacking it counts too
        let pawn = threats.hanging_for(Color::Black).next().unwrap();
        assert_eq!(pawn.square, Square::D2);
        assert_eq!(pawn.attacker_value, 9);
    }

    #[test]
    fn test_defended_equal_trade_is_not_hanging() {
        // Knights attack each other, both defended by a pawn
        let threats = threats("4k3/8/3p4/4n3/8/3N4/4P3/4K3 w - - 0 1");
        assert!(threats.is_empty(), "{:?}", threats);
    }

    #[test]
    fn test_square_order_and_serialization() {
        let threats = threats("3k4/8/8/8/8/8/3p4/4Q1K1 w - - 0 1");
        let squares: Vec<Square> = threats.hanging_pieces.iter().map(|h| h.square).collect();
        assert_eq!(squares, vec![Square::E1, Square::D2]);

        let json = serde_json::to_value(&threats).unwrap();
        assert_eq!(json["hanging_pieces"][0]["square"], "e1");
        assert_eq!(json["hanging_pieces"][0]["piece"], "Q");
        assert_eq!(json["hanging_pieces"][1]["piece"], "p");
    }

    #[test]
    fn test_king_without_board_rules() {
        // Missing white king: falls back to the permissive board
        let threats = threats("4k3/8/8/8/8/8/3p4/4Q3 w - - 0 1");
        assert!(threats.hanging_for(Color::White).any(|h| h.piece == Piece::Queen));
    }
}
