use cozy_chess::{BitBoard, Board, Color, Move, Piece, Square};

use crate::attacks::{attackers_of, piece_attacks};
use crate::moves::{collect_legal_moves, pseudo_legal_moves};

/// Read-only view of a chess position, as consumed by the spatial analyzers.
///
/// Implementations must never change observable state from any of these
/// methods, so a single board can be shared between concurrent evaluations.
pub trait BoardModel {
    fn piece_at(&self, square: Square) -> Option<(Piece, Color)>;
    fn colored_pieces(&self, color: Color, piece: Piece) -> BitBoard;
    fn colors(&self, color: Color) -> BitBoard;
    fn side_to_move(&self) -> Color;
    fn king(&self, color: Color) -> Option<Square>;
    fn has_kingside_castling_rights(&self, color: Color) -> bool;
    fn has_queenside_castling_rights(&self, color: Color) -> bool;

    /// Moves `color` could play if it were its turn.
    ///
    /// For the side not to move this is a counterfactual query; implementors
    /// answer it on a private copy rather than by flipping their own turn.
    fn legal_moves_for(&self, color: Color) -> Vec<Move>;

    fn fen(&self) -> String;

    #[inline(always)]
    fn occupied(&self) -> BitBoard {
        self.colors(Color::White) | self.colors(Color::Black)
    }

    #[inline(always)]
    fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.side_to_move())
    }

    /// Squares attacked by the piece on `square`; empty when the square is.
    #[inline(always)]
    fn attacks(&self, square: Square) -> BitBoard {
        match self.piece_at(square) {
            Some((piece, color)) => piece_attacks(piece, color, square, self.occupied()),
            None => BitBoard::EMPTY,
        }
    }

    #[inline(always)]
    fn attackers(&self, color: Color, square: Square) -> BitBoard {
        attackers_of(self, color, square)
    }
}

impl BoardModel for Board {
    #[inline(always)]
    fn piece_at(&self, square: Square) -> Option<(Piece, Color)> {
        Some((self.piece_on(square)?, self.color_on(square)?))
    }

    #[inline(always)]
    fn colored_pieces(&self, color: Color, piece: Piece) -> BitBoard {
        Board::colored_pieces(self, color, piece)
    }

    #[inline(always)]
    fn colors(&self, color: Color) -> BitBoard {
        Board::colors(self, color)
    }

    #[inline(always)]
    fn occupied(&self) -> BitBoard {
        Board::occupied(self)
    }

    #[inline(always)]
    fn side_to_move(&self) -> Color {
        Board::side_to_move(self)
    }

    // cozy-chess refuses to build a board without both kings
    #[inline(always)]
    fn king(&self, color: Color) -> Option<Square> {
        Some(Board::king(self, color))
    }

    fn has_kingside_castling_rights(&self, color: Color) -> bool {
        self.castle_rights(color).short.is_some()
    }

    fn has_queenside_castling_rights(&self, color: Color) -> bool {
        self.castle_rights(color).long.is_some()
    }

    fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        if color == Board::side_to_move(self) {
            return collect_legal_moves(self);
        }

        // null_move hands back a fresh board with the turn passed; `self` is untouched.
        // It refuses when the side to move is in check, because the flipped
        // position would leave a king capturable. Fall back to pseudo-legal moves.
        match self.null_move() {
            Some(flipped) => collect_legal_moves(&flipped),
            None => pseudo_legal_moves(self, color),
        }
    }

    fn fen(&self) -> String {
        self.to_string()
    }
}
