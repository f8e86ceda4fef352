use std::fmt::Write;

use cozy_chess::{BitBoard, Color, File, Move, Piece, Rank, Square};

use crate::moves::pseudo_legal_moves;
use crate::squares::back_rank;
use crate::{BoardModel, PositionError};

const KINGSIDE: usize = 0;
const QUEENSIDE: usize = 1;

/// Permissive board for positions the rules engine refuses to build.
///
/// Holds piece placement, turn, castling rights and clocks as written in the FEN,
/// without requiring a king for each side. Moves are pseudo-legal, since legality
/// has no meaning without both kings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sketch {
    pieces: [BitBoard; Piece::NUM],
    colors: [BitBoard; Color::NUM],
    side_to_move: Color,
    castling: [[bool; 2]; Color::NUM],
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Sketch {
    /// Parse a FEN. The clocks may be omitted; everything present must be well formed.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let malformed = |reason: &str| PositionError::malformed(fen, reason);

        let mut fields = fen.split_whitespace();
        let placement = fields
            .next()
            .ok_or_else(|| malformed("missing piece placement"))?;
        let side = fields
            .next()
            .ok_or_else(|| malformed("missing side to move"))?;
        let castling = fields.next().unwrap_or("-");
        let en_passant = fields.next().unwrap_or("-");
        let halfmove = fields.next().unwrap_or("0");
        let fullmove = fields.next().unwrap_or("1");
        if fields.next().is_some() {
            return Err(malformed("too many fields"));
        }

        let mut sketch = Self {
            pieces: [BitBoard::EMPTY; Piece::NUM],
            colors: [BitBoard::EMPTY; Color::NUM],
            side_to_move: Color::White,
            castling: [[false; 2]; Color::NUM],
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        };

        sketch.parse_placement(placement).map_err(malformed)?;

        sketch.side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(malformed("side to move must be 'w' or 'b'")),
        };

        if castling != "-" {
            for c in castling.chars() {
                let (color, side) = match c {
                    'K' => (Color::White, KINGSIDE),
                    'Q' => (Color::White, QUEENSIDE),
                    'k' => (Color::Black, KINGSIDE),
                    'q' => (Color::Black, QUEENSIDE),
                    _ => return Err(malformed("invalid castling rights")),
                };
                sketch.castling[color as usize][side] = true;
            }
        }
        sketch.drop_impossible_castling();

        if en_passant != "-" {
            let square = en_passant
                .parse::<Square>()
                .map_err(|_| malformed("invalid en passant square"))?;
            sketch.en_passant = Some(square);
        }

        sketch.halfmove_clock = halfmove
            .parse()
            .map_err(|_| malformed("invalid halfmove clock"))?;
        sketch.fullmove_number = fullmove
            .parse()
            .map_err(|_| malformed("invalid fullmove number"))?;

        Ok(sketch)
    }

    /// True when at least one side has no king on the board.
    pub fn is_missing_king(&self) -> bool {
        self.king(Color::White).is_none() || self.king(Color::Black).is_none()
    }

    fn parse_placement(&mut self, placement: &str) -> Result<(), &'static str> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err("piece placement must have 8 ranks");
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let rank = Rank::index(7 - row_idx);
            let mut file = 0usize;

            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err("invalid empty-square count");
                    }
                    file += skip as usize;
                    continue;
                }

                let (piece, color) = piece_from_symbol(c).ok_or("invalid piece symbol")?;
                if file >= 8 {
                    return Err("rank has more than 8 squares");
                }
                if piece == Piece::Pawn && (rank == Rank::First || rank == Rank::Eighth) {
                    return Err("pawn on a back rank");
                }

                let bb = Square::new(File::index(file), rank).bitboard();
                self.pieces[piece as usize] |= bb;
                self.colors[color as usize] |= bb;
                file += 1;
            }

            if file != 8 {
                return Err("rank does not have 8 squares");
            }
        }

        for color in Color::ALL {
            if self.colored_pieces(color, Piece::King).len() > 1 {
                return Err("more than one king for a side");
            }
        }
        Ok(())
    }

    // A right only survives while the king and rook still stand on their home squares.
    fn drop_impossible_castling(&mut self) {
        for color in Color::ALL {
            let rank = back_rank(color);
            let king_home = self.piece_at(Square::new(File::E, rank)) == Some((Piece::King, color));

            for (side, rook_file) in [(KINGSIDE, File::H), (QUEENSIDE, File::A)] {
                let rook_home =
                    self.piece_at(Square::new(rook_file, rank)) == Some((Piece::Rook, color));
                self.castling[color as usize][side] &= king_home && rook_home;
            }
        }
    }
}

impl BoardModel for Sketch {
    fn piece_at(&self, square: Square) -> Option<(Piece, Color)> {
        let color = Color::ALL
            .into_iter()
            .find(|&color| self.colors[color as usize].has(square))?;
        let piece = Piece::ALL
            .into_iter()
            .find(|&piece| self.pieces[piece as usize].has(square))?;
        Some((piece, color))
    }

    #[inline(always)]
    fn colored_pieces(&self, color: Color, piece: Piece) -> BitBoard {
        self.pieces[piece as usize] & self.colors[color as usize]
    }

    #[inline(always)]
    fn colors(&self, color: Color) -> BitBoard {
        self.colors[color as usize]
    }

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn king(&self, color: Color) -> Option<Square> {
        self.colored_pieces(color, Piece::King).into_iter().next()
    }

    fn has_kingside_castling_rights(&self, color: Color) -> bool {
        self.castling[color as usize][KINGSIDE]
    }

    fn has_queenside_castling_rights(&self, color: Color) -> bool {
        self.castling[color as usize][QUEENSIDE]
    }

    fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        pseudo_legal_moves(self, color)
    }

    fn fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for rank in Rank::ALL.into_iter().rev() {
            let mut empty = 0;
            for file in File::ALL {
                match self.piece_at(Square::new(file, rank)) {
                    Some((piece, color)) => {
                        if empty > 0 {
                            let _ = write!(fen, "{}", empty);
                            empty = 0;
                        }
                        fen.push(piece_symbol(piece, color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                let _ = write!(fen, "{}", empty);
            }
            if rank != Rank::First {
                fen.push('/');
            }
        }

        fen.push_str(match self.side_to_move {
            Color::White => " w ",
            Color::Black => " b ",
        });

        let rights = [
            (Color::White, KINGSIDE, 'K'),
            (Color::White, QUEENSIDE, 'Q'),
            (Color::Black, KINGSIDE, 'k'),
            (Color::Black, QUEENSIDE, 'q'),
        ];
        let before = fen.len();
        for (color, side, symbol) in rights {
            if self.castling[color as usize][side] {
                fen.push(symbol);
            }
        }
        if fen.len() == before {
            fen.push('-');
        }

        match self.en_passant {
            Some(square) => {
                let _ = write!(fen, " {}", square);
            }
            None => fen.push_str(" -"),
        }
        let _ = write!(fen, " {} {}", self.halfmove_clock, self.fullmove_number);

        fen
    }
}

/// FEN letter for a piece: uppercase for White, lowercase for Black.
pub fn piece_symbol(piece: Piece, color: Color) -> char {
    let symbol = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    match color {
        Color::White => symbol.to_ascii_uppercase(),
        Color::Black => symbol,
    }
}

fn piece_from_symbol(symbol: char) -> Option<(Piece, Color)> {
    let piece = match symbol.to_ascii_lowercase() {
        'p' => Piece::Pawn,
        'n' => Piece::Knight,
        'b' => Piece::Bishop,
        'r' => Piece::Rook,
        'q' => Piece::Queen,
        'k' => Piece::King,
        _ => return None,
    };
    let color = if symbol.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Some((piece, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_black_king() {
        let sketch = Sketch::from_fen("8/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        assert!(sketch.is_missing_king());
        assert_eq!(sketch.king(Color::White), Some(Square::E1));
        assert_eq!(sketch.king(Color::Black), None);
        assert_eq!(sketch.piece_at(Square::E2), Some((Piece::Pawn, Color::White)));
    }

    #[test]
    fn test_fen_round_trip() {
        let fens = [
            "r3k2r/8/8/8/8/8/8/4K3 b kq - 3 17",
            "8/8/8/3pP3/8/8/8/4K3 w - d6 0 2",
            "rnbq1bnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQ - 0 1",
        ];
        for fen in fens {
            let sketch = Sketch::from_fen(fen).unwrap();
            assert_eq!(sketch.fen(), fen);
            assert_eq!(Sketch::from_fen(&sketch.fen()).unwrap(), sketch);
        }
    }

    #[test]
    fn test_clocks_are_optional() {
        let sketch = Sketch::from_fen("8/8/8/8/8/8/8/4K3 w -").unwrap();
        assert_eq!(sketch.fen(), "8/8/8/8/8/8/8/4K3 w - - 0 1");
    }

    #[test]
    fn test_castling_needs_king_and_rook_at_home() {
        let sketch = Sketch::from_fen("r3k3/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert!(sketch.has_kingside_castling_rights(Color::White));
        assert!(sketch.has_queenside_castling_rights(Color::White));
        assert!(!sketch.has_kingside_castling_rights(Color::Black));
        assert!(sketch.has_queenside_castling_rights(Color::Black));

        let kingless = Sketch::from_fen("r6r/8/8/8/8/8/8/4K3 w kq - 0 1").unwrap();
        assert!(!kingless.has_queenside_castling_rights(Color::Black));
    }

    #[test]
    fn test_rejects_malformed_placement() {
        let bad = [
            "8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/8/8/8/8/4K4 w - - 0 1",
            "8/8/8/8/8/8/8/4X3 w - - 0 1",
            "P7/8/8/8/8/8/8/4K3 w - - 0 1",
            "8/8/8/8/8/8/8/3KK3 w - - 0 1",
            "8/8/8/8/8/8/8/4K3 x - - 0 1",
            "8/8/8/8/8/8/8/4K3 w Z - 0 1",
            "8/8/8/8/8/8/8/4K3 w - - 0 1 extra",
            "",
        ];
        for fen in bad {
            assert!(Sketch::from_fen(fen).is_err(), "accepted {:?}", fen);
        }
    }

    #[test]
    fn test_moves_without_kings_are_pseudo_legal() {
        let sketch = Sketch::from_fen("8/8/8/8/8/8/8/R7 w - - 0 1").unwrap();
        assert_eq!(sketch.legal_moves().len(), 14);
        assert!(sketch.legal_moves_for(Color::Black).is_empty());
    }
}
