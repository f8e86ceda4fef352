use cozy_chess::{BitBoard, Color, Piece, Square};

use crate::attacks::piece_attacks;
use crate::BoardModel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardMetrics {
    // Number of pieces of each color attacking each square
    pub attackers: [[u8; Square::NUM]; Color::NUM],

    // Attack bitboards for each color (all squares attacked by that color)
    pub attacks: [BitBoard; Color::NUM],
}

impl BoardMetrics {
    pub fn new<B: BoardModel + ?Sized>(board: &B) -> Self {
        let occupied = board.occupied();

        let mut metrics = Self {
            attackers: [[0; Square::NUM]; Color::NUM],
            attacks: [BitBoard::EMPTY; Color::NUM],
        };
        for color in Color::ALL {
            metrics.compute(board, color, occupied);
        }
        metrics
    }

    /// Count attackers in a single pass over the pieces of one color.
    /// Equivalent to `board.attackers(color, sq).len()` for every square.
    fn compute<B: BoardModel + ?Sized>(&mut self, board: &B, color: Color, occupied: BitBoard) {
        let counts = &mut self.attackers[color as usize];
        let mut attacks = BitBoard::EMPTY;

        for piece in Piece::ALL {
            for sq in board.colored_pieces(color, piece) {
                let squares = piece_attacks(piece, color, sq, occupied);
                attacks |= squares;
                for target in squares {
                    counts[target as usize] += 1;
                }
            }
        }

        self.attacks[color as usize] = attacks;
    }

    #[inline(always)]
    pub fn attackers_on(&self, color: Color, square: Square) -> u8 {
        self.attackers[color as usize][square as usize]
    }

    #[inline(always)]
    pub fn attacks_for(&self, color: Color) -> BitBoard {
        self.attacks[color as usize]
    }
}
