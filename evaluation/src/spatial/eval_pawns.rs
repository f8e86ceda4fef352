use cozy_chess::{BitBoard, Color, File, Piece};
use serde::Serialize;
use utils::BoardModel;

use super::context::EvalContext;
use crate::by_color::ByColor;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PawnCounts {
    pub total: u8,
    pub isolated: u8,
    /// Pawns beyond the first on each file.
    pub doubled: u8,
    /// Pawns with no enemy pawn ahead on the same file.
    pub passed: u8,
    pub files_occupied: u8,
}

pub type PawnStructure = ByColor<PawnCounts>;

pub(super) fn evaluate<B: BoardModel + ?Sized>(ctx: &EvalContext<B>) -> PawnStructure {
    ByColor::from_fn(|color| evaluate_side(ctx, color))
}

fn evaluate_side<B: BoardModel + ?Sized>(ctx: &EvalContext<B>, color: Color) -> PawnCounts {
    let my_pawns = ctx.board.colored_pieces(color, Piece::Pawn);
    let enemy_pawns = ctx.board.colored_pieces(!color, Piece::Pawn);
    let mut counts = PawnCounts {
        total: my_pawns.len() as u8,
        ..PawnCounts::default()
    };

    for file in File::ALL {
        let on_file = (my_pawns & file.bitboard()).len() as u8;
        if on_file > 0 {
            counts.files_occupied += 1;
            counts.doubled += on_file - 1;
        }
    }

    for square in my_pawns {
        if (my_pawns & square.file().adjacent()).is_empty() {
            counts.isolated += 1;
        }
        if (enemy_pawns & FRONT_SPANS[color as usize][square as usize]).is_empty() {
            counts.passed += 1;
        }
    }

    counts
}

/// Squares ahead of a pawn on its own file: [color][square].
pub const FRONT_SPANS: [[BitBoard; 64]; 2] = {
    let mut table = [[BitBoard::EMPTY; 64]; 2];
    let mut square_idx = 0;
    while square_idx < 64 {
        table[Color::White as usize][square_idx] = BitBoard(make_front_span(square_idx, 1));
        table[Color::Black as usize][square_idx] = BitBoard(make_front_span(square_idx, -1));
        square_idx += 1;
    }
    table
};

const fn make_front_span(square_idx: usize, step: i8) -> u64 {
    let file_idx = (square_idx % 8) as u64;
    let mut rank_idx = (square_idx / 8) as i8 + step;
    let mut mask = 0u64;
    while rank_idx >= 0 && rank_idx < 8 {
        mask |= 1u64 << (rank_idx as u64 * 8 + file_idx);
        rank_idx += step;
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::{Board, Square};

    fn pawns(fen: &str) -> PawnStructure {
        let board: Board = fen.parse().unwrap();
        evaluate(&EvalContext::new(&board))
    }

    #[test]
    fn test_front_spans() {
        let white = FRONT_SPANS[Color::White as usize][Square::E2 as usize];
        assert_eq!(white.len(), 6);
        assert!(white.has(Square::E8) && !white.has(Square::E2));

        let black = FRONT_SPANS[Color::Black as usize][Square::E2 as usize];
        assert_eq!(black, Square::E1.bitboard());
        assert!(FRONT_SPANS[Color::White as usize][Square::A8 as usize].is_empty());
    }

    #[test]
    fn test_startpos_structure() {
        let structure = pawns("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let expected = PawnCounts {
            total: 8,
            isolated: 0,
            doubled: 0,
            passed: 0,
            files_occupied: 8,
        };
        assert_eq!(structure.white, expected);
        assert_eq!(structure.black, expected);
    }

    #[test]
    fn test_doubled_isolated_passed() {
        let structure = pawns("4k3/2p5/8/8/8/P7/P1P5/4K3 w - - 0 1");
        assert_eq!(
            structure.white,
            PawnCounts {
                total: 3,
                isolated: 3,
                doubled: 1,
                passed: 2,
                files_occupied: 2,
            }
        );
        assert_eq!(structure.black.passed, 0);
        assert_eq!(structure.black.isolated, 1);
    }

    #[test]
    fn test_adjacent_file_does_not_block_passer() {
        let structure = pawns("4k3/3p4/8/8/4P3/8/8/4K3 w - - 0 1");
        assert_eq!(structure.white.passed, 1);
        assert_eq!(structure.black.passed, 1);
    }
}
