use cozy_chess::{Color, File, Square};
use serde::Serialize;
use utils::squares::back_rank;
use utils::BoardModel;

use super::context::EvalContext;
use crate::by_color::ByColor;

/// Minor piece and queen files. A home square counts as developed once no piece
/// of its own color stands on it.
const HOME_FILES: [File; 5] = [File::B, File::C, File::D, File::F, File::G];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionalFactors {
    /// 0 to 5 per side.
    pub development: ByColor<u8>,
    pub castling_rights: CastlingRights,
}

pub(super) fn evaluate<B: BoardModel + ?Sized>(ctx: &EvalContext<B>) -> PositionalFactors {
    let board = ctx.board;

    PositionalFactors {
        development: ByColor::from_fn(|color| development(board, color)),
        castling_rights: CastlingRights {
            white_kingside: board.has_kingside_castling_rights(Color::White),
            white_queenside: board.has_queenside_castling_rights(Color::White),
            black_kingside: board.has_kingside_castling_rights(Color::Black),
            black_queenside: board.has_queenside_castling_rights(Color::Black),
        },
    }
}

fn development<B: BoardModel + ?Sized>(board: &B, color: Color) -> u8 {
    let rank = back_rank(color);
    HOME_FILES
        .iter()
        .filter(|&&file| board.piece_at(Square::new(file, rank)).map(|(_, c)| c) != Some(color))
        .count() as u8
}
