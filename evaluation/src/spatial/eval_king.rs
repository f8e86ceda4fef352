use cozy_chess::{Color, Piece, Square};
use log::debug;
use serde::Serialize;
use utils::squares::{forward, offset};
use utils::BoardModel;

use super::context::EvalContext;
use crate::by_color::ByColor;
use crate::serialize::optional_square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KingStatus {
    pub safe: bool,
    /// Enemy attackers on the king square.
    pub threats: u8,
    /// Own pawns on the (up to) three squares in front of the king.
    pub shelter: u8,
    #[serde(serialize_with = "optional_square")]
    pub king_square: Option<Square>,
}

impl KingStatus {
    /// Reported for a side with no king on the board.
    pub const MISSING: Self = Self {
        safe: false,
        threats: 0,
        shelter: 0,
        king_square: None,
    };
}

pub type KingSafety = ByColor<KingStatus>;

pub(super) fn evaluate<B: BoardModel + ?Sized>(ctx: &EvalContext<B>) -> KingSafety {
    ByColor::from_fn(|color| evaluate_side(ctx, color))
}

fn evaluate_side<B: BoardModel + ?Sized>(ctx: &EvalContext<B>, color: Color) -> KingStatus {
    let Some(king) = ctx.board.king(color) else {
        debug!("No {:?} king on the board, king safety degraded", color);
        return KingStatus::MISSING;
    };

    let threats = ctx.attackers_on(!color, king);
    // Squares off the board edge are dropped rather than wrapped to the far file
    let shelter = [-1, 0, 1]
        .into_iter()
        .filter_map(|file_delta| offset(king, file_delta, forward(color)))
        .filter(|&square| ctx.board.piece_at(square) == Some((Piece::Pawn, color)))
        .count() as u8;

    KingStatus {
        safe: threats == 0,
        threats,
        shelter,
        king_square: Some(king),
    }
}
