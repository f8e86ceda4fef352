use cozy_chess::{BitBoard, Color};
use serde::Serialize;
use utils::BoardModel;

use super::context::EvalContext;
use crate::by_color::ByColor;

/// d4, e4, d5, e5.
pub const CENTER: BitBoard = BitBoard(0x0000_0018_1800_0000);

/// The c3-f6 block. Includes the four center squares.
pub const EXTENDED_CENTER: BitBoard = BitBoard(0x0000_3C3C_3C3C_0000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CenterControl {
    /// Attacker counts summed over the center squares.
    pub center_control: ByColor<u16>,
    /// Attacker counts summed over the extended center.
    pub extended_control: ByColor<u16>,
    /// Pieces standing on the center squares.
    pub center_occupation: ByColor<u16>,
    pub center_advantage: i32,
    pub extended_advantage: i32,
    pub occupation_advantage: i32,
}

pub(super) fn evaluate<B: BoardModel + ?Sized>(ctx: &EvalContext<B>) -> CenterControl {
    let center_control = ByColor::from_fn(|color| attack_sum(ctx, color, CENTER));
    let extended_control = ByColor::from_fn(|color| attack_sum(ctx, color, EXTENDED_CENTER));
    let center_occupation = ByColor::from_fn(|color| (ctx.board.colors(color) & CENTER).len() as u16);

    CenterControl {
        center_control,
        extended_control,
        center_occupation,
        center_advantage: center_control.advantage(),
        extended_advantage: extended_control.advantage(),
        occupation_advantage: center_occupation.advantage(),
    }
}

#[inline(always)]
fn attack_sum<B: BoardModel + ?Sized>(ctx: &EvalContext<B>, color: Color, squares: BitBoard) -> u16 {
    squares
        .into_iter()
        .map(|square| ctx.attackers_on(color, square) as u16)
        .sum()
}
