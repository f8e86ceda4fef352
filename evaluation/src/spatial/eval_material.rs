use cozy_chess::Color;
use serde::Serialize;
use utils::BoardModel;

use super::context::EvalContext;
use crate::piece_values::total_material;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaterialBalance {
    pub white_total: i32,
    pub black_total: i32,
    /// White minus Black.
    pub difference: i32,
}

impl MaterialBalance {
    /// Material lead from `color`'s point of view.
    #[inline(always)]
    pub fn lead_for(&self, color: Color) -> i32 {
        match color {
            Color::White => self.difference,
            Color::Black => -self.difference,
        }
    }
}

pub(super) fn evaluate<B: BoardModel + ?Sized>(ctx: &EvalContext<B>) -> MaterialBalance {
    let white_total = total_material(ctx.board, Color::White);
    let black_total = total_material(ctx.board, Color::Black);

    MaterialBalance {
        white_total,
        black_total,
        difference: white_total - black_total,
    }
}
