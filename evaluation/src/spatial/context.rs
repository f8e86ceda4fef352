use cozy_chess::{Color, Square};
use utils::moves::mobility_by_square;
use utils::{BoardMetrics, BoardModel};

use crate::by_color::ByColor;

// Board data shared by several analyzers, computed once per evaluation
pub struct EvalContext<'a, B: BoardModel + ?Sized> {
    pub board: &'a B,
    pub metrics: BoardMetrics,
    pub mobility: ByColor<[u8; Square::NUM]>,
}

impl<'a, B: BoardModel + ?Sized> EvalContext<'a, B> {
    pub fn new(board: &'a B) -> Self {
        let mobility = ByColor::from_fn(|color| mobility_by_square(&board.legal_moves_for(color)));

        Self {
            board,
            metrics: BoardMetrics::new(board),
            mobility,
        }
    }

    #[inline(always)]
    pub fn attackers_on(&self, color: Color, square: Square) -> u8 {
        self.metrics.attackers_on(color, square)
    }

    #[inline(always)]
    pub fn mobility_of(&self, color: Color, square: Square) -> u8 {
        self.mobility[color][square as usize]
    }
}
