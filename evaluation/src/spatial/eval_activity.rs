use cozy_chess::{Color, Piece};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use utils::BoardModel;

use super::context::EvalContext;
use crate::by_color::ByColor;
use crate::serialize::{piece_name, round2};

/// Piece kinds that get activity stats. Kings are left out.
pub const ACTIVE_PIECES: [Piece; 5] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceStats {
    pub count: u32,
    pub total_mobility: u32,
    pub total_attacks: u32,
}

impl PieceStats {
    pub fn avg_mobility(&self) -> f64 {
        self.total_mobility as f64 / self.count.max(1) as f64
    }

    pub fn avg_attacks(&self) -> f64 {
        self.total_attacks as f64 / self.count.max(1) as f64
    }
}

impl Serialize for PieceStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PieceStats", 5)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("total_mobility", &self.total_mobility)?;
        state.serialize_field("total_attacks", &self.total_attacks)?;
        state.serialize_field("avg_mobility", &round2(self.avg_mobility()))?;
        state.serialize_field("avg_attacks", &round2(self.avg_attacks()))?;
        state.end()
    }
}

/// Stats for one side, indexed by piece kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideActivity([PieceStats; ACTIVE_PIECES.len()]);

impl SideActivity {
    #[inline(always)]
    pub fn get(&self, piece: Piece) -> Option<&PieceStats> {
        self.0.get(piece as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Piece, &PieceStats)> {
        ACTIVE_PIECES.into_iter().zip(self.0.iter())
    }
}

impl Serialize for SideActivity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ACTIVE_PIECES.len()))?;
        for (piece, stats) in self.iter() {
            map.serialize_entry(piece_name(piece), stats)?;
        }
        map.end()
    }
}

pub type PieceActivity = ByColor<SideActivity>;

pub(super) fn evaluate<B: BoardModel + ?Sized>(ctx: &EvalContext<B>) -> PieceActivity {
    ByColor::from_fn(|color| evaluate_side(ctx, color))
}

fn evaluate_side<B: BoardModel + ?Sized>(ctx: &EvalContext<B>, color: Color) -> SideActivity {
    let mut activity = SideActivity::default();

    for (piece, stats) in ACTIVE_PIECES.into_iter().zip(activity.0.iter_mut()) {
        for square in ctx.board.colored_pieces(color, piece) {
            stats.count += 1;
            stats.total_mobility += ctx.mobility_of(color, square) as u32;
            stats.total_attacks += ctx.board.attacks(square).len();
        }
    }

    activity
}
