//! Helpers for the JSON shape of the metric records.

use cozy_chess::{Piece, Square};
use serde::Serializer;

#[inline(always)]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn optional_square<S: Serializer>(
    square: &Option<Square>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match square {
        Some(square) => serializer.collect_str(square),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn piece_name(piece: Piece) -> &'static str {
    match piece {
        Piece::Pawn => "pawn",
        Piece::Knight => "knight",
        Piece::Bishop => "bishop",
        Piece::Rook => "rook",
        Piece::Queen => "queen",
        Piece::King => "king",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.5625), 1.56);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(0.0), 0.0);
    }
}
