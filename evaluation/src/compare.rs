//! Side-by-side evaluation of candidate moves from one position.

use cozy_chess::Color;
use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;
use utils::moves::play_uci;
use utils::{BoardModel, Position};

use crate::spatial::{evaluate, SpatialMetrics, Territory};
use crate::{AnalysisConfig, EvalError};

/// After-minus-before deltas, signed so that positive is good for the mover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PositionImpact {
    pub material_change: i32,
    /// Shelter gained minus king attackers gained.
    pub king_safety_impact: i32,
    pub center_control_change: i32,
    pub development_impact: i32,
    pub space_advantage_change: i32,
}

impl PositionImpact {
    pub fn between(before: &SpatialMetrics, after: &SpatialMetrics, mover: Color) -> Self {
        let material = |m: &SpatialMetrics| m.material_balance.lead_for(mover);
        let king = |m: &SpatialMetrics| {
            let status = m.king_safety[mover];
            status.shelter as i32 - status.threats as i32
        };
        let center = |m: &SpatialMetrics| m.center_control.center_control.advantage_for(mover);
        let development = |m: &SpatialMetrics| m.positional_factors.development[mover] as i32;
        let space = |m: &SpatialMetrics| m.space_control.territory.space_advantage_for(mover);

        Self {
            material_change: material(after) - material(before),
            king_safety_impact: king(after) - king(before),
            center_control_change: center(after) - center(before),
            development_impact: development(after) - development(before),
            space_advantage_change: space(after) - space(before),
        }
    }

    /// Every field clamped into `[-clamp, clamp]`.
    pub fn normalized(&self, clamp: i32) -> Self {
        let bound = clamp.abs();
        let fit = |value: i32| value.clamp(-bound, bound);

        Self {
            material_change: fit(self.material_change),
            king_safety_impact: fit(self.king_safety_impact),
            center_control_change: fit(self.center_control_change),
            development_impact: fit(self.development_impact),
            space_advantage_change: fit(self.space_advantage_change),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveComparison {
    /// 1-based position in the candidate list.
    pub rank: usize,
    #[serde(rename = "move")]
    pub mv: String,
    /// Space split after the move.
    #[serde(flatten)]
    pub territory: Territory,
    #[serde(rename = "position_impact")]
    pub impact: PositionImpact,
    pub normalized_impact: PositionImpact,
}

/// Evaluates each candidate move and measures how it changes the position.
///
/// Only the first `comparison_move_limit` candidates are considered. Moves
/// that do not parse or are illegal are skipped.
pub fn compare_moves(
    fen: &str,
    moves: &[&str],
    config: &AnalysisConfig,
) -> Result<Vec<MoveComparison>, EvalError> {
    let position = Position::from_fen(fen)?;
    let board = position.board().ok_or_else(|| EvalError::IncompletePosition {
        fen: position.fen(),
    })?;

    let candidates = &moves[..moves.len().min(config.comparison_move_limit)];
    if candidates.len() < moves.len() {
        debug!(
            "Comparing the first {} of {} candidate moves",
            candidates.len(),
            moves.len()
        );
    }

    let before = evaluate(board);
    let mover = board.side_to_move();

    let comparisons = candidates
        .par_iter()
        .enumerate()
        .filter_map(|(index, uci)| {
            let uci = uci.trim();
            let Some((_, next)) = play_uci(board, uci) else {
                warn!("Skipping illegal candidate move {} in {}", uci, board.fen());
                return None;
            };

            let after = evaluate(&next);
            let impact = PositionImpact::between(&before, &after, mover);
            Some(MoveComparison {
                rank: index + 1,
                mv: uci.to_string(),
                territory: after.space_control.territory,
                impact,
                normalized_impact: impact.normalized(config.impact_clamp),
            })
        })
        .collect();

    Ok(comparisons)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_illegal_candidates_are_skipped() {
        let config = AnalysisConfig::default();
        let rows = compare_moves(STARTPOS, &["e2e4", "d2d4", "e2e5", "g1f3"], &config).unwrap();

        let ranks: Vec<usize> = rows.iter().map(|row| row.rank).collect();
        assert_eq!(ranks, vec![1, 2, 4]);
        assert_eq!(rows[2].mv, "g1f3");
    }

    #[test]
    fn test_e4_impact() {
        let rows = compare_moves(STARTPOS, &["e2e4"], &AnalysisConfig::default()).unwrap();
        let impact = rows[0].impact;

        assert_eq!(impact.material_change, 0);
        assert_eq!(impact.development_impact, 0);
        // e4 now hits d5, the e2 pawn no longer shelters the king
        assert_eq!(impact.center_control_change, 1);
        assert_eq!(impact.king_safety_impact, -1);
    }

    #[test]
    fn test_knight_develops() {
        let rows = compare_moves(STARTPOS, &["g1f3"], &AnalysisConfig::default()).unwrap();
        assert_eq!(rows[0].impact.development_impact, 1);
        assert_eq!(rows[0].impact.king_safety_impact, 0);
    }

    #[test]
    fn test_impact_from_black_perspective() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
        let rows = compare_moves(fen, &["d7d5"], &AnalysisConfig::default()).unwrap();
        // d5 pawn hits e4 and the queen now sees d5
        assert_eq!(rows[0].impact.center_control_change, 2);
    }

    #[test]
    fn test_move_limit() {
        let config = AnalysisConfig {
            comparison_move_limit: 1,
            ..AnalysisConfig::default()
        };
        let rows = compare_moves(STARTPOS, &["e2e4", "d2d4"], &config).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_base_position_errors() {
        let config = AnalysisConfig::default();
        assert!(matches!(
            compare_moves("8/8/8/8/8/8/8/4K3 w - - 0 1", &["e1e2"], &config),
            Err(EvalError::IncompletePosition { .. })
        ));
        assert!(matches!(
            compare_moves("nonsense", &["e2e4"], &config),
            Err(EvalError::MalformedPosition(_))
        ));
    }

    #[test]
    fn test_normalized() {
        let impact = PositionImpact {
            material_change: 5,
            king_safety_impact: -3,
            center_control_change: 1,
            development_impact: 0,
            space_advantage_change: -2,
        };
        let normalized = impact.normalized(2);
        assert_eq!(normalized.material_change, 2);
        assert_eq!(normalized.king_safety_impact, -2);
        assert_eq!(normalized.center_control_change, 1);
        assert_eq!(normalized.space_advantage_change, -2);
    }

    #[test]
    fn test_serialized_row() {
        let rows = compare_moves(STARTPOS, &["e2e4"], &AnalysisConfig::default()).unwrap();
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["move"], "e2e4");
        assert_eq!(json["rank"], 1);
        assert!(json["white_space_percentage"].is_f64());
        assert!(json["position_impact"]["material_change"].is_i64());
    }
}
