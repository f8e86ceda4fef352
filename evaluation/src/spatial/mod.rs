mod context;
mod eval_activity;
mod eval_center;
mod eval_king;
mod eval_material;
mod eval_pawns;
mod eval_positional;
mod eval_space;
mod eval_threats;

pub use eval_activity::{PieceActivity, PieceStats, SideActivity, ACTIVE_PIECES};
pub use eval_center::{CenterControl, CENTER, EXTENDED_CENTER};
pub use eval_king::{KingSafety, KingStatus};
pub use eval_material::MaterialBalance;
pub use eval_pawns::{PawnCounts, PawnStructure};
pub use eval_positional::{CastlingRights, PositionalFactors};
pub use eval_space::{ControlMatrix, SpaceControl, SquareControl, SquareGrid, Territory};
pub use eval_threats::{HangingPiece, TacticalThreats};

use context::EvalContext;
use log::{debug, trace};
use rayon::prelude::*;
use serde::Serialize;
use utils::{BoardModel, Position};

use crate::EvalError;

/// Everything the analyzers report about one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpatialMetrics {
    pub material_balance: MaterialBalance,
    pub space_control: SpaceControl,
    pub center_control: CenterControl,
    pub piece_activity: PieceActivity,
    pub king_safety: KingSafety,
    pub pawn_structure: PawnStructure,
    pub tactical_threats: TacticalThreats,
    pub positional_factors: PositionalFactors,
}

/// Runs every analyzer over one board snapshot.
///
/// The board is only ever borrowed immutably. Counterfactual move queries go
/// through [`BoardModel::legal_moves_for`], which works on private copies.
pub fn evaluate<B: BoardModel + ?Sized>(board: &B) -> SpatialMetrics {
    let ctx = EvalContext::new(board);

    let metrics = SpatialMetrics {
        material_balance: eval_material::evaluate(&ctx),
        space_control: eval_space::evaluate(&ctx),
        center_control: eval_center::evaluate(&ctx),
        piece_activity: eval_activity::evaluate(&ctx),
        king_safety: eval_king::evaluate(&ctx),
        pawn_structure: eval_pawns::evaluate(&ctx),
        tactical_threats: eval_threats::evaluate(&ctx),
        positional_factors: eval_positional::evaluate(&ctx),
    };

    trace!(
        "space {:+} center {:+} material {:+} hanging {}",
        metrics.space_control.space_advantage(),
        metrics.center_control.center_advantage,
        metrics.material_balance.difference,
        metrics.tactical_threats.hanging_pieces.len()
    );

    metrics
}

/// Parses `fen` and evaluates it. Only unparsable input fails.
pub fn evaluate_fen(fen: &str) -> Result<SpatialMetrics, EvalError> {
    let position = Position::from_fen(fen)?;
    debug!("Evaluating {}", position.fen());
    Ok(evaluate(&position))
}

/// Evaluates many positions in parallel. Results keep the input order and
/// fail independently.
pub fn evaluate_batch(fens: &[&str]) -> Vec<Result<SpatialMetrics, EvalError>> {
    fens.par_iter().map(|fen| evaluate_fen(fen)).collect()
}

/// True for complete, rules-valid positions.
pub fn validate_fen(fen: &str) -> bool {
    Position::from_fen(fen).is_ok_and(|position| position.is_complete())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_evaluate_fen_rejects_garbage() {
        let result = evaluate_fen("not a position");
        assert!(matches!(result, Err(EvalError::MalformedPosition(_))));
    }

    #[test]
    fn test_evaluate_fen_without_clocks() {
        let abbreviated = evaluate_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").unwrap();
        assert_eq!(abbreviated, evaluate_fen(STARTPOS).unwrap());
        assert!(validate_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"));
    }

    #[test]
    fn test_validate_fen() {
        assert!(validate_fen(STARTPOS));
        assert!(!validate_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"));
        assert!(!validate_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1"));
    }

    #[test]
    fn test_batch_keeps_order() {
        let fens = [STARTPOS, "garbage", "4k3/8/8/8/8/8/8/4K2R w K - 0 1"];
        let results = evaluate_batch(&fens);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().material_balance.difference, 0);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().material_balance.difference, 5);
    }

    #[test]
    fn test_top_level_json_shape() {
        let json = serde_json::to_value(evaluate_fen(STARTPOS).unwrap()).unwrap();
        for key in [
            "material_balance",
            "space_control",
            "center_control",
            "piece_activity",
            "king_safety",
            "pawn_structure",
            "tactical_threats",
            "positional_factors",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["space_control"]["space_advantage"], 0);
        assert_eq!(json["king_safety"]["black"]["king_square"], "e8");
    }
}
