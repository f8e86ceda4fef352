use log::debug;
use serde::Serialize;
use utils::moves::play_uci;
use utils::{BoardModel, Position};

use crate::spatial::{evaluate, CenterControl, Territory};
use crate::EvalError;

/// Space and center snapshot taken before a move is played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressionPoint {
    /// 1-based.
    pub ply: usize,
    pub fen: String,
    #[serde(rename = "move")]
    pub mv: String,
    pub space_control: Territory,
    pub center_control: CenterControl,
}

/// Plays `moves` from `fen`, recording the first `limit` plies.
///
/// Every move is validated, including those past the limit.
pub fn progression(fen: &str, moves: &[&str], limit: usize) -> Result<Vec<ProgressionPoint>, EvalError> {
    let position = Position::from_fen(fen)?;
    let mut board = position
        .board()
        .cloned()
        .ok_or_else(|| EvalError::IncompletePosition { fen: position.fen() })?;

    let mut points = Vec::with_capacity(limit.min(moves.len()));
    for (index, uci) in moves.iter().enumerate() {
        let uci = uci.trim();
        let Some((_, next)) = play_uci(&board, uci) else {
            return Err(EvalError::IllegalMove {
                mv: uci.to_string(),
                fen: board.fen(),
            });
        };

        if index < limit {
            let metrics = evaluate(&board);
            points.push(ProgressionPoint {
                ply: index + 1,
                fen: board.fen(),
                mv: uci.to_string(),
                space_control: metrics.space_control.territory,
                center_control: metrics.center_control,
            });
        }
        board = next;
    }

    debug!("Recorded {} of {} plies", points.len(), moves.len());
    Ok(points)
}
