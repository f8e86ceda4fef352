use thiserror::Error;
use utils::PositionError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error(transparent)]
    MalformedPosition(#[from] PositionError),

    #[error("illegal move '{mv}' in position '{fen}'")]
    IllegalMove { mv: String, fen: String },

    /// Playing moves needs both kings on the board.
    #[error("position '{fen}' is missing a king, moves cannot be played from it")]
    IncompletePosition { fen: String },
}
