pub mod by_color;
pub mod compare;
mod config;
mod error;
pub mod insights;
pub mod piece_values;
pub mod progression;
mod serialize;
pub mod spatial;

pub use by_color::ByColor;
pub use compare::{compare_moves, MoveComparison, PositionImpact};
pub use config::AnalysisConfig;
pub use error::EvalError;
pub use insights::{generate_insights, training_recommendations, Insights};
pub use piece_values::{piece_value, PIECE_VALUES};
pub use progression::{progression, ProgressionPoint};
pub use spatial::{evaluate, evaluate_batch, evaluate_fen, validate_fen, SpatialMetrics};
