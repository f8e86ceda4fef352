mod attacks;
mod board_model;
pub mod board_metrics;
pub mod moves;
mod position;
mod sketch;
pub mod squares;

pub use attacks::{attackers_of, piece_attacks};
pub use board_metrics::BoardMetrics;
pub use board_model::BoardModel;
pub use position::{Position, PositionError};
pub use sketch::{piece_symbol, Sketch};
