pub mod board;
pub mod stats;

pub use board::{Board, Move, MoveParseError, DEFAULT_SHUFFLE_BUDGET};
pub use stats::Stats;
