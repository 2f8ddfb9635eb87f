// Puzzle-board engine modules.

pub mod board;
pub mod generator;
pub mod scoring;
pub mod selection;
pub mod solver;
pub mod tile;

pub use board::TileBoard;
pub use generator::{BoardGenerator, LetterPicker};
pub use scoring::{Scoring, MINIMUM_WORD_LENGTH};
pub use selection::TileSelection;
pub use solver::{BoardSolver, WordEntry};
pub use tile::Tile;

/// Board columns.
pub const BOARD_WIDTH: usize = 7;
/// Board rows.
pub const BOARD_HEIGHT: usize = 7;
/// Total number of tiles on the board.
pub const TILE_COUNT: usize = BOARD_WIDTH * BOARD_HEIGHT;
