//! Word-tile puzzle engine.
//!
//! Models a 7x7 board of letter tiles on an offset ("brick") grid where each
//! tile touches up to six neighbors. Players build words by tracing adjacent
//! tiles; submitted words are removed, columns collapse under gravity and new
//! letters spawn at the top. The crate also provides word scoring, a bounded
//! board shuffle and an exhaustive solver that enumerates every dictionary
//! word currently on the board.
//!
//! The engine is synchronous and single-threaded. Rendering, networking and
//! persistence of the wire types in [`models`] belong to the embedding
//! application.

pub mod config;
pub mod dictionary;
pub mod game;
pub mod models;
pub mod utils;

pub use config::GameConfig;
pub use dictionary::Dictionary;
pub use game::{
    BoardGenerator, BoardSolver, LetterPicker, Scoring, Tile, TileBoard, TileSelection, WordEntry,
    BOARD_HEIGHT, BOARD_WIDTH, TILE_COUNT,
};
pub use models::{Board, Move, MoveParseError, Stats, DEFAULT_SHUFFLE_BUDGET};
