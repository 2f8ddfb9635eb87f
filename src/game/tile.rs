use std::fmt;

use crate::game::BOARD_WIDTH;

/// A specific tile on the board with an index, position and letter.
///
/// Tiles are transient value objects derived from board state; they carry no
/// identity across board mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    index: usize,
    letter: char,
    x: usize,
    y: usize,
}

impl Tile {
    pub fn new(index: usize, letter: char) -> Self {
        Self {
            index,
            letter,
            x: index % BOARD_WIDTH,
            y: index / BOARD_WIDTH,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Whether this tile sits in an offset column. Offset columns render
    /// shifted down half a tile, which flips their legal diagonal neighbors
    /// from the lower pair to the upper pair.
    pub fn is_offset_column(&self) -> bool {
        self.x % 2 == 0
    }

    /// True when both tiles name the same board position.
    pub fn same_position(&self, other: &Tile) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[index={}, letter={}, x={}, y={}]",
            self.index, self.letter, self.x, self.y
        )
    }
}
