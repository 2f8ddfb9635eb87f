use crate::game::{Scoring, Tile, TileBoard};
use crate::models::Move;

/// An in-progress word selection.
///
/// Maintains the move invariant: consecutive tiles are adjacent and no tile
/// repeats, with re-selecting the last tile acting as undo.
#[derive(Debug, Default)]
pub struct TileSelection {
    tiles: Vec<Tile>,
}

impl TileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Apply a tile pick. Invalid picks are ignored and return false;
    /// re-picking the last tile removes it.
    pub fn select(&mut self, tile: Tile) -> bool {
        if !TileBoard::is_move_valid(&self.tiles, &tile) {
            return false;
        }
        match self.tiles.last() {
            Some(last) if last.same_position(&tile) => {
                self.tiles.pop();
            }
            _ => self.tiles.push(tile),
        }
        true
    }

    /// The word spelled by the current selection.
    pub fn word(&self) -> String {
        self.tiles.iter().map(|t| t.letter()).collect()
    }

    /// Whether the selection can be submitted against the given dictionary.
    pub fn is_submittable(&self, dictionary: &crate::dictionary::Dictionary) -> bool {
        Scoring::is_minimum_word_length(self.tiles.len()) && dictionary.contains(&self.word())
    }

    /// The selection in wire form.
    pub fn to_move(&self) -> Move {
        let positions: Vec<(usize, usize)> = self.tiles.iter().map(|t| (t.x(), t.y())).collect();
        Move::from_positions(&positions)
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}
