use crate::dictionary::Dictionary;
use crate::game::{Scoring, Tile, TileBoard, BOARD_HEIGHT, BOARD_WIDTH};

/// A word found on the board and the ordered tiles that spell it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub text: String,
    pub tiles: Vec<Tile>,
}

/// Analyzes a board to obtain all dictionary words present on it.
///
/// The walk is an exhaustive depth-first traversal from every cell over the
/// offset-grid adjacency. Once a partial word reaches the minimum submission
/// length, the walk only continues while the partial is itself a complete
/// dictionary entry; longer words whose intermediate prefixes are not words
/// themselves are therefore never found. That matches the game's historical
/// behavior and is kept as-is.
pub struct BoardSolver<'a> {
    dictionary: &'a Dictionary,
    board: &'a TileBoard,
}

impl<'a> BoardSolver<'a> {
    pub fn new(dictionary: &'a Dictionary, board: &'a TileBoard) -> Self {
        Self { dictionary, board }
    }

    /// Enumerate every valid word currently on the board.
    ///
    /// One entry is produced per distinct tile walk; the same text reached
    /// by different walks appears once per walk.
    pub fn find_all_words(&self) -> Vec<WordEntry> {
        let mut found = Vec::new();
        for x in 0..BOARD_WIDTH {
            for y in 0..BOARD_HEIGHT {
                self.walk_tile(x as isize, y as isize, "", &[], &mut found);
            }
        }
        tracing::debug!("Board solve found {} words", found.len());
        found
    }

    fn walk_tile(&self, x: isize, y: isize, text: &str, path: &[Tile], found: &mut Vec<WordEntry>) {
        // Gracefully early-out if we've walked off the board.
        if x < 0 || y < 0 || x >= BOARD_WIDTH as isize || y >= BOARD_HEIGHT as isize {
            return;
        }

        let tile = self.board.tile_at(x as usize, y as usize);
        if path.iter().any(|t| t.index() == tile.index()) {
            return;
        }

        let mut candidate = String::with_capacity(text.len() + 1);
        candidate.push_str(text);
        candidate.push(tile.letter());

        // Each path is copied per branch so sibling walks never alias.
        let mut tiles = path.to_vec();
        tiles.push(tile);

        if Scoring::is_minimum_word_length(candidate.chars().count()) {
            if !self.dictionary.contains(&candidate) {
                return;
            }
            found.push(WordEntry {
                text: candidate.clone(),
                tiles: tiles.clone(),
            });
        }

        // Recurse through all connected tiles looking for longer words.
        // Above.
        self.walk_tile(x, y - 1, &candidate, &tiles, found);
        // Below.
        self.walk_tile(x, y + 1, &candidate, &tiles, found);
        // Left.
        self.walk_tile(x - 1, y, &candidate, &tiles, found);
        // Right.
        self.walk_tile(x + 1, y, &candidate, &tiles, found);
        // The diagonal pair for this tile's column parity.
        let diagonal_y = if tile.is_offset_column() { y - 1 } else { y + 1 };
        self.walk_tile(x - 1, diagonal_y, &candidate, &tiles, found);
        self.walk_tile(x + 1, diagonal_y, &candidate, &tiles, found);
    }
}
