use rand::Rng;

use crate::game::{Tile, BOARD_HEIGHT, BOARD_WIDTH, TILE_COUNT};
use crate::models::{Board, Move, MoveParseError};

/// The live grid of tiles for a single turn.
///
/// A `TileBoard` is constructed fresh from the wire [`Board`] each time it is
/// needed and flattened back with [`TileBoard::to_board`] after mutation. It
/// owns the structural rules: offset-grid adjacency, move validation, the
/// destroy/collapse/refill cascade and the budgeted shuffle.
pub struct TileBoard {
    letters: Vec<char>,
    shuffle_available_count: u32,
}

impl TileBoard {
    /// Build a tile board from its wire form.
    ///
    /// The letter string must hold exactly one character per cell.
    pub fn new(board: &Board) -> Self {
        let letters: Vec<char> = board.letters.chars().collect();
        assert_eq!(
            letters.len(),
            TILE_COUNT,
            "board letter string must be {} characters",
            TILE_COUNT
        );
        Self {
            letters,
            shuffle_available_count: board.shuffle_available_count,
        }
    }

    pub fn size(&self) -> usize {
        TILE_COUNT
    }

    pub fn shuffle_available_count(&self) -> u32 {
        self.shuffle_available_count
    }

    /// Tile at column `x`, row `y`. Out-of-range coordinates are a caller
    /// bug and panic.
    pub fn tile_at(&self, x: usize, y: usize) -> Tile {
        assert!(
            x < BOARD_WIDTH && y < BOARD_HEIGHT,
            "tile coordinates ({}, {}) out of range",
            x,
            y
        );
        self.tile_at_index(y * BOARD_WIDTH + x)
    }

    /// Tile at a flat row-major index. Out-of-range indices panic.
    pub fn tile_at_index(&self, index: usize) -> Tile {
        Tile::new(index, self.letters[index])
    }

    /// Whether `tile` may be selected after `from` under the offset-grid
    /// rule: the four cardinal neighbors always touch, and the diagonal
    /// pair above or below is selected by the parity of `from`'s column.
    ///
    /// Note this is not symmetric when the two columns differ in parity.
    pub fn is_adjacent(from: &Tile, tile: &Tile) -> bool {
        let (fx, fy) = (from.x() as isize, from.y() as isize);
        let (tx, ty) = (tile.x() as isize, tile.y() as isize);

        // Above and below.
        if tx == fx && (ty == fy - 1 || ty == fy + 1) {
            return true;
        }
        // Left and right.
        if ty == fy && (tx == fx - 1 || tx == fx + 1) {
            return true;
        }
        // The diagonal pair sits above for offset columns, below otherwise.
        let diagonal_y = if from.is_offset_column() {
            fy - 1
        } else {
            fy + 1
        };
        ty == diagonal_y && (tx == fx - 1 || tx == fx + 1)
    }

    /// Whether selecting `tile` is a legal continuation of `selected`.
    ///
    /// Any tile starts an empty selection. Re-selecting the most recent tile
    /// is permitted so the caller can treat it as a de-select. Otherwise the
    /// tile must be adjacent to the last selection and not already used.
    pub fn is_move_valid(selected: &[Tile], tile: &Tile) -> bool {
        let Some(last) = selected.last() else {
            return true;
        };
        if last.same_position(tile) {
            return true;
        }
        Self::is_adjacent(last, tile) && !selected.iter().any(|t| t.same_position(tile))
    }

    /// Resolve a wire move into tiles on this board.
    pub fn move_tiles(&self, mv: &Move) -> Result<Vec<Tile>, MoveParseError> {
        mv.positions()?
            .into_iter()
            .map(|(x, y)| {
                if x < BOARD_WIDTH && y < BOARD_HEIGHT {
                    Ok(self.tile_at(x, y))
                } else {
                    Err(MoveParseError::OutOfBounds { x, y })
                }
            })
            .collect()
    }

    /// Remove the tiles of a submitted word and cascade each affected
    /// column: tiles above a removed cell fall down, then the holes left at
    /// the top are filled from `next_letter`.
    ///
    /// Columns are processed once per tile in move order; the cascade stays
    /// correct when several removed tiles share a column.
    pub fn apply_move<F>(&mut self, tiles: &[Tile], mut next_letter: F)
    where
        F: FnMut() -> char,
    {
        let mut cells: Vec<Option<char>> = self.letters.iter().map(|&c| Some(c)).collect();

        // Destroy tiles in the move.
        for tile in tiles {
            cells[tile.index()] = None;
        }

        // Shift down all tiles above the destroyed ones. Track the next spot
        // to fill so that multiple empty cells in a column collapse cleanly.
        for tile in tiles {
            let x = tile.x();
            let mut next_place_y = tile.y();
            for y in (0..tile.y()).rev() {
                if let Some(letter) = cells[y * BOARD_WIDTH + x].take() {
                    cells[next_place_y * BOARD_WIDTH + x] = Some(letter);
                    next_place_y -= 1;
                }
            }
        }

        // Generate new letters for the empty cells that remain.
        for tile in tiles {
            for y in (0..=tile.y()).rev() {
                let cell = &mut cells[y * BOARD_WIDTH + tile.x()];
                if cell.is_none() {
                    *cell = Some(next_letter());
                }
            }
        }

        self.letters = cells
            .into_iter()
            .map(|c| c.expect("cascade left an empty cell"))
            .collect();
        tracing::debug!("Applied move removing {} tiles", tiles.len());
    }

    /// Shuffle all tiles in place with a Fisher-Yates pass.
    ///
    /// Returns false without touching the board when the shuffle budget is
    /// exhausted; otherwise shuffles, decrements the budget and returns true.
    pub fn shuffle(&mut self, rng: &mut impl Rng) -> bool {
        if self.shuffle_available_count == 0 {
            return false;
        }
        for i in (1..self.letters.len()).rev() {
            let j = rng.random_range(0..=i);
            self.letters.swap(i, j);
        }
        self.shuffle_available_count -= 1;
        true
    }

    /// Flatten the grid back to its wire form.
    pub fn to_board(&self) -> Board {
        Board::new(self.letters_string(), self.shuffle_available_count)
    }

    pub fn letters_string(&self) -> String {
        self.letters.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DEFAULT_LETTERS: &str = concat!(
        "ABCDEFG", "HIJKLMN", "OPQRSTU", "VWXYZAB", "CDEFGHI", "JKLMNOP", "QRSTUVW"
    );

    fn default_board() -> TileBoard {
        TileBoard::new(&Board::new(DEFAULT_LETTERS, 3))
    }

    fn tiles_at_indices(board: &TileBoard, indices: &[usize]) -> Vec<Tile> {
        indices.iter().map(|&i| board.tile_at_index(i)).collect()
    }

    fn apply_stubbed_move(board: &mut TileBoard, indices: &[usize]) {
        let tiles = tiles_at_indices(board, indices);
        board.apply_move(&tiles, || '=');
    }

    #[test]
    fn test_tile_at_matches_index_math() {
        let board = default_board();
        for index in 0..TILE_COUNT {
            let tile = board.tile_at_index(index);
            assert_eq!(board.tile_at(tile.x(), tile.y()), tile);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_tile_at_out_of_range_panics() {
        default_board().tile_at(7, 0);
    }

    #[test]
    fn test_cardinal_adjacency() {
        let board = default_board();
        let center = board.tile_at(3, 3);
        for (x, y) in [(3, 2), (3, 4), (2, 3), (4, 3)] {
            assert!(TileBoard::is_adjacent(&center, &board.tile_at(x, y)));
        }
        assert!(!TileBoard::is_adjacent(&center, &board.tile_at(3, 3)));
        assert!(!TileBoard::is_adjacent(&center, &board.tile_at(5, 3)));
        assert!(!TileBoard::is_adjacent(&center, &board.tile_at(3, 5)));
    }

    #[test]
    fn test_diagonal_adjacency_offset_column() {
        let board = default_board();
        // x=2 is an offset column, so its diagonals are the row above.
        let from = board.tile_at(2, 3);
        assert!(TileBoard::is_adjacent(&from, &board.tile_at(1, 2)));
        assert!(TileBoard::is_adjacent(&from, &board.tile_at(3, 2)));
        assert!(!TileBoard::is_adjacent(&from, &board.tile_at(1, 4)));
        assert!(!TileBoard::is_adjacent(&from, &board.tile_at(3, 4)));
    }

    #[test]
    fn test_diagonal_adjacency_plain_column() {
        let board = default_board();
        // x=3 is not offset, so its diagonals are the row below.
        let from = board.tile_at(3, 3);
        assert!(TileBoard::is_adjacent(&from, &board.tile_at(2, 4)));
        assert!(TileBoard::is_adjacent(&from, &board.tile_at(4, 4)));
        assert!(!TileBoard::is_adjacent(&from, &board.tile_at(2, 2)));
        assert!(!TileBoard::is_adjacent(&from, &board.tile_at(4, 2)));
    }

    #[test]
    fn test_diagonal_adjacency_both_directions() {
        let board = default_board();
        // The diagonal pair is picked from the source tile's column parity,
        // so both directions must be checked explicitly. An offset column
        // reaching up-right lands on a plain column whose down-left diagonal
        // points back at it.
        let offset = board.tile_at(2, 3);
        let plain = board.tile_at(3, 2);
        assert!(TileBoard::is_adjacent(&offset, &plain));
        assert!(TileBoard::is_adjacent(&plain, &offset));

        // Down-right from an offset column is not a legal diagonal, and the
        // plain column below cannot reach back up either.
        let below_right = board.tile_at(3, 4);
        assert!(!TileBoard::is_adjacent(&offset, &below_right));
        assert!(!TileBoard::is_adjacent(&below_right, &offset));
    }

    #[test]
    fn test_is_move_valid_empty_selection() {
        let board = default_board();
        assert!(TileBoard::is_move_valid(&[], &board.tile_at(5, 5)));
    }

    #[test]
    fn test_is_move_valid_reselecting_last_tile() {
        let board = default_board();
        let selected = vec![board.tile_at(1, 1), board.tile_at(1, 2)];
        assert!(TileBoard::is_move_valid(&selected, &board.tile_at(1, 2)));
    }

    #[test]
    fn test_is_move_valid_adjacent_unused_tile() {
        let board = default_board();
        let selected = vec![board.tile_at(1, 1), board.tile_at(1, 2)];
        assert!(TileBoard::is_move_valid(&selected, &board.tile_at(2, 2)));
    }

    #[test]
    fn test_is_move_valid_rejects_non_adjacent() {
        let board = default_board();
        let selected = vec![board.tile_at(1, 1)];
        assert!(!TileBoard::is_move_valid(&selected, &board.tile_at(4, 4)));
    }

    #[test]
    fn test_is_move_valid_rejects_already_selected() {
        let board = default_board();
        let selected = vec![board.tile_at(1, 1), board.tile_at(1, 2)];
        // (1,1) is adjacent to the last selection but already in use.
        assert!(!TileBoard::is_move_valid(&selected, &board.tile_at(1, 1)));
    }

    #[test]
    fn test_apply_move_top_left_corner() {
        let mut board = default_board();
        apply_stubbed_move(&mut board, &[0, 1, 2]);
        assert_eq!(
            board.letters_string(),
            concat!("===DEFG", "HIJKLMN", "OPQRSTU", "VWXYZAB", "CDEFGHI", "JKLMNOP", "QRSTUVW")
        );
    }

    #[test]
    fn test_apply_move_full_top_row() {
        let mut board = default_board();
        apply_stubbed_move(&mut board, &[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(
            board.letters_string(),
            concat!("=======", "HIJKLMN", "OPQRSTU", "VWXYZAB", "CDEFGHI", "JKLMNOP", "QRSTUVW")
        );
    }

    #[test]
    fn test_apply_move_mid_board() {
        let mut board = default_board();
        apply_stubbed_move(&mut board, &[16, 17, 18]);
        assert_eq!(
            board.letters_string(),
            concat!("AB===FG", "HICDEMN", "OPJKLTU", "VWXYZAB", "CDEFGHI", "JKLMNOP", "QRSTUVW")
        );
    }

    #[test]
    fn test_apply_move_mid_board_multi_row() {
        let mut board = default_board();
        apply_stubbed_move(&mut board, &[16, 17, 18, 11]);
        assert_eq!(
            board.letters_string(),
            concat!("AB===FG", "HICD=MN", "OPJKETU", "VWXYZAB", "CDEFGHI", "JKLMNOP", "QRSTUVW")
        );
    }

    #[test]
    fn test_apply_move_multi_row_looping_back() {
        let mut board = default_board();
        apply_stubbed_move(&mut board, &[16, 17, 18, 11, 10, 9]);
        assert_eq!(
            board.letters_string(),
            concat!("AB===FG", "HI===MN", "OPCDETU", "VWXYZAB", "CDEFGHI", "JKLMNOP", "QRSTUVW")
        );
    }

    #[test]
    fn test_apply_move_multi_row_interspersed() {
        let mut board = default_board();
        apply_stubbed_move(&mut board, &[16, 17, 18, 11, 4, 3, 2]);
        assert_eq!(
            board.letters_string(),
            concat!("AB===FG", "HI===MN", "OPJK=TU", "VWXYZAB", "CDEFGHI", "JKLMNOP", "QRSTUVW")
        );
    }

    #[test]
    fn test_apply_move_bottom_right_corner() {
        let mut board = default_board();
        apply_stubbed_move(&mut board, &[46, 47, 48]);
        assert_eq!(
            board.letters_string(),
            concat!("ABCD===", "HIJKEFG", "OPQRLMN", "VWXYSTU", "CDEFZAB", "JKLMGHI", "QRSTNOP")
        );
    }

    #[test]
    fn test_apply_move_full_bottom_row() {
        let mut board = default_board();
        apply_stubbed_move(&mut board, &[42, 43, 44, 45, 46, 47, 48]);
        assert_eq!(
            board.letters_string(),
            concat!("=======", "ABCDEFG", "HIJKLMN", "OPQRSTU", "VWXYZAB", "CDEFGHI", "JKLMNOP")
        );
    }

    #[test]
    fn test_shuffle_with_exhausted_budget_is_a_no_op() {
        let mut board = TileBoard::new(&Board::new(DEFAULT_LETTERS, 0));
        let mut rng = StdRng::seed_from_u64(7);
        assert!(!board.shuffle(&mut rng));
        assert_eq!(board.letters_string(), DEFAULT_LETTERS);
        assert_eq!(board.shuffle_available_count(), 0);
    }

    #[test]
    fn test_shuffle_decrements_budget_and_keeps_letters() {
        let mut board = default_board();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(board.shuffle(&mut rng));
        assert_eq!(board.shuffle_available_count(), 2);

        // A shuffle permutes the letters without changing their multiset.
        let mut before: Vec<char> = DEFAULT_LETTERS.chars().collect();
        let mut after: Vec<char> = board.letters_string().chars().collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_shuffle_budget_runs_out() {
        let mut board = TileBoard::new(&Board::new(DEFAULT_LETTERS, 1));
        let mut rng = StdRng::seed_from_u64(42);
        assert!(board.shuffle(&mut rng));
        assert!(!board.shuffle(&mut rng));
    }

    #[test]
    fn test_to_board_round_trip() {
        let board = default_board();
        assert_eq!(board.to_board(), Board::new(DEFAULT_LETTERS, 3));
    }

    #[test]
    fn test_move_tiles_resolves_coordinates() {
        let board = default_board();
        let mv = Move::new("(2,2),(3,2),(4,2)");
        let tiles = board.move_tiles(&mv).unwrap();
        let letters: String = tiles.iter().map(|t| t.letter()).collect();
        assert_eq!(letters, "QRS");
        assert_eq!(tiles[0].index(), 16);
    }

    #[test]
    fn test_move_tiles_rejects_out_of_bounds() {
        let board = default_board();
        let mv = Move::new("(7,0)");
        assert_eq!(
            board.move_tiles(&mv),
            Err(MoveParseError::OutOfBounds { x: 7, y: 0 })
        );
    }
}
