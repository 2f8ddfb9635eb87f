use rand::Rng;

use crate::game::TILE_COUNT;
use crate::models::Board;
use crate::utils::letters::get_cumulative_frequencies;

/// Weighted random letter source following English letter frequencies.
///
/// Draws a uniform roll in `[0, 100)` and walks the cumulative frequency
/// table until the running total reaches the roll (inverse-CDF sampling).
pub struct LetterPicker {
    cumulative: Vec<(char, f32)>,
}

impl LetterPicker {
    pub fn new() -> Self {
        Self {
            cumulative: get_cumulative_frequencies(),
        }
    }

    /// Draw one weighted random letter.
    pub fn pick(&self, rng: &mut impl Rng) -> char {
        self.letter_for_roll(rng.random::<f32>() * 100.0)
    }

    /// Draw `n` weighted random letters.
    pub fn generate_letters(&self, n: usize, rng: &mut impl Rng) -> String {
        (0..n).map(|_| self.pick(rng)).collect()
    }

    fn letter_for_roll(&self, roll: f32) -> char {
        for &(letter, cumulative) in &self.cumulative {
            if cumulative >= roll {
                return letter;
            }
        }
        // Rounding can leave the accumulated total just short of the roll;
        // fall back to the table's final letter.
        self.cumulative.last().map_or('Z', |&(letter, _)| letter)
    }
}

impl Default for LetterPicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces fresh boards in wire form.
pub struct BoardGenerator;

impl BoardGenerator {
    /// Generate a full board of weighted random letters with the given
    /// shuffle budget.
    pub fn generate(shuffle_budget: u32, rng: &mut impl Rng) -> Board {
        let picker = LetterPicker::new();
        let letters = picker.generate_letters(TILE_COUNT, rng);
        tracing::debug!("Generated board [letters={}]", letters);
        Board::new(letters, shuffle_budget)
    }
}
