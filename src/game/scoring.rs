use crate::game::Tile;
use crate::models::Stats;
use crate::utils::letters::get_letter_score;

/// Selected words must be at least this long for submission.
pub const MINIMUM_WORD_LENGTH: usize = 3;

/// Multiplier applied based on word length, as (length, multiplier) steps.
/// Three-letter words have no multiplier, four letters score 2x, and so on;
/// lengths beyond the last step keep its multiplier.
const WORD_LENGTH_MULTIPLIERS: [(usize, u32); 5] = [(3, 1), (4, 2), (6, 3), (8, 4), (12, 5)];

pub struct Scoring;

impl Scoring {
    pub fn is_minimum_word_length(length: usize) -> bool {
        length >= MINIMUM_WORD_LENGTH
    }

    /// Base point value for a letter.
    pub fn points_for_letter(letter: char) -> u32 {
        get_letter_score(letter)
    }

    fn word_length_multiplier(length: usize) -> u32 {
        for (step, multiplier) in WORD_LENGTH_MULTIPLIERS {
            if length <= step {
                return multiplier;
            }
        }
        WORD_LENGTH_MULTIPLIERS[WORD_LENGTH_MULTIPLIERS.len() - 1].1
    }

    /// Score for a word: the sum of its letter points times the length
    /// multiplier.
    pub fn word_score(tiles: &[Tile]) -> u32 {
        let letter_points: u32 = tiles.iter().map(|t| Self::points_for_letter(t.letter())).sum();
        Self::word_length_multiplier(tiles.len()) * letter_points
    }

    /// Fold a scored word into the running stats: bump the totals and track
    /// the longest and highest-scoring words seen so far.
    pub fn apply_move_stats(stats: &Stats, word: &str, score: u32) -> Stats {
        let mut next = stats.clone();
        next.score += score;
        next.move_count += 1;

        let longest_so_far = next.longest_word.as_deref().map_or(0, |w| w.chars().count());
        if word.chars().count() > longest_so_far {
            next.longest_word = Some(word.to_string());
            next.longest_word_score = Some(score);
        }

        if score > next.highest_scoring_word_score.unwrap_or(0) {
            next.highest_scoring_word = Some(word.to_string());
            next.highest_scoring_word_score = Some(score);
        }

        next
    }
}
