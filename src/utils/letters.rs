use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Base score points for each letter.
pub static LETTER_SCORES: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // 1 point letters
    for ch in ['A', 'E', 'H', 'I', 'O', 'R', 'S', 'T'] {
        map.insert(ch, 1);
    }

    // 2 points
    for ch in ['D', 'F', 'G', 'L', 'M', 'P'] {
        map.insert(ch, 2);
    }

    // 3 points
    for ch in ['B', 'C', 'J', 'K', 'N', 'Q', 'U', 'V', 'W', 'X', 'Y', 'Z'] {
        map.insert(ch, 3);
    }

    map
});

/// English letter frequency percentages, per Wikipedia. Sums to ~100 and is
/// used as the weight table for random letter generation.
pub static CHAR_FREQUENCIES: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    vec![
        ('A', 8.167),
        ('B', 1.492),
        ('C', 2.782),
        ('D', 4.253),
        ('E', 12.702),
        ('F', 2.228),
        ('G', 2.015),
        ('H', 6.094),
        ('I', 6.966),
        ('J', 0.153),
        ('K', 0.772),
        ('L', 4.025),
        ('M', 2.406),
        ('N', 6.749),
        ('O', 7.507),
        ('P', 1.929),
        ('Q', 0.095),
        ('R', 5.987),
        ('S', 6.327),
        ('T', 9.056),
        ('U', 2.758),
        ('V', 0.978),
        ('W', 2.36),
        ('X', 0.15),
        ('Y', 1.974),
        ('Z', 0.074),
    ]
});

/// Get the point value for a letter
pub fn get_letter_score(letter: char) -> u32 {
    let upper = letter.to_ascii_uppercase();
    *LETTER_SCORES.get(&upper).unwrap_or(&1)
}

/// Calculate the cumulative distribution for weighted random selection
pub fn get_cumulative_frequencies() -> Vec<(char, f32)> {
    let mut cumulative = 0.0;
    CHAR_FREQUENCIES
        .iter()
        .map(|(ch, freq)| {
            cumulative += freq;
            (*ch, cumulative)
        })
        .collect()
}
