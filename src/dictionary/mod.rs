use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// The set of words considered valid for game purposes.
///
/// Words are normalized to uppercase on construction and on query, matching
/// the uppercase letters used on the board.
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from newline-delimited source text.
    ///
    /// Empty and whitespace-only lines are skipped.
    pub fn from_text(text: &str) -> Self {
        let words: HashSet<String> = text
            .lines()
            .map(|line| line.trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        tracing::info!("Loaded {} words into dictionary", words.len());

        Self { words }
    }

    /// Load a dictionary from a newline-delimited word list file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        Ok(Self::from_text(&content))
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert!(!dict.contains("TEST"));
    }

    #[test]
    fn test_from_text_skips_blank_lines() {
        let dict = Dictionary::from_text("cat\n\n   \ndog\n");
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let dict = Dictionary::from_text("cat");
        assert!(dict.contains("cat"));
        assert!(dict.contains("CAT"));
        assert!(dict.contains("Cat"));
        assert!(!dict.contains("CATS"));
    }
}
