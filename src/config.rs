use std::env;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::DEFAULT_SHUFFLE_BUDGET;

/// Engine configuration supplied by the embedding application.
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Path to the newline-delimited word list.
    pub dictionary_path: String,
    /// Shuffles granted to each fresh board.
    pub shuffle_budget: u32,
}

impl GameConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            shuffle_budget: env::var("SHUFFLE_BUDGET")
                .unwrap_or_else(|_| DEFAULT_SHUFFLE_BUDGET.to_string())
                .parse()
                .context("SHUFFLE_BUDGET must be a number")?,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary_path: "./dictionary.txt".to_string(),
            shuffle_budget: DEFAULT_SHUFFLE_BUDGET,
        }
    }
}
