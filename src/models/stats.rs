use serde::{Deserialize, Serialize};

/// Cumulative game statistics in wire form. The engine computes the post-move
/// value (see `Scoring::apply_move_stats`); storing it is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub score: u32,
    pub move_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_word_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_scoring_word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_scoring_word_score: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_wire_format_omits_unset_words() {
        let stats = Stats {
            score: 12,
            move_count: 1,
            ..Stats::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"score":12,"moveCount":1}"#);
    }

    #[test]
    fn test_stats_wire_format_camel_case() {
        let stats = Stats {
            score: 40,
            move_count: 2,
            longest_word: Some("TILES".to_string()),
            longest_word_score: Some(27),
            highest_scoring_word: Some("TILES".to_string()),
            highest_scoring_word_score: Some(27),
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains(r#""moveCount":2"#));
        assert!(json.contains(r#""longestWord":"TILES""#));
        assert!(json.contains(r#""highestScoringWordScore":27"#));
        let back: Stats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
