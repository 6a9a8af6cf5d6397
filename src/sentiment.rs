//! Lexicon-based sentiment analysis.
//!
//! Lightweight word-list classifier standing in for a transformer
//! sentiment pipeline: no external ML dependencies, binary
//! POSITIVE/NEGATIVE labels with a score in [0, 1].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "good", "great", "excellent", "amazing", "wonderful", "fantastic", "superb",
        "outstanding", "brilliant", "love", "loved", "loving", "best", "better",
        "positive", "happy", "joy", "joyful", "beautiful", "perfect", "awesome",
        "incredible", "magnificent", "delightful", "pleasant", "proud", "praise",
        "praised", "celebrate", "celebrated", "progress", "peace", "peaceful",
        "success", "successful", "win", "winner", "winning", "helpful", "honest",
        "reliable", "trustworthy", "valuable", "beneficial", "favorable", "thriving",
        "flourishing", "prosperous", "unity", "united", "welcome", "hope", "hopeful",
    ].into_iter().collect()
});

static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "bad", "terrible", "awful", "horrible", "poor", "worst", "worse", "hate",
        "hated", "hating", "dislike", "disappointing", "disappointed", "failure",
        "failed", "fail", "failing", "negative", "sad", "unhappy", "angry",
        "annoyed", "frustrated", "frustrating", "problem", "problems", "corrupt",
        "corruption", "lies", "lie", "lying", "liar", "propaganda", "fake",
        "fraud", "scam", "traitor", "enemy", "attack", "attacks", "violence",
        "violent", "riot", "riots", "destroy", "destroyed", "ruin", "ruined",
        "shame", "shameful", "disgrace", "disgraceful", "wrong", "useless",
        "worthless", "danger", "dangerous", "threat", "crisis", "collapse",
    ].into_iter().collect()
});

/// Coarse polarity label, serialized the way the upstream sentiment
/// models emit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Negative,
}

/// Result of sentiment analysis
#[derive(Debug, Clone)]
pub struct SentimentResult {
    pub label: Sentiment,
    /// Confidence of the label, in [0, 1].
    pub score: f64,
}

/// Analyzes the sentiment of the provided text using keyword matching.
/// Text with no sentiment-bearing words comes back POSITIVE at 0.5, the
/// weakest verdict the binary label set allows.
pub fn analyze_sentiment(text: &str) -> SentimentResult {
    let lowercase_text = text.to_lowercase();
    let words: Vec<&str> = lowercase_text
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| w.len() > 2)
        .collect();

    let positive_count = words.iter().filter(|w| POSITIVE_WORDS.contains(*w)).count();
    let negative_count = words.iter().filter(|w| NEGATIVE_WORDS.contains(*w)).count();

    let total = positive_count + negative_count;
    if total == 0 {
        return SentimentResult {
            label: Sentiment::Positive,
            score: 0.5,
        };
    }

    let positive_ratio = positive_count as f64 / total as f64;
    if positive_ratio >= 0.5 {
        SentimentResult {
            label: Sentiment::Positive,
            score: positive_ratio,
        }
    } else {
        SentimentResult {
            label: Sentiment::Negative,
            score: 1.0 - positive_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_sentiment() {
        let text = "What a wonderful and beautiful country, so much progress and hope!";
        let result = analyze_sentiment(text);
        assert_eq!(result.label, Sentiment::Positive);
        assert!(result.score > 0.5);
    }

    #[test]
    fn test_negative_sentiment() {
        let text = "This is terrible propaganda full of lies, a shameful attack on the truth.";
        let result = analyze_sentiment(text);
        assert_eq!(result.label, Sentiment::Negative);
        assert!(result.score > 0.5);
    }

    #[test]
    fn test_neutral_text_defaults_to_weak_positive() {
        let result = analyze_sentiment("The item arrived on a Tuesday.");
        assert_eq!(result.label, Sentiment::Positive);
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn test_label_serializes_uppercase() {
        let json = serde_json::to_string(&Sentiment::Negative).unwrap();
        assert_eq!(json, "\"NEGATIVE\"");
    }
}
