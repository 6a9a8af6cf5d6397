//! Rule-based suspicion scoring.
//!
//! Combines three independent signals (classifier fake-probability,
//! sentiment polarity, watch-list keyword hits) into a boolean verdict
//! plus a blended confidence. OR-of-rules on purpose: each rule stays
//! independently auditable instead of a single learned boundary.

use once_cell::sync::Lazy;

use crate::sentiment::Sentiment;

/// Fake-probability above this is suspicious on its own.
pub const FAKE_PROB_THRESHOLD: f64 = 0.6;
/// Lower fake-probability bar when negative sentiment corroborates.
pub const CORROBORATED_THRESHOLD: f64 = 0.45;

const FAKE_PROB_WEIGHT: f64 = 0.6;
const SENTIMENT_WEIGHT: f64 = 0.4;

/// Watch-list vocabulary for the keyword scan. Lowercase, fixed order.
pub static WATCHLIST: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "india", "bharat", "government", "govt", "army", "modi", "pm", "citizen", "nation",
    ]
});

/// Final verdict for one piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub suspicious: bool,
    /// Blend of fake-probability and sentiment polarity, in [0, 1],
    /// rounded to 3 decimals. Not a calibrated statistical confidence.
    pub confidence: f64,
}

/// Scores one analysis. Pure and total over the declared domain:
/// `fake_prob` in [0, 1] (the caller's boundary clamps it), any sentiment
/// label, any keyword hit list. No I/O, no hidden state.
pub fn score_suspicion(fake_prob: f64, sentiment: Sentiment, keyword_hits: &[String]) -> Verdict {
    let negative = sentiment == Sentiment::Negative;

    let suspicious = fake_prob > FAKE_PROB_THRESHOLD
        || (negative && !keyword_hits.is_empty())
        || (fake_prob > CORROBORATED_THRESHOLD && negative);

    let sentiment_signal = if negative { 1.0 } else { 0.0 };
    let confidence =
        (FAKE_PROB_WEIGHT * fake_prob + SENTIMENT_WEIGHT * sentiment_signal).min(1.0);

    Verdict {
        suspicious,
        confidence: round3(confidence),
    }
}

/// Reports every watch-list keyword occurring as a substring of the
/// lower-cased text. Vocabulary order, each keyword at most once.
pub fn scan_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WATCHLIST
        .iter()
        .filter(|k| lower.contains(*k))
        .map(|k| (*k).to_string())
        .collect()
}

/// Rounds to 3 decimal places, the precision every probability/score
/// leaves the API with.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_fake_prob_is_suspicious_alone() {
        let verdict = score_suspicion(0.61, Sentiment::Positive, &[]);
        assert!(verdict.suspicious);
    }

    #[test]
    fn negative_sentiment_with_keywords_is_suspicious_regardless_of_prob() {
        let hits = vec!["india".to_string()];
        let verdict = score_suspicion(0.0, Sentiment::Negative, &hits);
        assert!(verdict.suspicious);
    }

    #[test]
    fn negative_sentiment_corroborates_mid_probability() {
        // 0.5 > 0.45, so the corroboration rule fires even with no keywords.
        let verdict = score_suspicion(0.5, Sentiment::Negative, &[]);
        assert!(verdict.suspicious);
    }

    #[test]
    fn benign_text_is_not_suspicious() {
        let verdict = score_suspicion(0.3, Sentiment::Positive, &[]);
        assert!(!verdict.suspicious);
    }

    #[test]
    fn threshold_is_strict() {
        // Exactly at the threshold does not trigger rule 1.
        let verdict = score_suspicion(0.6, Sentiment::Positive, &[]);
        assert!(!verdict.suspicious);
    }

    #[test]
    fn confidence_bounds() {
        assert_eq!(
            score_suspicion(1.0, Sentiment::Negative, &[]).confidence,
            1.0
        );
        assert_eq!(
            score_suspicion(0.0, Sentiment::Positive, &[]).confidence,
            0.0
        );
    }

    #[test]
    fn confidence_is_monotone_in_fake_prob() {
        let mut last = -1.0;
        for step in 0..=10 {
            let p = step as f64 / 10.0;
            let conf = score_suspicion(p, Sentiment::Negative, &[]).confidence;
            assert!(conf >= last);
            assert!(conf <= 1.0);
            last = conf;
        }
    }

    #[test]
    fn confidence_rounds_to_three_decimals() {
        // 0.6 * 0.777777 = 0.4666662 -> 0.467
        let verdict = score_suspicion(0.777777, Sentiment::Positive, &[]);
        assert_eq!(verdict.confidence, 0.467);
        assert_eq!(round3(0.666666), 0.667);
    }

    #[test]
    fn scoring_is_idempotent() {
        let hits = vec!["nation".to_string()];
        let a = score_suspicion(0.52, Sentiment::Negative, &hits);
        let b = score_suspicion(0.52, Sentiment::Negative, &hits);
        assert_eq!(a, b);
    }

    #[test]
    fn keyword_scan_is_case_insensitive_and_ordered() {
        let hits = scan_keywords("The GOVERNMENT of India, says the Army. India again!");
        assert_eq!(hits, vec!["india", "government", "army"]);
    }

    #[test]
    fn keyword_scan_matches_substrings() {
        // "pm" matches inside other words; substring semantics are intended.
        let hits = scan_keywords("Development at 9pm");
        assert_eq!(hits, vec!["pm"]);
    }

    #[test]
    fn keyword_scan_empty_on_unrelated_text() {
        assert!(scan_keywords("nothing to see here").is_empty());
    }
}
