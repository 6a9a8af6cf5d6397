//! In-process analysis log backing the stats and word-cloud endpoints.
//!
//! Counts flagged vs. normal verdicts and keeps per-term frequencies for
//! cleaned flagged text. Nothing persists; counters reset on restart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Terms shorter than this never make the word cloud.
const MIN_TERM_LEN: usize = 3;

pub struct AnalysisLog {
    flagged: AtomicU64,
    normal: AtomicU64,
    flagged_terms: RwLock<HashMap<String, u64>>,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AnalysisLog {
    pub fn new() -> Self {
        Self {
            flagged: AtomicU64::new(0),
            normal: AtomicU64::new(0),
            flagged_terms: RwLock::new(HashMap::new()),
            started_at: chrono::Utc::now(),
        }
    }

    /// Records one verdict. `cleaned` is the stopword-free form, so only
    /// a length filter applies before counting terms.
    pub fn record(&self, cleaned: &str, suspicious: bool) {
        if !suspicious {
            self.normal.fetch_add(1, Ordering::Relaxed);
            return;
        }
        self.flagged.fetch_add(1, Ordering::Relaxed);

        if let Ok(mut terms) = self.flagged_terms.write() {
            for word in cleaned.split_whitespace().filter(|w| w.len() >= MIN_TERM_LEN) {
                *terms.entry(word.to_string()).or_insert(0) += 1;
            }
        }
    }

    pub fn flagged_count(&self) -> u64 {
        self.flagged.load(Ordering::Relaxed)
    }

    pub fn normal_count(&self) -> u64 {
        self.normal.load(Ordering::Relaxed)
    }

    /// Most frequent terms across flagged text, highest count first.
    pub fn top_terms(&self, limit: usize) -> Vec<(String, u64)> {
        let terms = match self.flagged_terms.read() {
            Ok(terms) => terms,
            Err(_) => return Vec::new(),
        };
        let mut freqs: Vec<(String, u64)> =
            terms.iter().map(|(w, c)| (w.clone(), *c)).collect();
        freqs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        freqs.truncate(limit);
        freqs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_flagged_and_normal_separately() {
        let log = AnalysisLog::new();
        log.record("fake nation story", true);
        log.record("nice weather today", false);
        log.record("fake army claim", true);
        assert_eq!(log.flagged_count(), 2);
        assert_eq!(log.normal_count(), 1);
    }

    #[test]
    fn word_cloud_only_tracks_flagged_text() {
        let log = AnalysisLog::new();
        log.record("fake nation story", true);
        log.record("weather weather weather", false);
        let terms = log.top_terms(50);
        assert!(terms.iter().all(|(w, _)| w != "weather"));
    }

    #[test]
    fn top_terms_sorted_by_frequency_and_capped() {
        let log = AnalysisLog::new();
        log.record("fake fake fake nation nation army", true);
        let terms = log.top_terms(2);
        assert_eq!(terms, vec![("fake".to_string(), 3), ("nation".to_string(), 2)]);
    }

    #[test]
    fn short_terms_are_skipped() {
        let log = AnalysisLog::new();
        log.record("pm is at it again go", true);
        assert!(log.top_terms(50).iter().all(|(w, _)| w.len() >= MIN_TERM_LEN));
    }
}
