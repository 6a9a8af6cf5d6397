//! Text cleaning applied before classification.
//!
//! Lowercase, strip URLs / @mentions / #hashtags and punctuation,
//! drop English stopwords and single-character tokens. The cleaned
//! form is what the classifier sidecar sees and what the API echoes
//! back in the `cleaned` field.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+|www\.\S+").unwrap());
static MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());
static NON_ALNUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());

pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
        "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she",
        "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
        "theirs", "themselves", "what", "which", "who", "whom", "this", "that",
        "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
        "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
        "the", "and", "but", "if", "or", "because", "as", "until", "while", "of",
        "at", "by", "for", "with", "about", "against", "between", "into", "through",
        "during", "before", "after", "above", "below", "to", "from", "up", "down",
        "in", "out", "on", "off", "over", "under", "again", "further", "then",
        "once", "here", "there", "when", "where", "why", "how", "all", "any",
        "both", "each", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "can",
        "will", "just", "don", "should", "now",
    ].into_iter().collect()
});

/// Simple cleaning: lowercase, remove urls, mentions, hashtags,
/// non-alphanumeric chars, then drop stopwords and 1-char tokens.
pub fn clean_text(text: &str) -> String {
    let lower = text.to_lowercase();
    let no_urls = URL_RE.replace_all(&lower, "");
    let no_mentions = MENTION_RE.replace_all(&no_urls, "");
    let no_hashtags = HASHTAG_RE.replace_all(&no_mentions, "");
    let alnum = NON_ALNUM_RE.replace_all(&no_hashtags, " ");

    alnum
        .split_whitespace()
        .filter(|t| t.len() > 1 && !STOPWORDS.contains(t))
        .collect::<Vec<_>>()
        .join(" ")
}
