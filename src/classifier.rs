//! Fake-probability classifier client.
//!
//! The embedding + classifier pipeline lives in a Python sidecar; this
//! module only ships cleaned text over HTTP and brings back a single
//! probability. The sidecar contract is `{"fake_prob": <float>}` where
//! the value is P(fake), i.e. the probability of the fake/anti-narrative
//! class. Thresholds downstream apply to that class.

use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct FakeProbResponse {
    fake_prob: f64,
}

/// HTTP client for the classifier sidecar. Built once at startup from
/// config and injected into the app state; loading/availability of model
/// artifacts is entirely the sidecar's problem.
pub struct FakeClassifier {
    client: reqwest::Client,
    endpoint: String,
}

impl FakeClassifier {
    pub fn new(endpoint: String, timeout_ms: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client, endpoint }
    }

    /// Asks the sidecar for the fake-probability of `cleaned` text.
    /// Returns `None` on any transport or parse failure; the caller is
    /// expected to answer with a "model unavailable" error instead of
    /// ever invoking the scorer.
    pub async fn predict(&self, cleaned: &str) -> Option<f64> {
        let res = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "text": cleaned }))
            .send()
            .await;

        match res {
            Ok(response) => {
                if response.status().is_success() {
                    match response.json::<FakeProbResponse>().await {
                        Ok(data) => Some(data.fake_prob.clamp(0.0, 1.0)),
                        Err(e) => {
                            eprintln!("⚠️ [ML] fake-prob parse error: {}", e);
                            None
                        }
                    }
                } else {
                    eprintln!("⚠️ [ML] fake-prob request failed: {}", response.status());
                    None
                }
            }
            Err(e) => {
                eprintln!("⚠️ [ML] classifier connection failed: {}. Is the model sidecar running?", e);
                None
            }
        }
    }
}
