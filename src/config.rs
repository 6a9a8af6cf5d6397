//! Environment configuration, resolved once at startup.

use std::env;

/// Runtime settings. Built in `main` and handed to whatever needs it;
/// no module reads the environment on its own after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Classifier sidecar endpoint returning `{"fake_prob": <float>}`.
    pub model_endpoint: String,
    /// Per-request timeout for the sidecar call, in milliseconds.
    pub model_timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let model_endpoint = env::var("MODEL_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:8000/ml/fake".to_string());
        let model_timeout_ms: u64 = env::var("MODEL_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);

        Self {
            bind_addr,
            model_endpoint,
            model_timeout_ms,
        }
    }
}
