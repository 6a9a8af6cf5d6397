//! HTTP API: text analysis plus the stats endpoints the dashboard uses.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::classifier::FakeClassifier;
use crate::preprocess::clean_text;
use crate::scoring::{round3, scan_keywords, score_suspicion};
use crate::sentiment::{analyze_sentiment, Sentiment};
use crate::stats::AnalysisLog;

pub struct AppState {
    pub classifier: FakeClassifier,
    pub log: AnalysisLog,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub text: String,
    pub cleaned: String,
    pub fake_prob: f64,
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    pub keywords: Vec<String>,
    pub suspicious: bool,
    pub confidence: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub flagged: u64,
    pub normal: u64,
    /// When this counter window started (service startup, RFC 3339).
    pub since: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WordCloudResponse {
    pub words: HashMap<String, u64>,
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Analyzes one piece of text and returns the suspicion verdict.
#[utoipa::path(
    post,
    path = "/analyze/",
    tag = "analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis result", body = AnalyzeResponse),
        (status = 400, description = "Empty text", body = ErrorResponse),
        (status = 503, description = "Classifier sidecar unavailable", body = ErrorResponse)
    )
)]
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    if req.text.trim().is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "text is required"));
    }

    let cleaned = clean_text(&req.text);

    // Model availability is decided here, before any scoring happens.
    let fake_prob = match state.classifier.predict(&cleaned).await {
        Some(p) => p,
        None => {
            return Err(error(
                StatusCode::SERVICE_UNAVAILABLE,
                "Prediction model not available",
            ))
        }
    };

    let sent = analyze_sentiment(&req.text);
    let keywords = scan_keywords(&req.text);
    let verdict = score_suspicion(fake_prob, sent.label, &keywords);

    if verdict.suspicious {
        println!(
            "🔴 [Analyze] Flagged text (fake_prob={:.3}, keywords={})",
            fake_prob,
            keywords.len()
        );
    }

    state.log.record(&cleaned, verdict.suspicious);

    Ok(Json(AnalyzeResponse {
        text: req.text,
        cleaned,
        fake_prob: round3(fake_prob),
        sentiment: sent.label,
        sentiment_score: round3(sent.score),
        keywords,
        suspicious: verdict.suspicious,
        confidence: verdict.confidence,
    }))
}

/// Count of flagged vs. normal analyses since startup.
#[utoipa::path(
    get,
    path = "/stats",
    tag = "analysis",
    responses(
        (status = 200, description = "Flagged vs normal counts", body = StatsResponse)
    )
)]
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        flagged: state.log.flagged_count(),
        normal: state.log.normal_count(),
        since: state.log.started_at.to_rfc3339(),
    })
}

/// Top-50 frequent terms across flagged text, for the dashboard word cloud.
#[utoipa::path(
    get,
    path = "/wordcloud",
    tag = "analysis",
    responses(
        (status = 200, description = "Term frequencies from flagged text", body = WordCloudResponse)
    )
)]
pub async fn wordcloud(State(state): State<Arc<AppState>>) -> Json<WordCloudResponse> {
    let words = state.log.top_terms(50).into_iter().collect();
    Json(WordCloudResponse { words })
}
