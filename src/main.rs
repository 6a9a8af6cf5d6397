mod api;
mod classifier;
mod config;
mod preprocess;
mod scoring;
mod sentiment;
mod stats;

use axum::{
    routing::{get, post},
    Router,
};
use dotenv::dotenv;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(api::analyze, api::stats, api::wordcloud),
    components(
        schemas(
            api::AnalyzeRequest,
            api::AnalyzeResponse,
            api::ErrorResponse,
            api::StatsResponse,
            api::WordCloudResponse,
            crate::sentiment::Sentiment
        )
    ),
    tags(
        (name = "analysis", description = "Text Analysis API")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env();
    tracing::info!("🧠 Classifier sidecar: {}", config.model_endpoint);

    let state = Arc::new(api::AppState {
        classifier: classifier::FakeClassifier::new(
            config.model_endpoint.clone(),
            config.model_timeout_ms,
        ),
        log: stats::AnalysisLog::new(),
    });

    let app = Router::new()
        .merge(SwaggerUi::new("/narrative-guard-swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/analyze/", post(api::analyze))
        .route("/stats", get(api::stats))
        .route("/wordcloud", get(api::wordcloud))
        .layer(CorsLayer::permissive()) // React frontend runs on another origin
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    println!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
