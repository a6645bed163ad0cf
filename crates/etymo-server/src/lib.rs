use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;

use etymo_core::provider::DatasetProvider;
use etymo_core::{ProviderError, view};
use etymo_types::{
    AffixExamplesResponse, HealthResponse, SearchResponse, SuggestionsResponse,
};

/// Backend for the remote dataset variant: idempotent JSON reads over
/// whatever provider the binary wired in (the in-memory dataset in
/// practice).
pub struct ServerState {
    pub provider: Arc<dyn DatasetProvider>,
    pub suggest_limit: usize,
    pub example_limit: usize,
}

type SharedState = Arc<ServerState>;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub async fn serve(addr: &str, state: SharedState) -> Result<(), ServerError> {
    let router = build_router(state);
    info!(%addr, "binding HTTP listener");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server exited");
    Ok(())
}

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/word/:word", get(word))
        .route("/api/suggestions", get(suggestions))
        .route("/api/affix/:part/examples", get(affix_examples))
        .route("/api/analyze", get(analyze))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    signal::ctrl_c().await.ok();
    info!("shutdown requested");
}

/// Upstream/backing-store trouble. A plain dictionary miss is not an
/// HTTP error; it travels inside the payload as `success: false`.
#[derive(Debug)]
struct ApiError(ProviderError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = json!({ "success": false, "message": self.0.to_string() });
        (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        Self(err)
    }
}

async fn health(State(state): State<SharedState>) -> Result<Json<HealthResponse>, ApiError> {
    let word_count = state.provider.word_count().await?;
    Ok(Json(HealthResponse { word_count }))
}

async fn word(
    State(state): State<SharedState>,
    Path(word): Path<String>,
) -> Result<Json<SearchResponse>, ApiError> {
    match state.provider.word(&word).await {
        Ok(record) => Ok(Json(SearchResponse {
            success: true,
            word,
            data: Some(record),
            message: None,
        })),
        Err(ProviderError::NotFound(_)) => Ok(Json(SearchResponse {
            success: false,
            word,
            data: None,
            message: Some(view::MSG_NOT_FOUND.to_string()),
        })),
        Err(err) => Err(err.into()),
    }
}

#[derive(Debug, Deserialize)]
struct SuggestionsParams {
    #[serde(default)]
    prefix: String,
}

async fn suggestions(
    State(state): State<SharedState>,
    Query(params): Query<SuggestionsParams>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let suggestions = state
        .provider
        .suggest(&params.prefix, state.suggest_limit)
        .await?;
    Ok(Json(SuggestionsResponse {
        success: true,
        count: suggestions.len(),
        suggestions,
    }))
}

async fn affix_examples(
    State(state): State<SharedState>,
    Path(part): Path<String>,
) -> Result<Json<AffixExamplesResponse>, ApiError> {
    let examples = state
        .provider
        .affix_examples(&part, state.example_limit)
        .await?;
    Ok(Json(AffixExamplesResponse {
        success: true,
        affix: part,
        count: examples.len(),
        examples,
    }))
}

#[derive(Debug, Deserialize)]
struct AnalyzeParams {
    word: String,
}

async fn analyze(
    State(state): State<SharedState>,
    Query(params): Query<AnalyzeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let breakdown = state.provider.analyze(&params.word).await?;
    Ok(Json(breakdown))
}
