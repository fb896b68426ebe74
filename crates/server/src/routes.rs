use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "crypto-signal-bot";
const DEFAULT_ASSET: &str = "BTCUSDT";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/api/generate-signal", post(generate_signal))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
struct GenerateSignalRequest {
    asset: Option<String>,
}

/// POST /api/generate-signal runs the full pipeline for one symbol.
/// Broadcast delivery failures are logged, never surfaced as an HTTP
/// failure; generation succeeded once the signal is persisted.
async fn generate_signal(
    State(state): State<Arc<AppState>>,
    body: Option<Json<GenerateSignalRequest>>,
) -> Result<Json<Value>, ApiError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let asset = request
        .asset
        .unwrap_or_else(|| DEFAULT_ASSET.to_string());

    let (signal, report) = state.pipeline.generate(&asset).await?;

    if !report.failed.is_empty() {
        warn!(
            "Signal {} reached {} of {} recipients",
            signal.id,
            report.delivered,
            report.delivered + report.failed.len()
        );
    }

    Ok(Json(json!({ "success": true, "signal": signal })))
}

/// GET / is the liveness probe.
async fn liveness() -> Json<Value> {
    Json(json!({
        "status": "online",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
