// GET handlers: liveness, info, version

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use super::AppState;
use crate::version::{NAME, VERSION};

/// Generic client-facing message; the real cause only goes to the log.
const INFO_FAILURE_MESSAGE: &str = "Failed to collect service information.";

/// GET / — liveness text.
pub(super) async fn alive_handler() -> &'static str {
    "Service alive!"
}

/// GET /info — full service snapshot, or 500 with `{"error": ...}`.
pub(super) async fn info_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.collector.collect_service_info().await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e) => {
            tracing::error!(stage = %e.stage, "Service info collection failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": INFO_FAILURE_MESSAGE })),
            )
                .into_response()
        }
    }
}

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}
