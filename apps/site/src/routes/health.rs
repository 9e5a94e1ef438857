use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::error;

use crate::content::provider::safe_load;
use crate::state::AppState;

/// GET /health
/// Returns service status and whether the configured content source would load
/// again on the next restart.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let source = state.config.content_source();
    // Reading a content file is blocking IO.
    let loads = match tokio::task::spawn_blocking(move || safe_load(&source).is_some()).await {
        Ok(loads) => loads,
        Err(e) => {
            error!("Content check task failed: {e}");
            false
        }
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "vitae-site",
        "content": if loads { "ok" } else { "invalid" },
        "contact_form": state.contact.is_configured()
    }))
}
