use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and runtime mode.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let mode = if state.config.mode.is_packaged() {
        "packaged"
    } else {
        "development"
    };

    Json(json!({
        "status": "ok",
        "version": "0.1.0",
        "service": "jobfit-server",
        "mode": mode
    }))
}
