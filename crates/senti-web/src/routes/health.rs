//! Health check route handler.

use axum::Json;
use serde_json::{json, Value};

/// GET /health - the relay holds no state to probe, so this is unconditional.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
