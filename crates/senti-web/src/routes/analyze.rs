//! Sentiment analysis route handler.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use senti_core::{AnalysisResult, AnalyzeRequest, RelayError};

use crate::state::AppState;

/// Error payload shape consumed by the client form.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub async fn analyze_sentiment(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, (StatusCode, Json<ErrorResponse>)> {
    let result = state.relay.analyze(&req.text).await.map_err(error_reply)?;

    Ok(Json(result))
}

fn error_reply(e: RelayError) -> (StatusCode, Json<ErrorResponse>) {
    // Upstream statuses pass through; anything unmappable is a 500.
    let status =
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, Json(ErrorResponse { detail: e.to_string() }))
}
