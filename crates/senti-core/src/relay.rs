//! Relay logic: validate, fetch, normalize.

use std::sync::Arc;
use tracing::{error, info};

use crate::error::{RelayError, RelayResult};
use crate::fetch::{FetchError, SentimentFetch};
use crate::model::AnalysisResult;

/// How much of the input text is echoed into log entries.
const LOG_PREVIEW_CHARS: usize = 50;

/// The relay service: one operation, `analyze`.
///
/// Holds the injected upstream client; each call is an independent
/// validate → fetch → map sequence with no shared mutable state.
#[derive(Clone)]
pub struct RelayService {
    client: Arc<dyn SentimentFetch>,
}

impl RelayService {
    pub fn new(client: Arc<dyn SentimentFetch>) -> Self {
        Self { client }
    }

    /// Analyze the sentiment of `text` via the upstream service.
    ///
    /// Empty or whitespace-only text is rejected before any outbound call.
    /// Upstream fields pass through untransformed; fields the upstream reply
    /// omits stay `None`.
    pub async fn analyze(&self, text: &str) -> RelayResult<AnalysisResult> {
        if text.trim().is_empty() {
            return Err(RelayError::validation("Text cannot be empty"));
        }

        info!(text = %preview(text), "Forwarding text to sentiment service");

        let value = self.client.fetch(text).await.map_err(|e| {
            error!(error = %e, "Sentiment fetch failed");
            match e {
                FetchError::Status { code, detail } => RelayError::Upstream {
                    status: code,
                    detail,
                },
                FetchError::Timeout => RelayError::UpstreamTimeout,
                FetchError::Connect(_) => RelayError::UpstreamUnavailable,
                FetchError::Decode(msg) => RelayError::UpstreamFormat(msg),
                FetchError::Other(msg) => RelayError::Internal(msg),
            }
        })?;

        let result: AnalysisResult = serde_json::from_value(value)
            .map_err(|e| RelayError::UpstreamFormat(e.to_string()))?;

        info!(
            label = ?result.label,
            confidence = ?result.confidence,
            "Sentiment analysis complete"
        );

        Ok(result)
    }
}

/// Truncated, char-boundary-safe preview of the input for logging.
fn preview(text: &str) -> String {
    if text.chars().count() <= LOG_PREVIEW_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
        format!("{}...", head)
    }
}
