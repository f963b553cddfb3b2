//! Hugging Face Space client for sentiment classification.
//!
//! The Space exposes a GET endpoint taking the text as a query parameter
//! and returns JSON with `label`, `numeric_label` and `confidence` fields.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use senti_core::{FetchError, SentimentFetch};

/// Default sentiment API URL.
pub const DEFAULT_UPSTREAM_URL: &str = "https://devchopra-sentimentanalysis.hf.space/";

/// Bound on the outbound call; exceeding it surfaces as `FetchError::Timeout`.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Sentiment API client.
#[derive(Clone)]
pub struct SpaceClient {
    base_url: String,
    client: reqwest::Client,
}

impl SpaceClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        debug!(base_url = %base_url, "SpaceClient initialized");
        Self {
            base_url: base_url.to_string(),
            client,
        }
    }

    /// Create a client from the environment.
    ///
    /// Uses the `SENTI_UPSTREAM_URL` environment variable if set,
    /// otherwise the public Space URL.
    pub fn from_env() -> Self {
        let base_url = std::env::var("SENTI_UPSTREAM_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        Self::new(&base_url)
    }
}

#[async_trait]
impl SentimentFetch for SpaceClient {
    async fn fetch(&self, text: &str) -> Result<serde_json::Value, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("text", text)])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        debug!(status = %status, "Upstream responded");

        // Read the full body before classifying; error bodies carry detail.
        let body = response.text().await.map_err(classify_transport)?;

        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            debug!(preview = %body_preview(&body), "Unparseable upstream body");
            FetchError::Decode(e.to_string())
        })
    }
}

/// Map a reqwest transport error onto the tagged fetch-error variants.
fn classify_transport(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_connect() {
        FetchError::Connect(e.to_string())
    } else {
        FetchError::Other(e.to_string())
    }
}

/// Best-effort error detail: the JSON `detail` field when the body carries
/// one, the raw body text otherwise.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => match value.get("detail") {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => body.to_string(),
        },
        Err(_) => body.to_string(),
    }
}

fn body_preview(body: &str) -> String {
    body.chars().take(200).collect()
}
