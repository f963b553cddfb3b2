//! Upstream-fetch capability.
//!
//! The relay never talks to the network directly; it is written against
//! [`SentimentFetch`] so tests can inject a fake client.

use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a single upstream fetch.
///
/// The client crate classifies its transport errors into these variants so
/// the relay maps each one to an HTTP status without matching on concrete
/// transport error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("upstream returned status {code}: {detail}")]
    Status { code: u16, detail: String },

    #[error("upstream request timed out")]
    Timeout,

    #[error("could not connect to upstream: {0}")]
    Connect(String),

    #[error("upstream body is not valid JSON: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

/// Capability to fetch a raw sentiment classification for a piece of text.
#[async_trait]
pub trait SentimentFetch: Send + Sync {
    /// Fetch the upstream reply for `text` as parsed JSON.
    async fn fetch(&self, text: &str) -> Result<serde_json::Value, FetchError>;
}
