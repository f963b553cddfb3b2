//! Senti Upstream
//!
//! HTTP client for the external sentiment-analysis API. The rest of the
//! system only sees the [`senti_core::SentimentFetch`] trait; transport
//! errors are classified into tagged variants here and never leak out.

pub mod space;

pub use space::{SpaceClient, DEFAULT_UPSTREAM_URL};
