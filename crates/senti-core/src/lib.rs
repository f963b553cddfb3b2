//! Senti Core Library
//!
//! Relay logic for the sentiment relay service: request/result shapes,
//! the error taxonomy, and the upstream-fetch capability trait.

pub mod error;
pub mod fetch;
pub mod model;
pub mod relay;

pub use error::{RelayError, RelayResult};
pub use fetch::{FetchError, SentimentFetch};
pub use model::{AnalysisResult, AnalyzeRequest};
pub use relay::RelayService;
