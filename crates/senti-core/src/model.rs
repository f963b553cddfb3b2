//! Request and result shapes for sentiment analysis.
//!
//! Both are transient value objects: created per request, returned, and
//! discarded. Nothing is cached or persisted.

use serde::{Deserialize, Serialize};

/// Incoming analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Normalized sentiment result returned to clients.
///
/// Fields the upstream reply omits stay `None` and serialize as `null`;
/// the relay never substitutes defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub label: Option<String>,
    pub numeric_label: Option<i64>,
    pub confidence: Option<f64>,
}
