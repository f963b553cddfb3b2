//! Client form route handler.
//!
//! Serves the embedded single-page analysis form HTML.

use axum::response::{Html, IntoResponse};

const FORM_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the analysis form.
pub async fn index() -> impl IntoResponse {
    Html(FORM_HTML)
}
