//! Senti Web Server
//!
//! Axum-based HTTP surface for the sentiment relay: the analyze endpoint,
//! the health check and the embedded client form.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::form::index))
        .route("/analyze-sentiment", post(routes::analyze::analyze_sentiment))
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Relay listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use senti_core::{FetchError, RelayService, SentimentFetch};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FakeClient(Result<Value, FetchError>);

    #[async_trait::async_trait]
    impl SentimentFetch for FakeClient {
        async fn fetch(&self, _text: &str) -> Result<Value, FetchError> {
            self.0.clone()
        }
    }

    fn router_with(reply: Result<Value, FetchError>) -> Router {
        let relay = RelayService::new(Arc::new(FakeClient(reply)));
        create_router(AppState::new(relay))
    }

    fn analyze_request(text: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze-sentiment")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "text": text }).to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let app = router_with(Ok(json!({})));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn analyze_returns_upstream_fields_verbatim() {
        let app = router_with(Ok(json!({
            "label": "Positive",
            "numeric_label": 1,
            "confidence": 0.95
        })));
        let response = app.oneshot(analyze_request("I love this product")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "label": "Positive", "numeric_label": 1, "confidence": 0.95 })
        );
    }

    #[tokio::test]
    async fn missing_fields_serialize_as_null() {
        let app = router_with(Ok(json!({ "label": "Negative" })));
        let response = app.oneshot(analyze_request("meh")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "label": "Negative", "numeric_label": null, "confidence": null })
        );
    }

    #[tokio::test]
    async fn empty_text_is_bad_request() {
        let app = router_with(Ok(json!({})));
        let response = app.oneshot(analyze_request("   ")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Text cannot be empty");
    }

    #[tokio::test]
    async fn upstream_timeout_is_gateway_timeout() {
        let app = router_with(Err(FetchError::Timeout));
        let response = app.oneshot(analyze_request("hello")).await.unwrap();

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("timed out"));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_service_unavailable() {
        let app = router_with(Err(FetchError::Connect("connection refused".into())));
        let response = app.oneshot(analyze_request("hello")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn upstream_error_detail_passes_through() {
        let app = router_with(Err(FetchError::Status {
            code: 500,
            detail: "model overloaded".into(),
        }));
        let response = app.oneshot(analyze_request("hello")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("model overloaded"));
    }

    #[tokio::test]
    async fn unparseable_upstream_body_is_internal_error() {
        let app = router_with(Err(FetchError::Decode("expected value".into())));
        let response = app.oneshot(analyze_request("hello")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("Invalid response"));
    }

    #[tokio::test]
    async fn form_page_is_served_at_root() {
        let app = router_with(Ok(json!({})));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<textarea"));
    }
}
