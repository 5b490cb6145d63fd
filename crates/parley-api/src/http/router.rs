//! Axum router configuration with middleware.
//!
//! Routes live at the root path. Middleware: permissive CORS, request
//! tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/chat", post(handlers::chat::chat))
        .route("/summary", post(handlers::summary::summarize))
        .route("/reset", post(handlers::reset::reset))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use axum::response::Response;
    use parley_core::chat::history::HistoryStore;
    use tower::ServiceExt;

    use crate::http::handlers::test_support::{MODEL, calls, state_with};

    fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_route() {
        let (state, _) = state_with(Some("ok"));

        let response = build_router(state)
            .oneshot(empty_request(Method::GET, "/health"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "ok", "model": MODEL})
        );
    }

    #[tokio::test]
    async fn test_chat_route() {
        let (state, counter) = state_with(Some("hello"));

        let response = build_router(state)
            .oneshot(json_request(Method::POST, "/chat", r#"{"message": "hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "response": "hello",
                "history": [
                    {"from": "user", "text": "hi"},
                    {"from": "bot", "text": "hello"}
                ]
            })
        );
        assert_eq!(calls(&counter), 1);
    }

    #[tokio::test]
    async fn test_chat_wrong_field_is_rejected_before_provider() {
        let (state, counter) = state_with(Some("hello"));

        let response = build_router(state)
            .oneshot(json_request(Method::POST, "/chat", r#"{"msg": "hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(calls(&counter), 0);
    }

    #[tokio::test]
    async fn test_chat_without_json_content_type_is_rejected() {
        let (state, _) = state_with(Some("hello"));

        let request = Request::builder()
            .method(Method::POST)
            .uri("/chat")
            .body(Body::from(r#"{"message": "hi"}"#))
            .unwrap();
        let response = build_router(state).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_summary_route() {
        let (state, counter) = state_with(Some(" short "));
        let router = build_router(state);

        let blank = router
            .clone()
            .oneshot(json_request(Method::POST, "/summary", r#"{"text": "   "}"#))
            .await
            .unwrap();
        assert_eq!(body_json(blank).await, serde_json::json!({"summary": ""}));
        assert_eq!(calls(&counter), 0);

        let filled = router
            .oneshot(json_request(Method::POST, "/summary", r#"{"text": "long text"}"#))
            .await
            .unwrap();
        assert_eq!(body_json(filled).await, serde_json::json!({"summary": "short"}));
        assert_eq!(calls(&counter), 1);
    }

    #[tokio::test]
    async fn test_reset_route_without_body() {
        let (state, _) = state_with(Some("hello"));
        let router = build_router(state.clone());

        router
            .clone()
            .oneshot(json_request(Method::POST, "/chat", r#"{"message": "hi"}"#))
            .await
            .unwrap();

        let response = router
            .oneshot(empty_request(Method::POST, "/reset"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"status": "reset"}));
        assert!(state.chat_service.history().snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_is_plain_500() {
        let (state, _) = state_with(None);

        let response = build_router(state)
            .oneshot(json_request(Method::POST, "/summary", r#"{"text": "x"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Internal Server Error");
    }

    #[tokio::test]
    async fn test_method_and_path_bindings() {
        let (state, _) = state_with(Some("ok"));
        let router = build_router(state);

        let cases = [
            (Method::POST, "/health", StatusCode::METHOD_NOT_ALLOWED),
            (Method::GET, "/chat", StatusCode::METHOD_NOT_ALLOWED),
            (Method::GET, "/reset", StatusCode::METHOD_NOT_ALLOWED),
            (Method::POST, "/summarize", StatusCode::NOT_FOUND),
        ];

        for (method, uri, expected) in cases {
            let response = router
                .clone()
                .oneshot(empty_request(method.clone(), uri))
                .await
                .unwrap();
            assert_eq!(response.status(), expected, "{method} {uri}");
        }
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin() {
        let (state, _) = state_with(Some("ok"));

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/chat")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = build_router(state).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_header_on_simple_request() {
        let (state, _) = state_with(Some("ok"));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/health")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = build_router(state).oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
