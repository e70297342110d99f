//! Router setup and configuration.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{basen, health, short, uuid};
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health and metrics routes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/metrics", get(health::metrics));

    // Short id routes
    let short_routes = Router::new()
        .route("/encode", get(short::encode))
        .route("/decode", get(short::decode))
        .route("/shorten", get(short::shorten))
        .route("/random", get(short::random));

    // UUID routes
    let uuid_routes = Router::new()
        .route("/named", get(uuid::named))
        .route("/base64", get(uuid::to_base64))
        .route("/from-base64", get(uuid::from_base64));

    // Raw integer codec routes
    let basen_routes = Router::new()
        .route("/encode", get(basen::encode))
        .route("/decode", get(basen::decode));

    Router::new()
        .merge(health_routes)
        .nest("/v1/short", short_routes)
        .nest("/v1/uuid", uuid_routes)
        .nest("/v1/basen", basen_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;

    async fn call(uri: &str) -> (StatusCode, Value) {
        let state = AppState::new(Arc::new(AppConfig::default()), None);
        let response = create_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_encode_route() {
        let (status, body) =
            call("/v1/short/encode?uuid=a8e41dc6-74c9-42c5-bb03-3bfd623044c5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["short_id"], "9zye6dau0hvwo54msqyyjyzt1");
    }

    #[tokio::test]
    async fn test_missing_parameter_is_null_input() {
        let (status, body) = call("/v1/short/decode").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 3002);
        assert_eq!(body["message"], "short_id must not be null");
    }

    #[tokio::test]
    async fn test_malformed_query_is_bad_request() {
        let (status, body) = call("/v1/uuid/named?version=abc&name=x").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 3001);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let state = AppState::new(Arc::new(AppConfig::default()), None);
        let response = create_router(state)
            .oneshot(Request::builder().uri("/v1/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
