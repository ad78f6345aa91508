use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    // Pool subrouters live under /api/v1
    let api_v1 = Router::new()
        .nest("/machine-pools", crate::api::routes::machine_pool_routes::machine_pool_routes())
        .nest("/node-pools", crate::api::routes::node_pool_routes::node_pool_routes());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", api_v1)
        .fallback(handler_404)
        .layer(CorsLayer::very_permissive())
}

async fn root() -> &'static str {
    "Server is running!"
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::build_app_state;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let app = app_router().with_state(build_app_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn machine_pool_request_endpoint_returns_payload() {
        let (status, body) = post_json(
            "/api/v1/machine-pools/request",
            json!({
                "values": {
                    "name": "workers",
                    "autoscaling": true,
                    "autoscale_min": 2,
                    "autoscale_max": 10,
                    "instance_type": { "id": "m5.xlarge" }
                },
                "context": { "is_multi_zone_machine_pool": true, "is_secure_boot_updated": true }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_successful"], json!(true));
        assert_eq!(
            body["data"],
            json!({
                "id": "workers",
                "labels": {},
                "taints": [],
                "autoscaling": { "min_replicas": 6, "max_replicas": 30 },
                "instance_type": "m5.xlarge"
            })
        );
    }

    #[tokio::test]
    async fn node_pool_request_endpoint_returns_payload() {
        let (status, body) = post_json(
            "/api/v1/node-pools/request",
            json!({
                "values": {
                    "name": "np",
                    "replicas": 2,
                    "is_windows_license_included": true
                },
                "context": { "is_edit": true }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            json!({
                "id": "np",
                "labels": {},
                "taints": [],
                "replicas": 2,
                "auto_repair": true,
                "imageType": "Windows"
            })
        );
    }

    #[tokio::test]
    async fn validation_failure_is_bad_request() {
        let (status, body) = post_json(
            "/api/v1/node-pools/request",
            json!({ "values": { "name": "np", "replicas": 1 } }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().starts_with("Validation error"));
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let (status, body) = post_json(
            "/api/v1/machine-pools/request",
            json!({ "values": { "replicas": 1 } }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().starts_with("Body parsing error"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = app_router().with_state(build_app_state());
        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
