mod error;
mod methods;
mod rpc_proxy;
mod static_files;

use std::sync::Arc;

use axum::routing::{any, get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use nearlink_core::NearRpc;

// ==============================================================================
// Application State
// ==============================================================================

pub struct AppState {
    pub testnet: Arc<dyn NearRpc>,
    pub mainnet: Arc<dyn NearRpc>,
}

impl AppState {
    fn client_for(&self, network: &str) -> Option<Arc<dyn NearRpc>> {
        match network {
            "testnet" => Some(self.testnet.clone()),
            "mainnet" => Some(self.mainnet.clone()),
            _ => None,
        }
    }
}

type SharedState = Arc<AppState>;

// ==============================================================================
// Router
// ==============================================================================

pub fn build_router(state: AppState) -> Router {
    // The playground is meant to be embedded anywhere, so CORS stays open,
    // matching the upstream NEAR endpoints themselves.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let shared = Arc::new(state);

    Router::new()
        .route("/health", get(health))
        .route("/api/methods", get(methods::list_methods))
        .route("/api/rpc/{network}", post(rpc_proxy::proxy_rpc))
        .route("/api", any(api_not_found))
        .route("/api/{*path}", any(api_not_found))
        .fallback(static_files::static_files)
        .layer(cors)
        .with_state(shared)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "library": "nearlink-core" }))
}

async fn api_not_found() -> error::AppError {
    error::AppError::NotFound("API route not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use nearlink_core::{ClientError, RpcError};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    #[derive(Clone, Copy)]
    enum FakeRpcMode {
        Ok,
        ProtocolError,
        UpstreamFailure,
    }

    /// Mimics the RpcClient contract per mode: protocol errors fail
    /// `call_value` but surface as null from `call_raw`.
    struct FakeRpc {
        network: &'static str,
        mode: FakeRpcMode,
    }

    #[async_trait]
    impl NearRpc for FakeRpc {
        async fn call_value(
            &self,
            method: &str,
            _params: Option<Value>,
        ) -> Result<Value, ClientError> {
            match self.mode {
                FakeRpcMode::Ok => Ok(json!({"network": self.network, "method": method})),
                FakeRpcMode::ProtocolError => Err(ClientError::Rpc(RpcError {
                    code: -32000,
                    message: "boom".to_string(),
                    data: None,
                })),
                FakeRpcMode::UpstreamFailure => Err(ClientError::InvalidResponse(
                    "decode JSON-RPC response: EOF".to_string(),
                )),
            }
        }

        async fn call_raw(
            &self,
            method: &str,
            params: Option<Value>,
        ) -> Result<Value, ClientError> {
            match self.mode {
                FakeRpcMode::Ok => {
                    let _ = params;
                    Ok(json!({"network": self.network, "method": method}))
                }
                FakeRpcMode::ProtocolError => Ok(Value::Null),
                FakeRpcMode::UpstreamFailure => Err(ClientError::InvalidResponse(
                    "decode JSON-RPC response: EOF".to_string(),
                )),
            }
        }
    }

    fn test_router(mode: FakeRpcMode) -> Router {
        let state = AppState {
            testnet: Arc::new(FakeRpc {
                network: "testnet",
                mode,
            }),
            mainnet: Arc::new(FakeRpc {
                network: "mainnet",
                mode,
            }),
        };
        build_router(state)
    }

    fn rpc_request(network: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/api/rpc/{network}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request must build")
    }

    async fn response_body_json(resp: axum::response::Response) -> Value {
        let bytes = to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .expect("response body must be readable");
        serde_json::from_slice(&bytes).expect("response body must be valid JSON")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = test_router(FakeRpcMode::Ok)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request must build"),
            )
            .await
            .expect("router should serve request");

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_body_json(response).await;
        assert_eq!(json.get("status").and_then(Value::as_str), Some("ok"));
    }

    #[tokio::test]
    async fn methods_listing_reports_all_catalog_entries() {
        let response = test_router(FakeRpcMode::Ok)
            .oneshot(
                Request::builder()
                    .uri("/api/methods")
                    .body(Body::empty())
                    .expect("request must build"),
            )
            .await
            .expect("router should serve request");

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_body_json(response).await;
        assert_eq!(json.get("total").and_then(Value::as_u64), Some(31));
        let categories = json
            .get("categories")
            .and_then(Value::as_array)
            .expect("categories must be an array");
        assert_eq!(categories.len(), 6);
    }

    #[tokio::test]
    async fn proxy_routes_to_the_selected_network() {
        let router = test_router(FakeRpcMode::Ok);
        let response = router
            .clone()
            .oneshot(rpc_request("testnet", json!({"method": "status"})))
            .await
            .expect("router should serve request");
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_body_json(response).await;
        assert_eq!(json.get("network").and_then(Value::as_str), Some("testnet"));
        assert_eq!(json.get("method").and_then(Value::as_str), Some("status"));

        let response = router
            .oneshot(rpc_request("mainnet", json!({"method": "block", "params": {"finality": "final"}})))
            .await
            .expect("router should serve request");
        let json = response_body_json(response).await;
        assert_eq!(json.get("network").and_then(Value::as_str), Some("mainnet"));
    }

    #[tokio::test]
    async fn proxy_rejects_unknown_network() {
        let response = test_router(FakeRpcMode::Ok)
            .oneshot(rpc_request("betanet", json!({"method": "status"})))
            .await
            .expect("router should serve request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_body_json(response).await;
        assert_eq!(
            json.get("error").and_then(Value::as_str),
            Some("INVALID_NETWORK")
        );
    }

    #[tokio::test]
    async fn proxy_returns_null_on_protocol_error() {
        // The proxy uses the raw passthrough, so protocol errors become a
        // 200 with a null body rather than an HTTP failure.
        let response = test_router(FakeRpcMode::ProtocolError)
            .oneshot(rpc_request("testnet", json!({"method": "query"})))
            .await
            .expect("router should serve request");

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_body_json(response).await;
        assert_eq!(json, Value::Null);
    }

    #[tokio::test]
    async fn proxy_maps_upstream_failure_to_502() {
        let response = test_router(FakeRpcMode::UpstreamFailure)
            .oneshot(rpc_request("testnet", json!({"method": "status"})))
            .await
            .expect("router should serve request");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = response_body_json(response).await;
        assert_eq!(
            json.get("error").and_then(Value::as_str),
            Some("UPSTREAM_ERROR")
        );
    }

    #[tokio::test]
    async fn unknown_api_route_returns_json_404() {
        let response = test_router(FakeRpcMode::Ok)
            .oneshot(
                Request::builder()
                    .uri("/api/does-not-exist")
                    .body(Body::empty())
                    .expect("request must build"),
            )
            .await
            .expect("router should serve request");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = response_body_json(response).await;
        assert_eq!(
            json.get("message").and_then(Value::as_str),
            Some("API route not found")
        );
    }

    #[tokio::test]
    async fn root_serves_embedded_playground_page() {
        let response = test_router(FakeRpcMode::Ok)
            .oneshot(
                Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .expect("request must build"),
            )
            .await
            .expect("router should serve request");

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .expect("content type must be present");
        assert!(content_type.starts_with("text/html"));
    }
}
