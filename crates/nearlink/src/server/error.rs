use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use nearlink_core::ClientError;

// ==============================================================================
// Error Type
// ==============================================================================

/// API failure with the short machine-readable label the UI switches on.
pub(crate) enum AppError {
    BadRequest(&'static str, String),
    NotFound(String),
    BadGateway(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            Self::BadRequest(label, msg) => (StatusCode::BAD_REQUEST, label, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        };

        (
            status,
            Json(serde_json::json!({ "error": error, "message": message })),
        )
            .into_response()
    }
}

pub(super) fn map_client_error(err: ClientError) -> AppError {
    match err {
        ClientError::Rpc(rpc) => AppError::BadRequest(
            "RPC_ERROR",
            format!("Code {}: {}", rpc.code, rpc.message),
        ),
        ClientError::Transport(e) => AppError::BadGateway(e.to_string()),
        ClientError::InvalidResponse(msg) => AppError::BadGateway(msg),
        ClientError::InvalidEndpoint(msg) => AppError::Internal(msg),
    }
}
