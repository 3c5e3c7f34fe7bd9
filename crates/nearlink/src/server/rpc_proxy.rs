use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use super::error::{map_client_error, AppError};
use super::SharedState;

#[derive(serde::Deserialize)]
pub(super) struct RpcProxyRequest {
    method: String,
    #[serde(default)]
    params: Option<Value>,
}

/// Forward a method + params pair to the selected network's RPC client and
/// return the raw `result` value.
///
/// Uses the raw passthrough deliberately: a protocol error from the node
/// comes back as JSON null, exactly as the client library's `call_raw`
/// contract documents. Only transport-level failures produce an HTTP error.
pub(super) async fn proxy_rpc(
    State(state): State<SharedState>,
    Path(network): Path<String>,
    Json(request): Json<RpcProxyRequest>,
) -> Result<Json<Value>, AppError> {
    let client = state.client_for(&network).ok_or_else(|| {
        AppError::BadRequest(
            "INVALID_NETWORK",
            "Network must be mainnet or testnet".to_owned(),
        )
    })?;

    tracing::info!(network = %network, method = %request.method, "proxying rpc request");
    let result = client
        .call_raw(&request.method, request.params)
        .await
        .map_err(map_client_error)?;

    Ok(Json(result))
}
