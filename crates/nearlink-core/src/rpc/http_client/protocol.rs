use serde_json::Value;

use crate::error::RpcError;

/// JSON-RPC 2.0 request envelope.
///
/// `params` is always emitted, as JSON null when the method takes none.
/// NEAR nodes accept both conventions; emitting the field keeps the wire
/// format identical for every call.
#[derive(serde::Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: u64,
    pub(super) method: &'a str,
    pub(super) params: Option<&'a Value>,
}

/// JSON-RPC 2.0 response envelope, generic over the result shape.
///
/// Unknown fields (including `jsonrpc` and `id`, which the engine never
/// inspects) are ignored for forward compatibility. Both `result` and
/// `error` may be absent; the engine treats that as an empty result.
#[derive(serde::Deserialize)]
pub(super) struct JsonRpcResponse<T> {
    pub(super) result: Option<T>,
    pub(super) error: Option<ErrorObject>,
}

#[derive(serde::Deserialize)]
pub(super) struct ErrorObject {
    pub(super) code: i64,
    pub(super) message: String,
    #[serde(default)]
    pub(super) data: Option<Value>,
}

impl From<ErrorObject> for RpcError {
    fn from(err: ErrorObject) -> Self {
        RpcError {
            code: err.code,
            message: err.message,
            data: err.data,
        }
    }
}
