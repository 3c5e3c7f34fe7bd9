/// Protocol-level JSON-RPC failure, carried verbatim from the response
/// envelope's `error` object (or synthesized by the engine itself).
#[derive(Debug, thiserror::Error)]
#[error("RPC error {code}: {message}")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    /// Synthesized failure for a success envelope that carries neither
    /// `result` nor `error`. Uses the JSON-RPC internal-error code so
    /// callers can treat it like any other protocol failure.
    pub fn empty_result() -> Self {
        Self {
            code: -32603,
            message: "Empty result".to_owned(),
            data: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// Connectivity, timeout, or TLS failure from the underlying HTTP
    /// client. Propagated as-is, never reinterpreted.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
