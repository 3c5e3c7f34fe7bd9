//! NEAR JSON-RPC abstraction layer.
//!
//! Defines the [`NearRpc`] trait and provides the HTTP JSON-RPC 2.0
//! implementation ([`RpcClient`]) with one generated wrapper per supported
//! node method (see [`catalog`]).

pub mod catalog;
mod http_client;
mod methods;
pub mod types;

pub use http_client::RpcClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientError;

/// Object-safe seam over the generic RPC engine, covering the two untyped
/// entry points the demo server forwards through.
///
/// Implementations are expected to handle envelope construction, transport,
/// and response decoding internally. `call_value` surfaces protocol errors
/// as [`ClientError::Rpc`]; `call_raw` deliberately does not (it returns
/// JSON null when the envelope carries no `result`), so callers that need
/// error visibility must use `call_value`.
#[async_trait]
pub trait NearRpc: Send + Sync {
    /// Invoke `method` and decode the envelope, failing on protocol errors.
    async fn call_value(&self, method: &str, params: Option<Value>) -> Result<Value, ClientError>;

    /// Invoke `method` and return the raw `result` value, or JSON null when
    /// the envelope has none (including protocol-error envelopes).
    async fn call_raw(&self, method: &str, params: Option<Value>) -> Result<Value, ClientError>;
}
