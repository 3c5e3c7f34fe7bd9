use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use reqwest::header;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{ClientError, RpcError};

use super::super::NearRpc;
use super::connection::normalize_endpoint;
use super::protocol::{JsonRpcRequest, JsonRpcResponse};

/// NEAR JSON-RPC 2.0 client over HTTP(S).
///
/// Each call is a single stateless POST exchange: no retries, no batching,
/// no caching. The client (endpoint, transport) is immutable after
/// construction and safe to share across concurrent in-flight calls; only
/// the request-id counter is shared, and it is atomic.
pub struct RpcClient {
    client: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Create a client for an `http://` or `https://` endpoint with a
    /// default transport.
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Create a client with a caller-supplied [`reqwest::Client`], for
    /// custom timeouts, proxies, or connection tuning.
    pub fn with_client(endpoint: &str, client: reqwest::Client) -> Result<Self, ClientError> {
        let url = normalize_endpoint(endpoint)?;
        Ok(Self {
            client,
            url,
            next_id: AtomicU64::new(initial_request_id()),
        })
    }

    /// The normalized endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.url
    }

    fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// One envelope, one POST, one body. Shared by `call` and `call_raw`,
    /// which differ only in how they interpret the response text.
    async fn post_envelope(&self, method: &str, params: Option<&Value>) -> Result<String, ClientError> {
        let id = self.next_request_id();
        debug!(rpc.id = id, rpc.method = method, "rpc call");
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        let response = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&req)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        let status = response.status();

        let body = response.text().await.map_err(ClientError::Transport)?;
        debug!(rpc.id = id, rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.id = id, rpc.method = method, body = %body, "rpc response body");

        Ok(body)
    }

    /// Invoke `method` and decode the envelope's `result` as `T`.
    ///
    /// Fails with [`ClientError::Rpc`] when the envelope carries an `error`
    /// object (fields taken verbatim), or with the synthesized empty-result
    /// error when it carries neither `result` nor `error`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<Value>,
    ) -> Result<T, ClientError> {
        let body = self.post_envelope(method, params.as_ref()).await?;

        let decoded: JsonRpcResponse<T> = serde_json::from_str(&body).map_err(|e| {
            ClientError::InvalidResponse(format!("decode JSON-RPC response: {e}; body={body}"))
        })?;

        if let Some(err) = decoded.error {
            return Err(RpcError::from(err).into());
        }
        match decoded.result {
            Some(result) => Ok(result),
            None => Err(RpcError::empty_result().into()),
        }
    }

    /// Invoke `method` and return the raw `result` value without
    /// interpreting the `error` field: a protocol-error envelope yields
    /// JSON null, not a failure. Callers needing error visibility must use
    /// [`RpcClient::call`].
    pub async fn call_raw(
        &self,
        method: &str,
        params: Option<Value>,
    ) -> Result<Value, ClientError> {
        let body = self.post_envelope(method, params.as_ref()).await?;

        let decoded: Value = serde_json::from_str(&body).map_err(|e| {
            ClientError::InvalidResponse(format!("decode JSON-RPC response: {e}; body={body}"))
        })?;

        Ok(decoded.get("result").cloned().unwrap_or(Value::Null))
    }
}

#[async_trait]
impl NearRpc for RpcClient {
    async fn call_value(&self, method: &str, params: Option<Value>) -> Result<Value, ClientError> {
        self.call(method, params).await
    }

    async fn call_raw(&self, method: &str, params: Option<Value>) -> Result<Value, ClientError> {
        RpcClient::call_raw(self, method, params).await
    }
}

/// Seed the id counter from the clock so ids from separate client instances
/// rarely collide in server-side logs. Uniqueness only matters within a
/// single outstanding call; each call awaits its own response.
fn initial_request_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
