//! Per-method wrappers over the generic engine, one per entry of the
//! method catalog (see [`super::catalog`]).
//!
//! Every wrapper is mechanical: it narrows [`RpcClient::call`] (or
//! [`RpcClient::call_raw`] for the untyped passthrough) to a single method
//! name. Adding a catalog entry means adding one delegating function here
//! and nothing else. Wrappers perform no validation of their own; parameter
//! mismatches surface as RPC errors from the node, result-shape mismatches
//! as decode failures.

use serde_json::Value;

use crate::error::ClientError;

use super::types::{GasPriceInfo, StatusInfo};
use super::RpcClient;

macro_rules! rpc_method {
    ($(#[$doc:meta])* $fn_name:ident, $method:literal) => {
        $(#[$doc])*
        pub async fn $fn_name(&self) -> Result<Value, ClientError> {
            self.call($method, None).await
        }
    };
    ($(#[$doc:meta])* $fn_name:ident(params), $method:literal) => {
        $(#[$doc])*
        pub async fn $fn_name(&self, params: Value) -> Result<Value, ClientError> {
            self.call($method, Some(params)).await
        }
    };
}

impl RpcClient {
    /// Node status with a typed view of the stable fields.
    pub async fn status(&self) -> Result<StatusInfo, ClientError> {
        self.call("status", None).await
    }

    /// Node status as the raw `result` value, bypassing error decoding.
    pub async fn status_raw(&self) -> Result<Value, ClientError> {
        self.call_raw("status", None).await
    }

    /// Gas price at a block, typed. `params` is `[block_height]`,
    /// `["block_hash"]`, or `[null]` for the latest block.
    pub async fn gas_price(&self, params: Value) -> Result<GasPriceInfo, ClientError> {
        self.call("gas_price", Some(params)).await
    }

    // Node & network
    rpc_method!(network_info, "network_info");
    rpc_method!(
        /// Returns an RPC error when the node is healthy (the node reports
        /// health as a JSON null result, which the engine rejects as empty).
        /// Use [`RpcClient::status_raw`] for a non-failing liveness probe.
        health,
        "health"
    );
    rpc_method!(client_config, "client_config");

    // Blocks & chunks
    rpc_method!(block(params), "block");
    rpc_method!(chunk(params), "chunk");
    rpc_method!(changes(params), "changes");
    rpc_method!(block_effects(params), "block_effects");

    // Transactions
    rpc_method!(tx(params), "tx");
    rpc_method!(send_tx(params), "send_tx");
    rpc_method!(broadcast_tx_async(params), "broadcast_tx_async");
    rpc_method!(broadcast_tx_commit(params), "broadcast_tx_commit");

    // Accounts & query
    rpc_method!(query(params), "query");
    rpc_method!(validators(params), "validators");

    // Light client
    rpc_method!(light_client_proof(params), "light_client_proof");
    rpc_method!(next_light_client_block(params), "next_light_client_block");
    rpc_method!(maintenance_windows(params), "maintenance_windows");
    rpc_method!(genesis_config, "genesis_config");

    // Experimental surface; result shapes are unstable by definition.
    rpc_method!(experimental_changes(params), "EXPERIMENTAL_changes");
    rpc_method!(experimental_changes_in_block(params), "EXPERIMENTAL_changes_in_block");
    rpc_method!(experimental_congestion_level, "EXPERIMENTAL_congestion_level");
    rpc_method!(experimental_genesis_config, "EXPERIMENTAL_genesis_config");
    rpc_method!(experimental_light_client_block_proof(params), "EXPERIMENTAL_light_client_block_proof");
    rpc_method!(experimental_light_client_proof(params), "EXPERIMENTAL_light_client_proof");
    rpc_method!(experimental_maintenance_windows(params), "EXPERIMENTAL_maintenance_windows");
    rpc_method!(experimental_protocol_config(params), "EXPERIMENTAL_protocol_config");
    rpc_method!(experimental_receipt(params), "EXPERIMENTAL_receipt");
    rpc_method!(experimental_split_storage_info, "EXPERIMENTAL_split_storage_info");
    rpc_method!(experimental_tx_status(params), "EXPERIMENTAL_tx_status");
    rpc_method!(experimental_validators_ordered(params), "EXPERIMENTAL_validators_ordered");
}
