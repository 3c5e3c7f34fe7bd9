//! Typed views over stable RPC results.
//!
//! Only the fields nearlink itself relies on are modeled; everything else
//! the node returns is ignored during decoding, so these structs stay valid
//! across node releases. Methods without a stable documented shape decode
//! to [`serde_json::Value`] instead.

#[derive(Debug, Clone, serde::Deserialize)]
pub struct StatusInfo {
    pub chain_id: String,
    pub protocol_version: u32,
    pub version: NodeVersion,
    pub sync_info: SyncInfo,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct NodeVersion {
    pub version: String,
    pub build: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SyncInfo {
    pub latest_block_height: u64,
    pub syncing: bool,
}

/// Result of `gas_price`. The price is a yoctoNEAR amount serialized as a
/// decimal string because it does not fit in a JSON number.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GasPriceInfo {
    pub gas_price: String,
}
