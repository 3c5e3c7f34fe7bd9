//! Static method catalog: the name → description → example-params listing
//! consumed by the playground UI. Wrappers in [`super::methods`] are kept in
//! one-to-one correspondence with these entries.

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct MethodInfo {
    pub name: &'static str,
    pub desc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct MethodCategory {
    pub name: &'static str,
    pub methods: &'static [MethodInfo],
}

const fn method(name: &'static str, desc: &'static str) -> MethodInfo {
    MethodInfo {
        name,
        desc,
        params: None,
    }
}

const fn method_with_params(
    name: &'static str,
    desc: &'static str,
    params: &'static str,
) -> MethodInfo {
    MethodInfo {
        name,
        desc,
        params: Some(params),
    }
}

pub const METHOD_CATALOG: &[MethodCategory] = &[
    MethodCategory {
        name: "Node & Network",
        methods: &[
            method("status", "Node status"),
            method("network_info", "Network info"),
            method("health", "Health check"),
            method_with_params("gas_price", "Current gas price", "[null]"),
            method("client_config", "Client config"),
        ],
    },
    MethodCategory {
        name: "Blocks & Chunks",
        methods: &[
            method_with_params("block", "Block info", r#"{"finality":"final"}"#),
            method_with_params(
                "chunk",
                "Chunk info",
                r#"{"chunk_id":"EBM2qg5cGr47EjMPtH88uvmXHDHqmWPzKaQadbWhdw22"}"#,
            ),
            method_with_params(
                "changes",
                "State changes",
                r#"{"changes_type":"all_access_key_changes","account_ids":["test.near"],"block_id":17821130}"#,
            ),
            method_with_params("block_effects", "Block state changes", r#"{"block_id":17821130}"#),
        ],
    },
    MethodCategory {
        name: "Transactions",
        methods: &[
            method_with_params(
                "tx",
                "TX status",
                r#"{"tx_hash":"6zgh2u9DqHHiXzdy9ouTP7oGky2T4nugqzqt9wJZwNFm","sender_account_id":"test.near"}"#,
            ),
            method_with_params("send_tx", "Send TX", r#"{"signed_tx_base64":"..."}"#),
            method_with_params("broadcast_tx_async", "Broadcast TX async", r#"{"signed_tx_base64":"..."}"#),
            method_with_params("broadcast_tx_commit", "Broadcast TX commit", r#"{"signed_tx_base64":"..."}"#),
        ],
    },
    MethodCategory {
        name: "Accounts & Query",
        methods: &[
            method_with_params(
                "query",
                "Query state",
                r#"{"request_type":"view_account","finality":"final","account_id":"test.near"}"#,
            ),
            method_with_params("validators", "Validators", "[null]"),
        ],
    },
    MethodCategory {
        name: "Light Client",
        methods: &[
            method_with_params(
                "light_client_proof",
                "Light client proof",
                r#"{"type":"transaction","transaction_hash":"6zgh2u9DqHHiXzdy9ouTP7oGky2T4nugqzqt9wJZwNFm","sender_id":"test.near"}"#,
            ),
            method_with_params(
                "next_light_client_block",
                "Next light client block",
                r#"{"last_block_hash":"4NfqDPZQJd2pffWNK2jVUrXfQxrQU6wyC7cWfTdPPpRj"}"#,
            ),
            method_with_params("maintenance_windows", "Maintenance windows", r#"{"account_id":"test.near"}"#),
            method("genesis_config", "Genesis config"),
        ],
    },
    MethodCategory {
        name: "Experimental",
        methods: &[
            method_with_params(
                "EXPERIMENTAL_changes",
                "State changes (exp)",
                r#"{"changes_type":"all_access_key_changes","account_ids":["test.near"],"block_id":17821130}"#,
            ),
            method_with_params("EXPERIMENTAL_changes_in_block", "Changes in block (exp)", r#"{"block_id":17821130}"#),
            method("EXPERIMENTAL_genesis_config", "Genesis config (exp)"),
            method_with_params(
                "EXPERIMENTAL_light_client_block_proof",
                "Light client block proof (exp)",
                r#"{"last_block_hash":"4NfqDPZQJd2pffWNK2jVUrXfQxrQU6wyC7cWfTdPPpRj"}"#,
            ),
            method_with_params(
                "EXPERIMENTAL_light_client_proof",
                "Light client proof (exp)",
                r#"{"type":"transaction","transaction_hash":"...","sender_id":"test.near"}"#,
            ),
            method_with_params("EXPERIMENTAL_protocol_config", "Protocol config (exp)", r#"{"finality":"final"}"#),
            method_with_params("EXPERIMENTAL_validators_ordered", "Validators ordered (exp)", r#"{"block_id":17821130}"#),
            method_with_params(
                "EXPERIMENTAL_tx_status",
                "TX status (exp)",
                r#"{"tx_hash":"6zgh2u9DqHHiXzdy9ouTP7oGky2T4nugqzqt9wJZwNFm","sender_account_id":"test.near"}"#,
            ),
            method_with_params("EXPERIMENTAL_receipt", "Receipt info (exp)", r#"{"receipt_id":"..."}"#),
            method("EXPERIMENTAL_congestion_level", "Congestion level (exp)"),
            method_with_params("EXPERIMENTAL_maintenance_windows", "Maintenance windows (exp)", r#"{"account_id":"test.near"}"#),
            method("EXPERIMENTAL_split_storage_info", "Split storage info (exp)"),
        ],
    },
];

/// Total number of catalog entries across all categories.
pub fn method_count() -> usize {
    METHOD_CATALOG.iter().map(|c| c.methods.len()).sum()
}
