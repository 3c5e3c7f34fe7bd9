use clap::Parser;

/// nearlink — interactive NEAR JSON-RPC playground with an embedded web UI.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Address to bind the web server to.
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on.
    #[arg(long, default_value = "8080", env = "PORT")]
    pub port: u16,

    /// NEAR testnet RPC endpoint.
    #[arg(
        long,
        default_value = "https://rpc.testnet.near.org",
        env = "NEARLINK_TESTNET_RPC_URL"
    )]
    pub testnet_rpc_url: String,

    /// NEAR mainnet RPC endpoint.
    #[arg(
        long,
        default_value = "https://rpc.mainnet.near.org",
        env = "NEARLINK_MAINNET_RPC_URL"
    )]
    pub mainnet_rpc_url: String,
}
