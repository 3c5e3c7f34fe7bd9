mod cli;
mod server;

use std::sync::Arc;

use clap::Parser;
use eyre::WrapErr;

use nearlink_core::RpcClient;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let testnet = RpcClient::new(&args.testnet_rpc_url).context("construct testnet RPC client")?;
    let mainnet = RpcClient::new(&args.mainnet_rpc_url).context("construct mainnet RPC client")?;
    tracing::info!(
        testnet = testnet.endpoint(),
        mainnet = mainnet.endpoint(),
        "configured upstream RPC endpoints"
    );

    let state = server::AppState {
        testnet: Arc::new(testnet),
        mainnet: Arc::new(mainnet),
    };
    let router = server::build_router(state);

    if args.bind == "0.0.0.0" {
        tracing::warn!("server is bound to 0.0.0.0 — it is accessible from the network");
    }

    let bind_addr = format!("{}:{}", args.bind, args.port);

    println!();
    println!("  nearlink is running:");
    println!("    URL:       http://{bind_addr}");
    println!();

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .context("bind TCP listener")?;

    tracing::info!("listening on {bind_addr}");
    axum::serve(listener, router)
        .await
        .context("run HTTP server")?;

    Ok(())
}
