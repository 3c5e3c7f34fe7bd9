mod client;
mod connection;
mod protocol;

pub use client::RpcClient;
