pub mod error;
pub mod rpc;

pub use error::{ClientError, RpcError};
pub use rpc::{NearRpc, RpcClient};
