pub mod config;
pub mod error;
pub mod rpc;

pub use config::{RpcAuth, RpcConfig};
pub use error::{CoreError, RpcError};
pub use rpc::{BitcoinRpc, HttpRpcClient};
