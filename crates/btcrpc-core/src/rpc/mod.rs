//! Bitcoin Core RPC abstraction layer.
//!
//! Defines the [`BitcoinRpc`] trait and provides an HTTP JSON-RPC
//! implementation ([`HttpRpcClient`]) plus a test mock (`mock::MockRpc`).

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use http_adapter::HttpRpcClient;
pub use types::{Block, BlockFilter, BlockHeader, BlockchainInfo, Warnings};

use async_trait::async_trait;
use bitcoin::BlockHash;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::{CoreError, RpcError};

/// Filter type passed to `getblockfilter` when the caller does not pick one.
pub const DEFAULT_FILTER_TYPE: &str = "basic";

/// The Bitcoin Core RPC methods this client speaks.
///
/// Implementors supply [`BitcoinRpc::call`]; every typed wrapper is a
/// provided method that routes through it, so swapping the primitive (as the
/// tests do) swaps the transport for all of them.
#[async_trait]
pub trait BitcoinRpc: Send + Sync {
    /// Perform one JSON-RPC round trip and return the raw `result` value.
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError>;

    /// Hash of the tip of the most-work chain, exactly as the node sent it.
    async fn get_best_block_hash(&self) -> Result<String, CoreError> {
        call_typed(self, "getbestblockhash", Vec::new()).await
    }

    async fn get_block(&self, block_hash: &BlockHash) -> Result<Block, CoreError> {
        call_typed(self, "getblock", vec![json!(block_hash.to_string())]).await
    }

    async fn get_blockchain_info(&self) -> Result<BlockchainInfo, CoreError> {
        call_typed(self, "getblockchaininfo", Vec::new()).await
    }

    /// Height of the most-work chain, returned as the bare number.
    async fn get_block_count(&self) -> Result<u64, CoreError> {
        call_typed(self, "getblockcount", Vec::new()).await
    }

    /// Fetch a compact block filter. `filter_type` defaults to `"basic"`.
    async fn get_block_filter(
        &self,
        block_hash: &BlockHash,
        filter_type: Option<&str>,
    ) -> Result<BlockFilter, CoreError> {
        let filter_type = filter_type.unwrap_or(DEFAULT_FILTER_TYPE);
        call_typed(
            self,
            "getblockfilter",
            vec![json!(block_hash.to_string()), json!(filter_type)],
        )
        .await
    }

    /// Hash of the block at `height`, exactly as the node sent it.
    async fn get_block_hash(&self, height: u64) -> Result<String, CoreError> {
        call_typed(self, "getblockhash", vec![json!(height)]).await
    }

    async fn get_block_header(&self, block_hash: &BlockHash) -> Result<BlockHeader, CoreError> {
        call_typed(self, "getblockheader", vec![json!(block_hash.to_string())]).await
    }
}

/// Run `method` through the call primitive and coerce the result into `T`.
///
/// Both the round-trip failure and a result that does not fit `T` are
/// reported as [`CoreError::Call`] tagged with the method name.
async fn call_typed<R, T>(
    rpc: &R,
    method: &'static str,
    params: Vec<Value>,
) -> Result<T, CoreError>
where
    R: BitcoinRpc + ?Sized,
    T: DeserializeOwned,
{
    let raw = rpc
        .call(method, params)
        .await
        .map_err(|source| CoreError::Call { method, source })?;
    serde_json::from_value(raw).map_err(|e| CoreError::Call {
        method,
        source: RpcError::Decode(e),
    })
}
