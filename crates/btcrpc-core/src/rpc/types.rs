//! Typed result records for the supported RPC methods.
//!
//! Field names on the wire are exactly the node's names; serde renames map
//! them onto snake_case Rust fields. Nothing is derived or computed: a record
//! is the node's `result` object with its fields coerced to Rust types.
//! Missing required fields fail deserialization instead of defaulting.

use bitcoin::{BlockHash, Txid};
use serde::{Deserialize, Serialize};

// ==============================================================================
// Blocks
// ==============================================================================

/// Block record from `getblock` at the default verbosity (txids only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub hash: BlockHash,
    /// `-1` when the block is not on the active chain.
    pub confirmations: i64,
    pub size: u64,
    #[serde(rename = "strippedsize")]
    pub stripped_size: u64,
    pub height: u64,
    pub weight: u64,
    pub version: i32,
    #[serde(rename = "versionHex")]
    pub version_hex: String,
    #[serde(rename = "merkleroot")]
    pub merkle_root: String,
    pub tx: Vec<Txid>,
    pub time: u64,
    #[serde(rename = "mediantime")]
    pub median_time: u64,
    pub nonce: u32,
    pub bits: String,
    pub difficulty: f64,
    #[serde(rename = "chainwork")]
    pub chain_work: String,
    #[serde(rename = "nTx")]
    pub n_tx: u64,
    /// Absent on the genesis block.
    #[serde(
        rename = "previousblockhash",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_block_hash: Option<BlockHash>,
    /// Absent on the chain tip.
    #[serde(
        rename = "nextblockhash",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next_block_hash: Option<BlockHash>,
}

/// Header record from `getblockheader` (verbose form).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub hash: BlockHash,
    pub confirmations: i64,
    pub height: u64,
    pub version: i32,
    #[serde(rename = "versionHex")]
    pub version_hex: String,
    #[serde(rename = "merkleroot")]
    pub merkle_root: String,
    pub time: u64,
    #[serde(rename = "mediantime")]
    pub median_time: u64,
    pub nonce: u32,
    pub bits: String,
    pub difficulty: f64,
    #[serde(rename = "chainwork")]
    pub chain_work: String,
    #[serde(rename = "nTx", default, skip_serializing_if = "Option::is_none")]
    pub n_tx: Option<u64>,
    #[serde(
        rename = "previousblockhash",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_block_hash: Option<BlockHash>,
    #[serde(
        rename = "nextblockhash",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next_block_hash: Option<BlockHash>,
}

/// Compact block filter from `getblockfilter`, both fields hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockFilter {
    pub filter: String,
    pub header: String,
}

// ==============================================================================
// Chain Info
// ==============================================================================

/// Chain state summary from `getblockchaininfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockchainInfo {
    pub chain: String,
    pub blocks: u64,
    pub headers: u64,
    #[serde(rename = "bestblockhash")]
    pub best_block_hash: BlockHash,
    pub difficulty: f64,
    pub time: u64,
    #[serde(rename = "mediantime")]
    pub median_time: u64,
    #[serde(rename = "verificationprogress")]
    pub verification_progress: f64,
    #[serde(rename = "initialblockdownload")]
    pub initial_block_download: bool,
    #[serde(rename = "chainwork")]
    pub chain_work: String,
    #[serde(rename = "size_on_disk", alias = "sizeondisk")]
    pub size_on_disk: u64,
    pub pruned: bool,
    /// Only reported when `pruned` is true.
    #[serde(
        rename = "pruneheight",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub prune_height: Option<u64>,
    #[serde(
        rename = "automatic_pruning",
        alias = "automaticpruning",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub automatic_pruning: Option<bool>,
    #[serde(
        rename = "prune_target_size",
        alias = "prunetargetsize",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub prune_target_size: Option<u64>,
    pub warnings: Warnings,
}

/// Node warnings. Bitcoin Core reports a single string up to v27 and a list
/// of strings from v28 onward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Warnings {
    Single(String),
    List(Vec<String>),
}

impl Warnings {
    /// True when the node has nothing to report.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(s) => s.is_empty(),
            Self::List(items) => items.iter().all(String::is_empty),
        }
    }
}
