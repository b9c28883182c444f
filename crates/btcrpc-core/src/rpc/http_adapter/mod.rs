//! Native JSON-RPC client for Bitcoin Core compatible endpoints.
//!
//! Implements [`BitcoinRpc`](super::BitcoinRpc) over HTTP(S) using `reqwest`,
//! with a Basic authorization header computed once at construction.

mod client;
mod connection;
mod protocol;

pub use client::HttpRpcClient;
