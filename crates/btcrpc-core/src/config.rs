//! Client configuration: endpoint URL and credentials.
//!
//! Every setting has a placeholder default so a client can always be
//! constructed without external configuration. Callers that need real
//! credentials set them through the environment variables below or build an
//! [`RpcConfig`] directly.

use std::env;
use std::path::PathBuf;

// ==============================================================================
// Environment Names and Defaults
// ==============================================================================

pub const ENV_RPC_URL: &str = "BITCOINRPCURL";
pub const ENV_RPC_USER: &str = "BITCOINRPCUSER";
pub const ENV_RPC_PASS: &str = "BITCOINRPCPASSWD";
pub const ENV_RPC_COOKIE: &str = "BITCOINRPCCOOKIE";

/// Local node on the mainnet RPC port.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8332";
pub const DEFAULT_RPC_USER: &str = "Satoshi";
pub const DEFAULT_RPC_PASS: &str = "Nakamoto";

// ==============================================================================
// Config Types
// ==============================================================================

/// How the client authenticates against the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcAuth {
    /// Explicit `rpcuser` / `rpcpassword` pair.
    UserPass { user: String, pass: String },
    /// Path to the `.cookie` file bitcoind writes into its data directory.
    /// The file is read once, when the client is constructed.
    CookieFile(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    pub url: String,
    pub auth: RpcAuth,
}

impl RpcConfig {
    pub fn new(url: impl Into<String>, user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth: RpcAuth::UserPass {
                user: user.into(),
                pass: pass.into(),
            },
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// A cookie file, when given, takes precedence over user/password.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`RpcConfig::from_env`] but with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Unset and empty variables both fall back to the placeholders.
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let url = read(ENV_RPC_URL).unwrap_or_else(|| DEFAULT_RPC_URL.to_owned());

        let auth = match read(ENV_RPC_COOKIE) {
            Some(path) => RpcAuth::CookieFile(PathBuf::from(path)),
            None => RpcAuth::UserPass {
                user: read(ENV_RPC_USER).unwrap_or_else(|| DEFAULT_RPC_USER.to_owned()),
                pass: read(ENV_RPC_PASS).unwrap_or_else(|| DEFAULT_RPC_PASS.to_owned()),
            },
        };

        Self { url, auth }
    }
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RPC_URL, DEFAULT_RPC_USER, DEFAULT_RPC_PASS)
    }
}
