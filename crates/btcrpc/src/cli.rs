use std::path::PathBuf;

use clap::{Parser, Subcommand};

use btcrpc_core::config::{
    DEFAULT_RPC_PASS, DEFAULT_RPC_URL, DEFAULT_RPC_USER, ENV_RPC_COOKIE, ENV_RPC_PASS,
    ENV_RPC_URL, ENV_RPC_USER,
};
use btcrpc_core::{RpcAuth, RpcConfig};

/// btcrpc: query a Bitcoin Core node over JSON-RPC and print the result as JSON.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Bitcoin Core RPC URL.
    #[arg(long, global = true, default_value = DEFAULT_RPC_URL, env = ENV_RPC_URL)]
    pub rpc_url: String,

    /// RPC username.
    #[arg(long, global = true, default_value = DEFAULT_RPC_USER, env = ENV_RPC_USER)]
    pub rpc_user: String,

    /// RPC password.
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_RPC_PASS,
        env = ENV_RPC_PASS,
        hide_env_values = true
    )]
    pub rpc_pass: String,

    /// Path to bitcoind's `.cookie` file; overrides --rpc-user/--rpc-pass.
    #[arg(long, global = true, env = ENV_RPC_COOKIE)]
    pub rpc_cookie_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Client configuration from the global flags. Empty values, as clap
    /// passes through for variables that are set but blank, fall back to
    /// the placeholders the same way [`RpcConfig::from_env`] does.
    pub fn rpc_config(&self) -> RpcConfig {
        let or_default = |value: &str, default: &str| {
            if value.is_empty() {
                default.to_owned()
            } else {
                value.to_owned()
            }
        };
        let cookie = self
            .rpc_cookie_file
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty());

        RpcConfig {
            url: or_default(&self.rpc_url, DEFAULT_RPC_URL),
            auth: match cookie {
                Some(path) => RpcAuth::CookieFile(path.clone()),
                None => RpcAuth::UserPass {
                    user: or_default(&self.rpc_user, DEFAULT_RPC_USER),
                    pass: or_default(&self.rpc_pass, DEFAULT_RPC_PASS),
                },
            },
        }
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Hash of the best (tip) block.
    BestBlockHash,

    /// Block record for a block hash.
    Block { hash: String },

    /// Chain state summary.
    BlockchainInfo,

    /// Height of the most-work chain.
    BlockCount,

    /// Compact block filter for a block hash.
    BlockFilter {
        hash: String,

        /// Filter type to request.
        #[arg(long)]
        filter_type: Option<String>,
    },

    /// Hash of the block at a height.
    BlockHash { height: u64 },

    /// Header record for a block hash.
    BlockHeader { hash: String },

    /// Raw call: each parameter is parsed as JSON, falling back to a string.
    Call {
        method: String,
        params: Vec<String>,
    },
}
