mod cli;

use bitcoin::BlockHash;
use clap::Parser;
use eyre::{eyre, WrapErr};
use serde::Serialize;
use serde_json::Value;

use btcrpc_core::rpc::{BitcoinRpc, HttpRpcClient};
use btcrpc_core::RpcError;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    let config = args.rpc_config();
    let rpc = HttpRpcClient::new(&config).context("configure RPC client")?;
    tracing::debug!(url = %rpc.url(), "rpc client ready");

    let output = run(&rpc, args.command)
        .await
        .map_err(|err| annotate_rpc_error(&config.url, err))?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run(rpc: &dyn BitcoinRpc, command: Command) -> eyre::Result<Value> {
    let output = match command {
        Command::BestBlockHash => to_json(rpc.get_best_block_hash().await?)?,
        Command::Block { hash } => to_json(rpc.get_block(&parse_block_hash(&hash)?).await?)?,
        Command::BlockchainInfo => {
            let info = rpc.get_blockchain_info().await?;
            if info.initial_block_download {
                tracing::warn!(
                    progress = info.verification_progress,
                    "node is still in initial block download"
                );
            }
            if !info.warnings.is_empty() {
                tracing::warn!(warnings = ?info.warnings, "node reports warnings");
            }
            to_json(info)?
        }
        Command::BlockCount => to_json(rpc.get_block_count().await?)?,
        Command::BlockFilter { hash, filter_type } => to_json(
            rpc.get_block_filter(&parse_block_hash(&hash)?, filter_type.as_deref())
                .await?,
        )?,
        Command::BlockHash { height } => to_json(rpc.get_block_hash(height).await?)?,
        Command::BlockHeader { hash } => {
            to_json(rpc.get_block_header(&parse_block_hash(&hash)?).await?)?
        }
        Command::Call { method, params } => {
            let params = params.iter().map(|p| parse_param(p)).collect();
            rpc.call(&method, params).await.map_err(|e| {
                let message = format!("Error calling {method}: {e}");
                eyre::Report::new(e).wrap_err(message)
            })?
        }
    };
    Ok(output)
}

fn to_json<T: Serialize>(value: T) -> eyre::Result<Value> {
    serde_json::to_value(value).context("encode result as JSON")
}

fn parse_block_hash(hash: &str) -> eyre::Result<BlockHash> {
    hash.parse()
        .map_err(|e| eyre!("invalid block hash `{hash}`: {e}"))
}

/// Parse a raw-call parameter the way `bitcoin-cli` does: JSON when it is
/// valid JSON, otherwise a plain string.
fn parse_param(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

/// Wrap a failed request with a top-level message and, when the failure is
/// recognizable, a hint. The original error stays in the chain.
fn annotate_rpc_error(rpc_url: &str, err: eyre::Report) -> eyre::Report {
    let context = match rpc_hint(rpc_url, &err) {
        Some(hint) => format!("RPC request failed\n{hint}"),
        None => "RPC request failed".to_owned(),
    };
    err.wrap_err(context)
}

fn rpc_hint(rpc_url: &str, err: &eyre::Report) -> Option<String> {
    let rpc_error = err.chain().find_map(|e| e.downcast_ref::<RpcError>())?;
    match rpc_error {
        RpcError::Status { status: 401 | 403, .. } => Some(
            "hint: authentication failed; verify --rpc-user/--rpc-pass or --rpc-cookie-file"
                .into(),
        ),
        RpcError::Status { status: 404, .. } => Some(format!(
            "hint: endpoint path is invalid; verify the full RPC URL `{rpc_url}`"
        )),
        RpcError::Server { code: -32601, .. } => {
            Some("hint: the node does not know this method; check the node version".into())
        }
        RpcError::Transport(e) if e.is_connect() => Some(format!(
            "hint: could not connect to `{rpc_url}`; verify bitcoind is running with server=1"
        )),
        _ => None,
    }
}
