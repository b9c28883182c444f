use std::env;
use std::sync::Once;

use bitcoin::BlockHash;
use btcrpc_core::rpc::{BitcoinRpc, HttpRpcClient};
use btcrpc_core::RpcConfig;

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("btcrpc_core=debug")),
            )
            .with_target(true)
            .try_init();
    });
}

fn regtest_client() -> HttpRpcClient {
    let rpc_url = env::var("BTCRPC_TEST_RPC_URL").expect("BTCRPC_TEST_RPC_URL must be set");
    let rpc_user = env::var("BTCRPC_TEST_RPC_USER").expect("BTCRPC_TEST_RPC_USER must be set");
    let rpc_pass = env::var("BTCRPC_TEST_RPC_PASS").expect("BTCRPC_TEST_RPC_PASS must be set");
    HttpRpcClient::new(&RpcConfig::new(rpc_url, rpc_user, rpc_pass))
        .expect("rpc client must construct")
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires local regtest bitcoind with blockfilterindex=1"]
async fn regtest_rpc_client_walks_chain_tip() {
    init_tracing();
    let rpc = regtest_client();

    eprintln!("[itest] checking get_blockchain_info against {}", rpc.url());
    let info = rpc
        .get_blockchain_info()
        .await
        .expect("regtest get_blockchain_info must succeed");
    assert_eq!(info.chain, "regtest");
    assert!(info.blocks >= 1, "regtest must have mined at least one block");

    let count = rpc
        .get_block_count()
        .await
        .expect("get_block_count must succeed");
    assert_eq!(count, info.blocks);

    let best = rpc
        .get_best_block_hash()
        .await
        .expect("get_best_block_hash must succeed");
    assert_eq!(best, info.best_block_hash.to_string());

    let tip_hex = rpc
        .get_block_hash(count)
        .await
        .expect("get_block_hash must succeed for the tip height");
    assert_eq!(tip_hex, best);
    let tip_hash: BlockHash = tip_hex.parse().expect("node must return a valid block hash");

    let header = rpc
        .get_block_header(&tip_hash)
        .await
        .expect("get_block_header must succeed");
    assert_eq!(header.height, count);
    assert!(
        header.next_block_hash.is_none(),
        "the tip header must not carry a next block hash"
    );

    let block = rpc
        .get_block(&tip_hash)
        .await
        .expect("get_block must succeed");
    assert_eq!(block.hash, tip_hash);
    assert_eq!(block.tx.len() as u64, block.n_tx);
    assert_eq!(block.previous_block_hash, header.previous_block_hash);

    let filter = rpc
        .get_block_filter(&tip_hash, None)
        .await
        .expect("get_block_filter must succeed with blockfilterindex enabled");
    assert!(!filter.header.is_empty());
    eprintln!("[itest] integration test completed");
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires local regtest bitcoind"]
async fn regtest_rpc_client_reports_out_of_range_height() {
    init_tracing();
    let rpc = regtest_client();

    let err = rpc
        .get_block_hash(u32::MAX as u64)
        .await
        .expect_err("out-of-range height must fail");
    assert!(err
        .to_string()
        .starts_with("Error calling getblockhash: Block height out of range"));
}
