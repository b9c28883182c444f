use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RpcError;

use super::BitcoinRpc;

/// A recorded invocation of the call primitive.
pub type RecordedCall = (String, Vec<Value>);

/// A mock Bitcoin RPC backend for testing. Answers `call` from a queue of
/// canned outcomes populated via the builder pattern, and records every
/// `(method, params)` pair it receives.
pub struct MockRpc {
    responses: Mutex<VecDeque<Result<Value, RpcError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockRpc {
    pub fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            responses: VecDeque::new(),
        }
    }

    /// Mock whose single call resolves with `value`.
    pub fn with_result(value: Value) -> Self {
        Self::builder().with_result(value).build()
    }

    /// Mock whose single call fails with `err`.
    pub fn with_error(err: RpcError) -> Self {
        Self::builder().with_error(err).build()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

pub struct MockRpcBuilder {
    responses: VecDeque<Result<Value, RpcError>>,
}

impl MockRpcBuilder {
    pub fn with_result(mut self, value: Value) -> Self {
        self.responses.push_back(Ok(value));
        self
    }

    pub fn with_error(mut self, err: RpcError) -> Self {
        self.responses.push_back(Err(err));
        self
    }

    pub fn build(self) -> MockRpc {
        MockRpc {
            responses: Mutex::new(self.responses),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl BitcoinRpc for MockRpc {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push((method.to_owned(), params));
        self.responses
            .lock()
            .expect("mock responses poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(RpcError::InvalidResponse(format!(
                    "no canned response left for {method}"
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn responses_are_served_in_order() {
        let rpc = MockRpc::builder()
            .with_result(json!(1))
            .with_error(RpcError::Server {
                code: -5,
                message: "Block not found".to_owned(),
            })
            .build();

        assert_eq!(rpc.get_block_count().await.expect("first call"), 1);
        let err = rpc.get_block_count().await.expect_err("second call");
        assert_eq!(err.to_string(), "Error calling getblockcount: Block not found");
        assert_eq!(rpc.calls().len(), 2);
    }

    #[tokio::test]
    async fn exhausted_queue_reports_method() {
        let rpc = MockRpc::builder().build();
        let err = rpc
            .call("getblockcount", Vec::new())
            .await
            .expect_err("no canned response");
        assert!(err.to_string().contains("getblockcount"));
    }
}
