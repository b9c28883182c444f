use crate::error::RpcError;

/// Protocol tag Bitcoin Core expects for its legacy JSON-RPC dialect.
pub(super) const JSONRPC_VERSION: &str = "1.0";

/// Calls are never batched or pipelined, so the id is a fixed literal and is
/// not used to correlate responses. Batching would need real id generation.
pub(super) const REQUEST_ID: &str = "curltest";

#[derive(serde::Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: &'static str,
    pub(super) method: &'a str,
    pub(super) params: &'a [serde_json::Value],
}

impl<'a> JsonRpcRequest<'a> {
    pub(super) fn new(method: &'a str, params: &'a [serde_json::Value]) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: REQUEST_ID,
            method,
            params,
        }
    }
}

/// Response envelope. The `id` is ignored.
#[derive(serde::Deserialize)]
pub(super) struct JsonRpcResponse {
    pub(super) result: Option<serde_json::Value>,
    pub(super) error: Option<serde_json::Value>,
}

/// Parse a JSON-RPC error value into a structured `RpcError`.
///
/// The JSON-RPC spec defines errors as `{"code": <int>, "message": <string>}`.
/// If the error value matches that shape, we produce a `Server` error;
/// otherwise we fall back to `InvalidResponse` with the raw JSON.
pub(super) fn parse_jsonrpc_error(err: serde_json::Value) -> RpcError {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

    match serde_json::from_value::<JsonRpcError>(err.clone()) {
        Ok(parsed) => RpcError::Server {
            code: parsed.code,
            message: parsed.message,
        },
        Err(_) => RpcError::InvalidResponse(format!("non-standard JSON-RPC error: {err}")),
    }
}
