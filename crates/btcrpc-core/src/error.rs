/// Failure of a single JSON-RPC round trip, as produced by
/// [`BitcoinRpc::call`](crate::rpc::BitcoinRpc::call).
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// The node answered with a non-null `error` object. Only the remote
    /// message is rendered; the code stays available for matching.
    #[error("{message}")]
    Server { code: i64, message: String },

    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),

    /// The request envelope could not be serialized; nothing was sent.
    #[error("encode JSON-RPC request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("unexpected result shape: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A typed wrapper failed; `method` is the JSON-RPC method name.
    #[error("Error calling {method}: {source}")]
    Call {
        method: &'static str,
        #[source]
        source: RpcError,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CoreError {
    /// The underlying round-trip failure, if this error came from a call.
    pub fn rpc_error(&self) -> Option<&RpcError> {
        match self {
            Self::Call { source, .. } => Some(source),
            Self::Config(_) => None,
        }
    }
}
