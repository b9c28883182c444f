use async_trait::async_trait;
use reqwest::header::{self, HeaderValue};
use reqwest::Url;
use tracing::{debug, trace};

use crate::config::RpcConfig;
use crate::error::{CoreError, RpcError};

use super::super::BitcoinRpc;
use super::connection::{basic_auth_header, parse_connection, resolve_auth};
use super::protocol::{parse_jsonrpc_error, JsonRpcRequest, JsonRpcResponse};

/// Bitcoin Core JSON-RPC client over HTTP(S).
///
/// Holds only read-only state after construction, so one instance can serve
/// any number of concurrent calls. Each call is exactly one POST; there is no
/// retry, batching or client-side timeout.
pub struct HttpRpcClient {
    client: reqwest::Client,
    url: Url,
    auth_header: HeaderValue,
}

impl HttpRpcClient {
    /// Create a new client from `config`.
    ///
    /// Fails when the URL is not `http(s)://`, when a cookie file cannot be
    /// read, or when the credentials cannot form a header value.
    pub fn new(config: &RpcConfig) -> Result<Self, CoreError> {
        let url = parse_connection(&config.url)?;
        let (user, pass) = resolve_auth(&config.auth)?;
        let auth_header = basic_auth_header(&user, &pass)?;

        let client = reqwest::Client::builder()
            .tcp_nodelay(true)
            .build()
            .map_err(|e| CoreError::Config(format!("build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url,
            auth_header,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl BitcoinRpc for HttpRpcClient {
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, RpcError> {
        debug!(rpc.method = method, rpc.params = params.len(), "rpc call");
        let req = JsonRpcRequest::new(method, &params);
        let payload = serde_json::to_vec(&req).map_err(RpcError::Encode)?;

        let response = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "text/plain")
            .header(header::AUTHORIZATION, self.auth_header.clone())
            .body(payload)
            .send()
            .await?;
        let status = response.status();

        let body = response.text().await?;
        debug!(rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.method = method, body = %body, "rpc response body");

        // Bitcoin Core reports RPC failures with a 4xx/5xx status *and* an
        // error envelope, so the envelope is checked before the status.
        let decoded: JsonRpcResponse = match serde_json::from_str(&body) {
            Ok(decoded) => decoded,
            Err(_) if !status.is_success() => {
                return Err(RpcError::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            Err(e) => {
                return Err(RpcError::InvalidResponse(format!(
                    "decode JSON-RPC response: {e}; body={body}"
                )));
            }
        };

        if let Some(err) = decoded.error {
            return Err(parse_jsonrpc_error(err));
        }
        if !status.is_success() {
            return Err(RpcError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(decoded.result.unwrap_or(serde_json::Value::Null))
    }
}
