use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::HeaderValue;
use reqwest::Url;

use crate::config::RpcAuth;
use crate::error::CoreError;

pub(super) fn resolve_auth(auth: &RpcAuth) -> Result<(String, String), CoreError> {
    match auth {
        RpcAuth::UserPass { user, pass } => Ok((user.clone(), pass.clone())),
        RpcAuth::CookieFile(path) => read_cookie_file(path),
    }
}

fn read_cookie_file(cookie_file: &Path) -> Result<(String, String), CoreError> {
    let content = std::fs::read_to_string(cookie_file).map_err(|e| {
        CoreError::Config(format!(
            "failed to read rpc cookie file {}: {e}",
            cookie_file.display()
        ))
    })?;
    let line = content
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or_else(|| {
            CoreError::Config(format!(
                "rpc cookie file {} is empty",
                cookie_file.display()
            ))
        })?;

    let (cookie_user, cookie_pass) = line.split_once(':').ok_or_else(|| {
        CoreError::Config(format!(
            "rpc cookie file {} must contain `username:password`",
            cookie_file.display()
        ))
    })?;
    if cookie_user.is_empty() || cookie_pass.is_empty() {
        return Err(CoreError::Config(format!(
            "rpc cookie file {} must contain non-empty `username:password`",
            cookie_file.display()
        )));
    }

    Ok((cookie_user.to_owned(), cookie_pass.to_owned()))
}

/// Encode `Basic base64(user:pass)` once, marked sensitive so it never
/// shows up in debug output.
pub(super) fn basic_auth_header(user: &str, pass: &str) -> Result<HeaderValue, CoreError> {
    let encoded = STANDARD.encode(format!("{user}:{pass}"));
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
        .map_err(|e| CoreError::Config(format!("invalid authorization header: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

pub(super) fn parse_connection(connection: &str) -> Result<Url, CoreError> {
    let parsed = Url::parse(connection).map_err(|e| {
        CoreError::Config(format!(
            "invalid connection `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CoreError::Config(format!(
            "unsupported connection scheme `{other}`; expected http or https"
        ))),
    }
}
