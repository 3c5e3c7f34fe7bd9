use reqwest::Url;

use crate::error::ClientError;

/// Validate and normalize a base URL.
///
/// Trailing slashes are stripped so `http://host:3030` and
/// `http://host:3030/` post to the same effective path. URLs with an
/// explicit path (token-in-URL providers) are kept intact.
pub(super) fn normalize_endpoint(endpoint: &str) -> Result<String, ClientError> {
    let parsed = Url::parse(endpoint).map_err(|e| {
        ClientError::InvalidEndpoint(format!(
            "invalid endpoint `{endpoint}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(endpoint.trim_end_matches('/').to_owned()),
        other => Err(ClientError::InvalidEndpoint(format!(
            "unsupported endpoint scheme `{other}`; expected http or https"
        ))),
    }
}
