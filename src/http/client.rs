use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

use crate::constants::REQUEST_TIMEOUT_SECS;

/// Build the HTTP client used for the Loki query
pub fn build_http_client() -> Result<Client> {
    build_http_client_with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
}

/// Build the HTTP client with an explicit whole-request timeout
pub fn build_http_client_with_timeout(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
