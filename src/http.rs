//! Shared HTTP client construction.
//!
//! One reqwest [`Client`] is built per run and shared between the catalog
//! client and the tile fetcher so both benefit from connection pooling.

use std::time::Duration;

use reqwest::Client;

/// HTTP connect timeout (30 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// HTTP request timeout (60 seconds).
///
/// Tiles are small, but a dead server must not hang a row barrier forever;
/// a timed-out tile degrades to an absent tile and a timed-out catalog
/// fetch is fatal to the run.
pub const READ_TIMEOUT_SECS: u64 = 60;

/// Default User-Agent identifying the tool.
fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("mediabank-dl/{version} (personal-archival-tool)")
}

/// Builds the shared HTTP client with default timeouts.
///
/// # Errors
///
/// Returns the underlying `reqwest` error if the TLS backend or connection
/// pool cannot be initialized.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .user_agent(default_user_agent())
        .gzip(true)
        .build()
}
