//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients. The transport
//! layer is the only place a timeout lives - the analysis pipeline itself
//! never enforces one.

use std::time::Duration;

/// Build a `reqwest::Client`, optionally with a request timeout.
///
/// - `Some(timeout)` -> every request fails after the given duration
/// - `None` -> no client-side timeout; the call waits for the full response
pub fn build_http_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    builder.build().expect("failed to build reqwest client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client_no_timeout() {
        let _client = build_http_client(None);
    }

    #[test]
    fn test_build_http_client_with_timeout() {
        let _client = build_http_client(Some(Duration::from_secs(120)));
    }
}
