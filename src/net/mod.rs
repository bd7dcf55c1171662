//! Remote retrieval of text payloads

use std::future::Future;

use log::debug;

use crate::error::{LookError, Result};

/// Fetches the text body behind an address
pub trait Fetcher {
    /// Fetch `address` as text. Non-success responses are [`LookError::Network`].
    fn fetch_text(&self, address: &str) -> impl Future<Output = Result<String>> + Send;
}

/// HTTP GET fetcher backed by `reqwest`.
///
/// One request per call: no retry, no timeout, no caching.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxies, TLS roots, headers)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, address: &str) -> Result<String> {
        debug!("fetching {}", address);

        let response = self
            .client
            .get(address)
            .send()
            .await
            .map_err(|e| LookError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookError::network(status.to_string()));
        }

        response
            .text()
            .await
            .map_err(|e| LookError::network(e.to_string()))
    }
}
