use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};

use crate::error::ScanError;

/// Seam between the cycle orchestrator and the network. The production
/// implementation is [`HttpFetcher`]; tests substitute canned pages.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, ScanError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        HttpFetcher { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScanError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScanError::Fetch { url: url.to_string(), source: e })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::FetchStatus { url: url.to_string(), status });
        }

        response
            .text()
            .map_err(|e| ScanError::Fetch { url: url.to_string(), source: e })
    }
}
