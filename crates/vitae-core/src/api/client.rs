//! HTTP client for fetching the site's published JSON data files.
//!
//! This module provides the `DataClient` struct for issuing plain GET
//! requests against the data base URL, one per resource file.

use reqwest::Client;
use tracing::debug;

use crate::resources::Resource;

use super::FetchError;

/// HTTP request timeout in seconds.
/// The data files are small static JSON; anything slower than this is a
/// hosting problem, not a slow payload.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the portfolio data files.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Debug, Clone)]
pub struct DataClient {
    client: Client,
    base_url: String,
}

impl DataClient {
    /// Create a new data client for the given base URL (trailing slash
    /// optional).
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn resource_url(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.file_name())
    }

    /// Fetch one resource document. Success requires an HTTP success status
    /// and a body that parses as JSON; the document's shape is validated
    /// later, at the combined-document boundary.
    pub async fn fetch(&self, resource: Resource) -> Result<serde_json::Value, FetchError> {
        let url = self.resource_url(resource);
        debug!(resource = %resource, url = %url, "Fetching resource");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::from_status(status, &body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(FetchError::InvalidJson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_normalized() {
        let client = DataClient::new("https://example.org/assets/data/").unwrap();
        assert_eq!(client.base_url(), "https://example.org/assets/data");
        assert_eq!(
            client.resource_url(Resource::Site),
            "https://example.org/assets/data/site.json"
        );
    }
}
