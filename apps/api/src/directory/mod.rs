/// Places directory client. All catalog lookups go through `PlacesDirectory`
/// so handlers can be exercised against a fake in tests.
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod types;

pub use types::{CatalogResponse, Contact, ContactGroup, DirectoryItem, Point, Rubric};

const CATALOG_API_URL: &str = "https://catalog.api.2gis.com/3.0/items";
/// Maximum page size the collector asks for.
pub const PAGE_SIZE: u32 = 50;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The API answered but its `meta.code` was not 200.
    #[error("Directory returned non-success status: {meta}")]
    Status { meta: Value },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for DirectoryError {
    /// The catalog key travels in the query string, so the URL is dropped.
    fn from(e: reqwest::Error) -> Self {
        DirectoryError::Http(e.without_url())
    }
}

#[async_trait]
pub trait PlacesDirectory: Send + Sync {
    async fn search(
        &self,
        query: &str,
        region_id: i64,
        page_size: u32,
    ) -> Result<Vec<DirectoryItem>, DirectoryError>;
}

/// 2GIS catalog API client.
#[derive(Clone)]
pub struct DgisClient {
    client: Client,
    api_key: String,
    url: String,
}

impl DgisClient {
    pub fn new(api_key: String) -> Self {
        Self::with_url(api_key, CATALOG_API_URL)
    }

    pub fn with_url(api_key: String, url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl PlacesDirectory for DgisClient {
    async fn search(
        &self,
        query: &str,
        region_id: i64,
        page_size: u32,
    ) -> Result<Vec<DirectoryItem>, DirectoryError> {
        let region_id = region_id.to_string();
        let page_size = page_size.to_string();

        let body = self
            .client
            .get(&self.url)
            .query(&[
                ("q", query),
                ("region_id", region_id.as_str()),
                ("key", self.api_key.as_str()),
                ("page_size", page_size.as_str()),
            ])
            .send()
            .await?
            .text()
            .await?;

        // The catalog reports failures inside `meta`, often with HTTP 200.
        let resp: CatalogResponse = serde_json::from_str(&body)?;
        if resp.status_code() != Some(200) {
            return Err(DirectoryError::Status { meta: resp.meta });
        }

        let items = resp.result.map(|r| r.items).unwrap_or_default();
        debug!(query, count = items.len(), "Directory search returned");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_transport_error_hides_key() {
        let client = DgisClient::with_url("SECRET-2GIS".to_string(), "http://127.0.0.1:1/3.0/items");
        let err = client.search("camp", 12, PAGE_SIZE).await.unwrap_err();
        let debug = format!("{err:?}");

        assert!(matches!(err, DirectoryError::Http(_)));
        assert!(!err.to_string().contains("SECRET-2GIS"));
        assert!(!debug.contains("SECRET-2GIS"), "{debug}");
    }
}
