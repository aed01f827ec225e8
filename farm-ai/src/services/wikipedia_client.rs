//! Encyclopedia summary client

use super::http::{build_client, check_status, read_json, transport_error};
use super::EncyclopediaSource;
use crate::config::{ServiceConfig, TimeoutConfig};
use crate::error::ServiceError;
use async_trait::async_trait;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";

#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default)]
    extract: Option<String>,
}

/// Encyclopedia REST summary client
pub struct WikipediaClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl WikipediaClient {
    pub fn new(config: &ServiceConfig, timeouts: &TimeoutConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            http_client: build_client(timeouts)?,
            base_url: config.base_or(DEFAULT_BASE_URL).to_string(),
        })
    }
}

#[async_trait]
impl EncyclopediaSource for WikipediaClient {
    /// Fetch the page summary for an already-underscored title
    async fn summary(&self, title: &str) -> Result<Option<String>, ServiceError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ServiceError::Parse(format!("invalid base URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ServiceError::Parse(format!("base URL cannot hold a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["page", "summary", title]);

        tracing::debug!(title = %title, "Fetching encyclopedia summary");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(response).await?;
        let summary: PageSummary = read_json(response).await?;

        Ok(summary.extract)
    }
}
