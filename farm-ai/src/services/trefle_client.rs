//! Botanical database client
//!
//! Token-authenticated search by name and detail fetch by numeric id.

use super::http::{build_client, check_status, read_json, transport_error};
use super::BotanicalDatabase;
use crate::config::{ServiceConfig, TimeoutConfig};
use crate::error::ServiceError;
use crate::models::botanical::{DetailResponse, SearchResponse};
use crate::models::{BotanicalRecord, BotanicalSearchHit};
use async_trait::async_trait;

pub const DEFAULT_BASE_URL: &str = "https://trefle.io/api/v1";

/// Botanical database API client
pub struct TrefleClient {
    http_client: reqwest::Client,
    base_url: String,
    token: String,
}

impl TrefleClient {
    pub fn new(config: &ServiceConfig, timeouts: &TimeoutConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            http_client: build_client(timeouts)?,
            base_url: config.base_or(DEFAULT_BASE_URL).to_string(),
            token: config.key().to_string(),
        })
    }
}

#[async_trait]
impl BotanicalDatabase for TrefleClient {
    async fn search(&self, query: &str) -> Result<Vec<BotanicalSearchHit>, ServiceError> {
        let url = format!("{}/plants", self.base_url);

        tracing::debug!(query = %query, "Searching botanical database");

        let response = self
            .http_client
            .get(&url)
            .query(&[("q", query), ("token", self.token.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(response).await?;
        let search: SearchResponse = read_json(response).await?;

        tracing::debug!(query = %query, hits = search.data.len(), "Botanical search complete");

        Ok(search.data)
    }

    async fn fetch_detail(&self, id: i64) -> Result<BotanicalRecord, ServiceError> {
        let url = format!("{}/plants/{}", self.base_url, id);

        tracing::debug!(plant_id = id, "Fetching botanical detail record");

        let response = self
            .http_client
            .get(&url)
            .query(&[("token", self.token.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(response).await?;
        let detail: DetailResponse = read_json(response).await?;

        Ok(BotanicalRecord::from(detail.data))
    }
}
