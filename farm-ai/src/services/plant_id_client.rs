//! Plant identification service client
//!
//! Uploads one image per request as multipart form data and returns ranked
//! species candidates with the extended detail sub-record.

use super::http::{build_client, check_status, read_json, transport_error};
use super::image_normalizer::ImagePayload;
use super::PlantIdentifier;
use crate::config::{ServiceConfig, TimeoutConfig};
use crate::error::ServiceError;
use crate::models::IdentificationResponse;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

pub const DEFAULT_BASE_URL: &str = "https://api.plant.id";

/// Organ hint sent with every image
const ORGAN_HINT: &str = "leaf";

/// Extended detail fields requested per candidate
const DETAIL_FIELDS: &str = "common_names,url,wiki_description,taxonomy,synonyms,edible_parts,watering,propagation_methods,sunlight,pruning_month,harvest_season,care";

/// Plant identification API client
pub struct PlantIdClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PlantIdClient {
    pub fn new(config: &ServiceConfig, timeouts: &TimeoutConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            http_client: build_client(timeouts)?,
            base_url: config.base_or(DEFAULT_BASE_URL).to_string(),
            api_key: config.key().to_string(),
        })
    }

    fn build_form(image: &ImagePayload) -> Result<Form, ServiceError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)
            .map_err(transport_error)?;

        Ok(Form::new()
            .part("images", part)
            .text("organs", ORGAN_HINT)
            .text("include_related_images", "false")
            .text("no_reject", "false")
            .text("details", DETAIL_FIELDS))
    }
}

#[async_trait]
impl PlantIdentifier for PlantIdClient {
    async fn identify(&self, image: &ImagePayload) -> Result<IdentificationResponse, ServiceError> {
        let url = format!("{}/v2/identify", self.base_url);

        tracing::debug!(
            size = image.bytes.len(),
            content_type = %image.content_type,
            "Querying plant identification API"
        );

        let response = self
            .http_client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .multipart(Self::build_form(image)?)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(response).await?;
        let identification: IdentificationResponse = read_json(response).await?;

        if let Some(best) = identification.best_candidate() {
            tracing::info!(
                plant = %best.name,
                probability = best.probability,
                is_plant = identification.is_plant,
                candidates = identification.suggestions.as_ref().map(|s| s.len()).unwrap_or(0),
                "Plant identification successful"
            );
        } else {
            tracing::info!(
                is_plant = identification.is_plant,
                is_plant_probability = identification.is_plant_probability,
                "Plant identification returned no candidates"
            );
        }

        Ok(identification)
    }
}
