//! Structured fact extraction via chat completion
//!
//! The chat service is asked to restate a description as JSON. The reply is
//! checked against one schema; any mismatch means "no structured facts" and
//! the caller falls back to keyword heuristics.

use crate::models::{AdditionalInfo, CropRequirements};
use crate::services::narrative_enricher::NO_DESCRIPTION;
use crate::services::ChatCompletion;
use serde::Deserialize;
use std::sync::Arc;

/// Facts recovered from a valid JSON reply
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFacts {
    pub lifecycle_type: String,
    /// `None` when the reply's totalDays was not positive
    pub total_days: Option<i32>,
    pub requirements: CropRequirements,
    pub additional_info: AdditionalInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FactsSchema {
    lifecycle: LifecycleSchema,
    requirements: RequirementsSchema,
    additional_info: AdditionalInfoSchema,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LifecycleSchema {
    #[serde(rename = "type")]
    kind: String,
    total_days: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequirementsSchema {
    sunlight: String,
    water: String,
    soil_type: String,
    temperature: String,
    ph_level: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdditionalInfoSchema {
    fertilizers: Vec<Option<String>>,
    ideal_climate: String,
    harvesting_tips: Vec<Option<String>>,
    pest_control: Vec<Option<String>>,
}

impl From<FactsSchema> for ExtractedFacts {
    fn from(schema: FactsSchema) -> Self {
        let days = schema.lifecycle.total_days;
        let total_days = (days.is_finite() && days >= 1.0 && days <= i32::MAX as f64)
            .then(|| days as i32);

        Self {
            lifecycle_type: schema.lifecycle.kind,
            total_days,
            requirements: CropRequirements {
                sunlight: schema.requirements.sunlight,
                water: schema.requirements.water,
                soil_type: schema.requirements.soil_type,
                temperature: schema.requirements.temperature,
                ph_level: schema.requirements.ph_level,
            },
            additional_info: AdditionalInfo {
                fertilizers: schema.additional_info.fertilizers.into_iter().flatten().collect(),
                ideal_climate: schema.additional_info.ideal_climate,
                harvesting_tips: schema
                    .additional_info
                    .harvesting_tips
                    .into_iter()
                    .flatten()
                    .collect(),
                pest_control: schema.additional_info.pest_control.into_iter().flatten().collect(),
            },
        }
    }
}

/// Validate chat content against the facts schema
///
/// Content that never mentions `lifecycle` is rejected without parsing.
pub fn parse_facts(content: &str) -> Option<ExtractedFacts> {
    if !content.contains("lifecycle") {
        return None;
    }

    let json = unwrap_fence(content);
    match serde_json::from_str::<FactsSchema>(json) {
        Ok(schema) => Some(schema.into()),
        Err(e) => {
            tracing::debug!(error = %e, "Chat reply does not match facts schema");
            None
        }
    }
}

/// Body of a ```json (or bare ```) fence, else the trimmed input
fn unwrap_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(start) = trimmed.find("```") else {
        return trimmed;
    };

    let after_fence = &trimmed[start + 3..];
    // Skip the info string ("json") up to the end of the fence line
    let body_start = after_fence.find('\n').map_or(after_fence.len(), |i| i + 1);
    let body = &after_fence[body_start..];
    match body.find("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}

pub fn build_prompt(species_name: &str, description: &str) -> String {
    format!(
        "Extract the lifecycle, care requirements, and additional information for the plant '{}' \
         from the following text. Return the result as JSON with fields: lifecycle (object with \
         type and totalDays), requirements (object with sunlight, water, soilType, temperature, \
         phLevel), additionalInfo (object with fertilizers, idealClimate, harvestingTips, \
         pestControl).\nText: {}",
        species_name, description
    )
}

/// Best-effort structured extraction over a chat-completion service
pub struct FactsExtractor {
    chat: Arc<dyn ChatCompletion>,
}

impl FactsExtractor {
    pub fn new(chat: Arc<dyn ChatCompletion>) -> Self {
        Self { chat }
    }

    /// Structured facts for a description, or `None` on any failure
    pub async fn extract(&self, species_name: &str, description: &str) -> Option<ExtractedFacts> {
        if description.trim().is_empty() || description == NO_DESCRIPTION {
            return None;
        }

        let content = match self.chat.complete(&build_prompt(species_name, description)).await {
            Ok(Some(content)) => content,
            Ok(None) => {
                tracing::info!(species = %species_name, "Chat completion returned no content");
                return None;
            }
            Err(e) => {
                tracing::warn!(species = %species_name, error = %e, "Structured extraction failed");
                return None;
            }
        };

        let facts = parse_facts(&content);
        match &facts {
            Some(facts) => tracing::info!(
                species = %species_name,
                lifecycle_type = %facts.lifecycle_type,
                total_days = ?facts.total_days,
                "Structured facts extracted"
            ),
            None => tracing::info!(species = %species_name, "Chat reply unusable, using keyword heuristics"),
        }
        facts
    }
}
