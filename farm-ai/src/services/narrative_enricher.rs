//! Narrative enrichment
//!
//! Primary path asks the generative-text service for a five-section
//! description; a blank or failed answer falls back to the encyclopedia
//! summary. Never fails.

use super::{EncyclopediaSource, TextGenerator};
use crate::extraction::sections::SECTION_MARKERS;
use crate::models::{Narrative, NarrativeSource};
use std::sync::Arc;

/// Shown to the user when neither path produced text
pub const NO_DESCRIPTION: &str = "No description available.";

/// Section instructions, paired with `SECTION_MARKERS` by position
const SECTION_INSTRUCTIONS: [&str; 5] = [
    "[Provide detailed information about the plant's growth cycle, stages, and timeline]",
    "[Provide detailed care instructions including watering, sunlight, soil, and maintenance needs]",
    "[Provide information about temperature, humidity, and climate preferences]",
    "[Provide 3-5 interesting facts about this plant]",
    "[Provide a brief overview of the plant]",
];

/// Fixed-template prompt for a species
pub fn build_prompt(species_name: &str) -> String {
    let mut prompt = format!(
        "Provide detailed information about the plant '{}' in the following format:\n\n",
        species_name
    );
    for (marker, instruction) in SECTION_MARKERS.iter().zip(SECTION_INSTRUCTIONS) {
        prompt.push_str(marker);
        prompt.push('\n');
        prompt.push_str(instruction);
        prompt.push_str("\n\n");
    }
    prompt.push_str("Make sure to provide comprehensive, accurate information for each section.");
    prompt
}

/// Encyclopedia title for a species name
pub fn encyclopedia_title(species_name: &str) -> String {
    species_name.trim().replace(' ', "_")
}

pub struct NarrativeEnricher {
    generator: Arc<dyn TextGenerator>,
    encyclopedia: Arc<dyn EncyclopediaSource>,
}

impl NarrativeEnricher {
    pub fn new(generator: Arc<dyn TextGenerator>, encyclopedia: Arc<dyn EncyclopediaSource>) -> Self {
        Self {
            generator,
            encyclopedia,
        }
    }

    pub async fn enrich(&self, species_name: &str) -> Option<Narrative> {
        match self.generator.generate(&build_prompt(species_name)).await {
            Ok(Some(text)) if !text.trim().is_empty() => {
                tracing::info!(species = %species_name, chars = text.len(), "Generated narrative received");
                return Some(Narrative {
                    text,
                    source: NarrativeSource::Generated,
                });
            }
            Ok(_) => {
                tracing::info!(species = %species_name, "Generated narrative empty, trying encyclopedia");
            }
            Err(e) => {
                tracing::warn!(species = %species_name, error = %e, "Narrative generation failed, trying encyclopedia");
            }
        }

        let title = encyclopedia_title(species_name);
        match self.encyclopedia.summary(&title).await {
            Ok(Some(text)) if !text.trim().is_empty() => {
                tracing::info!(title = %title, chars = text.len(), "Encyclopedia summary received");
                Some(Narrative {
                    text,
                    source: NarrativeSource::Encyclopedia,
                })
            }
            Ok(_) => {
                tracing::info!(title = %title, "Encyclopedia summary empty");
                None
            }
            Err(e) => {
                tracing::warn!(title = %title, error = %e, "Encyclopedia lookup failed");
                None
            }
        }
    }
}
