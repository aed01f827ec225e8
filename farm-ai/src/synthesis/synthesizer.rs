//! Analysis synthesizer
//!
//! Field priority: structured facts, then keyword heuristics, then the crop
//! table and the 120-day fallback (lifecycle only). The botanical record only
//! feeds `plant_details`.

use super::lifecycle::resolve_lifecycle;
use super::plant_details::derive_plant_details;
use crate::extraction::heuristics::{infer_additional_info, infer_requirements};
use crate::extraction::{split_sections, ExtractedFacts};
use crate::models::{
    has_unknown_fields, BotanicalRecord, CropAnalysis, IdentificationCandidate, Narrative,
    NarrativeSource,
};
use crate::services::narrative_enricher::NO_DESCRIPTION;

/// Everything the pipeline gathered for one analysis
#[derive(Debug, Clone, Copy)]
pub struct SynthesisInput<'a> {
    pub candidate: &'a IdentificationCandidate,
    pub narrative: Option<&'a Narrative>,
    pub facts: Option<&'a ExtractedFacts>,
    pub botanical: Option<&'a BotanicalRecord>,
}

impl<'a> SynthesisInput<'a> {
    /// Narrative text, or the no-description placeholder
    pub fn description(&self) -> &'a str {
        self.narrative.map_or(NO_DESCRIPTION, |n| n.text.as_str())
    }
}

pub fn synthesize(input: SynthesisInput<'_>) -> CropAnalysis {
    let species = input.candidate.name.as_str();
    let description = input.description();

    let lifecycle = resolve_lifecycle(input.facts, description, species);
    let requirements = input
        .facts
        .map(|f| f.requirements.clone())
        .unwrap_or_else(|| infer_requirements(description));
    let additional_info = input
        .facts
        .map(|f| f.additional_info.clone())
        .unwrap_or_else(|| infer_additional_info(description));

    let sections = input
        .narrative
        .filter(|n| n.source == NarrativeSource::Generated)
        .map(|n| split_sections(&n.text));
    let plant_details = input.botanical.map(|record| {
        derive_plant_details(
            record,
            input.candidate.plant_details.as_ref(),
            sections.as_ref(),
        )
    });

    let is_generic = has_unknown_fields(&lifecycle, &requirements, &additional_info);

    tracing::debug!(
        species = %species,
        total_days = lifecycle.total_days,
        structured = input.facts.is_some(),
        botanical = input.botanical.is_some(),
        is_generic = is_generic,
        "Analysis synthesized"
    );

    CropAnalysis {
        crop_name: input.candidate.name.clone(),
        confidence: input.candidate.probability as f32,
        is_healthy: true,
        diseases: Vec::new(),
        lifecycle,
        requirements,
        additional_info,
        ai_details: Some(description.to_string()),
        plant_info_sections: sections,
        plant_details,
        is_generic,
    }
}
