//! Crop analysis orchestrator
//!
//! Image → identification → (botanical lookup ∥ narrative enrichment) →
//! structured extraction → synthesis. Only normalization and identification
//! can fail the request; later stages degrade into defaulted fields.

use super::failure_classifier;
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, AnalysisResult, ServiceError};
use crate::extraction::FactsExtractor;
use crate::models::{CropAnalysis, IdentificationCandidate, IdentificationResponse};
use crate::services::{
    BotanicalDatabase, BotanicalLookup, ChatCompletion, EncyclopediaSource, GeminiClient,
    ImageNormalizer, ImageSource, NarrativeEnricher, OpenAiClient, PlantIdClient,
    PlantIdentifier, TextGenerator, TrefleClient, WikipediaClient,
};
use crate::synthesis::{synthesize, SynthesisInput};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Remote collaborators of the pipeline
#[derive(Clone)]
pub struct AnalysisServices {
    pub identifier: Arc<dyn PlantIdentifier>,
    pub database: Arc<dyn BotanicalDatabase>,
    pub generator: Arc<dyn TextGenerator>,
    pub encyclopedia: Arc<dyn EncyclopediaSource>,
    pub chat: Arc<dyn ChatCompletion>,
}

impl AnalysisServices {
    /// HTTP clients for every service in `config`
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, ServiceError> {
        let timeouts = &config.timeouts;
        Ok(Self {
            identifier: Arc::new(PlantIdClient::new(&config.plant_id, timeouts)?),
            database: Arc::new(TrefleClient::new(&config.trefle, timeouts)?),
            generator: Arc::new(GeminiClient::new(&config.gemini, timeouts)?),
            encyclopedia: Arc::new(WikipediaClient::new(&config.wikipedia, timeouts)?),
            chat: Arc::new(OpenAiClient::new(&config.openai, timeouts)?),
        })
    }
}

/// Runs the analysis pipeline; holds no per-request state
pub struct CropAnalyzer {
    normalizer: ImageNormalizer,
    identifier: Arc<dyn PlantIdentifier>,
    botanical: BotanicalLookup,
    narrative: NarrativeEnricher,
    facts: FactsExtractor,
}

impl CropAnalyzer {
    pub fn new(services: AnalysisServices, max_image_bytes: u64) -> Self {
        Self {
            normalizer: ImageNormalizer::new(max_image_bytes),
            identifier: services.identifier,
            botanical: BotanicalLookup::new(services.database),
            narrative: NarrativeEnricher::new(services.generator, services.encyclopedia),
            facts: FactsExtractor::new(services.chat),
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> AnalysisResult<Self> {
        let services = AnalysisServices::from_config(config)
            .map_err(|e| AnalysisError::Configuration(e.to_string()))?;

        tracing::info!(
            max_image_bytes = config.max_image_bytes,
            plant_id_key = !config.plant_id.key().is_empty(),
            trefle_key = !config.trefle.key().is_empty(),
            gemini_key = !config.gemini.service.key().is_empty(),
            openai_key = !config.openai.service.key().is_empty(),
            "Crop analyzer initialized"
        );

        Ok(Self::new(services, config.max_image_bytes))
    }

    /// Analyze one image
    ///
    /// Connectivity loss during identification yields the demonstration
    /// analysis; see [`failure_classifier`].
    pub async fn analyze(&self, source: &ImageSource) -> AnalysisResult<CropAnalysis> {
        let span = tracing::info_span!("analysis", request_id = %Uuid::new_v4());
        async {
            let started = std::time::Instant::now();
            let outcome = failure_classifier::resolve(self.run(source).await);
            if let Ok(analysis) = &outcome {
                tracing::info!(
                    crop = %analysis.crop_name,
                    is_generic = analysis.is_generic,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Analysis complete"
                );
            }
            outcome
        }
        .instrument(span)
        .await
    }

    async fn run(&self, source: &ImageSource) -> AnalysisResult<CropAnalysis> {
        let image = self.normalizer.normalize(source).await?;
        let identification = self.identifier.identify(&image).await?;
        let candidate = select_candidate(&identification)?;
        let species = candidate.name.as_str();

        let (botanical, narrative) = tokio::join!(
            self.botanical.lookup(species),
            self.narrative.enrich(species)
        );

        let input = SynthesisInput {
            candidate,
            narrative: narrative.as_ref(),
            facts: None,
            botanical: botanical.as_ref(),
        };
        let facts = self.facts.extract(species, input.description()).await;

        Ok(synthesize(SynthesisInput {
            facts: facts.as_ref(),
            ..input
        }))
    }
}

/// Winning candidate, or the domain error that ends the request
pub fn select_candidate(
    identification: &IdentificationResponse,
) -> AnalysisResult<&IdentificationCandidate> {
    if !identification.is_plant {
        return Err(AnalysisError::NotAPlant {
            probability: identification.is_plant_probability,
        });
    }
    identification
        .best_candidate()
        .ok_or(AnalysisError::NoCandidatesFound)
}
