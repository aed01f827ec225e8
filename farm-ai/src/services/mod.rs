//! Remote service clients and the pipeline stages built on them
//!
//! Each remote collaborator sits behind a trait so the orchestrator can be
//! exercised with in-process fakes:
//! - [`PlantIdentifier`]: image → ranked species candidates
//! - [`BotanicalDatabase`]: name search and detail-by-id fetch
//! - [`TextGenerator`]: single-prompt generative text
//! - [`EncyclopediaSource`]: summary extract by title
//! - [`ChatCompletion`]: chat prompt → message content

pub mod botanical_lookup;
pub mod candidate_matcher;
pub mod gemini_client;
pub mod http;
pub mod image_normalizer;
pub mod narrative_enricher;
pub mod openai_client;
pub mod plant_id_client;
pub mod trefle_client;
pub mod wikipedia_client;

pub use botanical_lookup::BotanicalLookup;
pub use candidate_matcher::find_best_match;
pub use gemini_client::GeminiClient;
pub use image_normalizer::{ImageNormalizer, ImagePayload, ImageSource};
pub use narrative_enricher::NarrativeEnricher;
pub use openai_client::OpenAiClient;
pub use plant_id_client::PlantIdClient;
pub use trefle_client::TrefleClient;
pub use wikipedia_client::WikipediaClient;

use crate::error::ServiceError;
use crate::models::{BotanicalRecord, BotanicalSearchHit, IdentificationResponse};
use async_trait::async_trait;

/// Plant identification service
#[async_trait]
pub trait PlantIdentifier: Send + Sync {
    async fn identify(&self, image: &ImagePayload) -> Result<IdentificationResponse, ServiceError>;
}

/// Botanical database service
#[async_trait]
pub trait BotanicalDatabase: Send + Sync {
    /// Keyed search returning unordered hits
    async fn search(&self, query: &str) -> Result<Vec<BotanicalSearchHit>, ServiceError>;

    /// Detail record by numeric identifier
    async fn fetch_detail(&self, id: i64) -> Result<BotanicalRecord, ServiceError>;
}

/// Generative-text service; `Ok(None)` when the response carries no text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ServiceError>;
}

/// Encyclopedia summary service; `Ok(None)` when the page has no extract
#[async_trait]
pub trait EncyclopediaSource: Send + Sync {
    async fn summary(&self, title: &str) -> Result<Option<String>, ServiceError>;
}

/// Chat-completion service; `Ok(None)` when no message content came back
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, ServiceError>;
}
