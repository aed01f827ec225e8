//! Best-effort botanical enrichment
//!
//! Search → match → detail fetch. Every failure is logged and absorbed; the
//! caller only ever sees an optional record.

use super::candidate_matcher::match_with_tier;
use super::BotanicalDatabase;
use crate::models::BotanicalRecord;
use std::sync::Arc;

pub struct BotanicalLookup {
    database: Arc<dyn BotanicalDatabase>,
}

impl BotanicalLookup {
    pub fn new(database: Arc<dyn BotanicalDatabase>) -> Self {
        Self { database }
    }

    /// Detail record for the best-matching search hit, if any
    pub async fn lookup(&self, species_name: &str) -> Option<BotanicalRecord> {
        let hits = match self.database.search(species_name).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!(species = %species_name, error = %e, "Botanical search failed");
                return None;
            }
        };

        let Some((best, tier)) = match_with_tier(&hits, species_name) else {
            tracing::info!(species = %species_name, "No botanical match found");
            return None;
        };

        tracing::debug!(
            species = %species_name,
            plant_id = best.id,
            tier = ?tier,
            hits = hits.len(),
            "Botanical search hit selected"
        );

        match self.database.fetch_detail(best.id).await {
            Ok(record) => {
                tracing::info!(
                    species = %species_name,
                    plant_id = record.id,
                    scientific_name = ?record.scientific_name,
                    "Botanical record fetched"
                );
                Some(record)
            }
            Err(e) => {
                tracing::warn!(
                    species = %species_name,
                    plant_id = best.id,
                    error = %e,
                    "Botanical detail fetch failed"
                );
                None
            }
        }
    }
}
