//! Lifecycle construction
//!
//! Stage lengths are fixed fractions of the total: 1/6, 1/3, 1/6, 1/4, 1/12.
//! The fractions add up to the whole, but each stage is truncated
//! independently, so the stage sum can fall short of `total_days` by up to
//! four days (365 → 60 + 121 + 60 + 91 + 30 = 362). Totals are reported as
//! given and stages are not rebalanced.

use crate::extraction::heuristics::{crop_default_days, infer_lifecycle};
use crate::extraction::ExtractedFacts;
use crate::models::{CropLifecycle, LifecycleStage};

/// Stage name, divisor of the total, description
const STAGE_PLAN: [(&str, i32, &str); 5] = [
    ("Seedling", 6, "Germination and early growth"),
    ("Vegetative", 3, "Leaf and stem development"),
    ("Flowering", 6, "Flower formation and pollination"),
    ("Fruiting", 4, "Fruit development and ripening"),
    ("Harvesting", 12, "Ready for harvest"),
];

/// Last-resort cycle when nothing else is known
pub const FALLBACK_TOTAL_DAYS: i32 = 120;
const FALLBACK_STAGE_DAYS: [i32; 5] = [20, 40, 20, 30, 10];

/// Five proportional stages for a positive total
pub fn proportional_lifecycle(total_days: i32) -> CropLifecycle {
    CropLifecycle {
        stages: STAGE_PLAN
            .iter()
            .map(|&(name, divisor, description)| {
                LifecycleStage::new(name, total_days / divisor, description)
            })
            .collect(),
        total_days,
    }
}

/// Fixed 120-day cycle
pub fn fallback_lifecycle() -> CropLifecycle {
    CropLifecycle {
        stages: STAGE_PLAN
            .iter()
            .zip(FALLBACK_STAGE_DAYS)
            .map(|(&(name, _, description), days)| LifecycleStage::new(name, days, description))
            .collect(),
        total_days: FALLBACK_TOTAL_DAYS,
    }
}

/// Lifecycle from structured facts, else the heuristic chain
///
/// Facts without a usable total yield the unknown lifecycle; the heuristics
/// only run when no facts were extracted at all.
pub fn resolve_lifecycle(
    facts: Option<&ExtractedFacts>,
    description: &str,
    species_name: &str,
) -> CropLifecycle {
    match facts {
        Some(facts) => match facts.total_days.filter(|&d| d > 0) {
            Some(days) => proportional_lifecycle(days),
            None => {
                tracing::debug!(species = %species_name, "Extracted lifecycle has no usable total");
                CropLifecycle::unknown()
            }
        },
        None => inferred_lifecycle(description, species_name),
    }
}

/// Keyword inference, then crop table, then the 120-day fallback
fn inferred_lifecycle(description: &str, species_name: &str) -> CropLifecycle {
    let guess = infer_lifecycle(description);
    if guess.is_known() {
        tracing::debug!(label = guess.label, total_days = guess.total_days, "Lifecycle inferred from keywords");
        return proportional_lifecycle(guess.total_days);
    }

    if let Some(days) = crop_default_days(species_name) {
        tracing::debug!(species = %species_name, total_days = days, "Using crop default lifecycle");
        return proportional_lifecycle(days);
    }

    tracing::debug!(species = %species_name, "No lifecycle found, using 120-day fallback");
    fallback_lifecycle()
}
