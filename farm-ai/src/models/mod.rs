//! Data models for the crop analysis pipeline
//!
//! - `identification`: plant identification service responses
//! - `botanical`: botanical database search hits and detail records
//! - `narrative`: narrative text and its parsed sections
//! - `analysis`: the unified `CropAnalysis` result

pub mod analysis;
pub mod botanical;
pub mod identification;
pub mod narrative;

pub use analysis::{
    AdditionalInfo, CareRequirements, CropAnalysis, CropLifecycle, CropRequirements, Disease,
    DiseaseSeverity, GrowthCycle, LifecycleStage, PlantDetails, has_unknown_fields, NOT_AVAILABLE,
    UNKNOWN_TOTAL_DAYS,
};
pub use botanical::{BotanicalRecord, BotanicalSearchHit, GrowthParameters, LifeDuration};
pub use identification::{CandidateDetails, IdentificationCandidate, IdentificationResponse};
pub use narrative::{Narrative, NarrativeSections, NarrativeSource};
