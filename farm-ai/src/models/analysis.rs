//! Unified crop analysis result

use serde::{Deserialize, Serialize};

use super::narrative::NarrativeSections;

/// "Could not determine" sentinel for free-text fields
pub const NOT_AVAILABLE: &str = "Not available";

/// "Could not determine" sentinel for `CropLifecycle::total_days`
pub const UNKNOWN_TOTAL_DAYS: i32 = -1;

/// Result of one analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropAnalysis {
    pub crop_name: String,
    pub confidence: f32,
    pub is_healthy: bool,
    /// Empty unless a health assessment produced entries
    pub diseases: Vec<Disease>,
    pub lifecycle: CropLifecycle,
    pub requirements: CropRequirements,
    pub additional_info: AdditionalInfo,
    /// Raw narrative text shown to the user
    pub ai_details: Option<String>,
    pub plant_info_sections: Option<NarrativeSections>,
    /// Structured details derived from the botanical record
    pub plant_details: Option<PlantDetails>,
    /// True when any core field holds its "unknown" sentinel
    pub is_generic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub name: String,
    pub severity: DiseaseSeverity,
    pub description: String,
    pub symptoms: Vec<String>,
    pub remedies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiseaseSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropLifecycle {
    pub stages: Vec<LifecycleStage>,
    pub total_days: i32,
}

impl CropLifecycle {
    /// Lifecycle whose length could not be determined
    pub fn unknown() -> Self {
        Self {
            stages: Vec::new(),
            total_days: UNKNOWN_TOTAL_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleStage {
    pub name: String,
    /// Duration in days
    pub duration: i32,
    pub description: String,
}

impl LifecycleStage {
    pub fn new(name: &str, duration: i32, description: &str) -> Self {
        Self {
            name: name.to_string(),
            duration,
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRequirements {
    pub sunlight: String,
    pub water: String,
    pub soil_type: String,
    pub temperature: String,
    pub ph_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    pub fertilizers: Vec<String>,
    /// Empty string when unknown
    pub ideal_climate: String,
    pub harvesting_tips: Vec<String>,
    pub pest_control: Vec<String>,
}

/// Structured plant details derived from the botanical record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantDetails {
    pub common_names: Vec<String>,
    pub scientific_name: String,
    pub family: String,
    pub growth_cycle: GrowthCycle,
    pub care_requirements: CareRequirements,
    pub growing_tips: Vec<String>,
    pub interesting_facts: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthCycle {
    /// Annual, Perennial, Biennial or empty
    pub cycle_type: String,
    pub total_days: i32,
    pub stages: Vec<LifecycleStage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareRequirements {
    pub sunlight: String,
    pub water: String,
    pub soil_type: String,
    pub temperature: String,
    pub ph_level: String,
    pub humidity: String,
}

/// Whether any core field holds its "unknown" sentinel
pub fn has_unknown_fields(
    lifecycle: &CropLifecycle,
    requirements: &CropRequirements,
    additional_info: &AdditionalInfo,
) -> bool {
    lifecycle.total_days == UNKNOWN_TOTAL_DAYS
        || requirements.sunlight == NOT_AVAILABLE
        || requirements.water == NOT_AVAILABLE
        || requirements.soil_type == NOT_AVAILABLE
        || requirements.temperature == NOT_AVAILABLE
        || requirements.ph_level == NOT_AVAILABLE
        || additional_info.fertilizers.is_empty()
        || additional_info.ideal_climate.is_empty()
        || additional_info.harvesting_tips.is_empty()
        || additional_info.pest_control.is_empty()
}
