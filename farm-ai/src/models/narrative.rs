//! Narrative text and its parsed sections

use serde::{Deserialize, Serialize};

/// Where a narrative came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NarrativeSource {
    /// Generative-text service (primary path)
    Generated,
    /// Encyclopedia summary (fallback path)
    Encyclopedia,
}

/// Free-form description of a species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub text: String,
    pub source: NarrativeSource,
}

/// Five named sections of a narrative, empty when absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeSections {
    pub lifecycle: String,
    pub care_requirements: String,
    pub ideal_climate: String,
    pub interesting_facts: String,
    pub summary: String,
}

impl NarrativeSections {
    pub fn is_empty(&self) -> bool {
        self.lifecycle.is_empty()
            && self.care_requirements.is_empty()
            && self.ideal_climate.is_empty()
            && self.interesting_facts.is_empty()
            && self.summary.is_empty()
    }
}
