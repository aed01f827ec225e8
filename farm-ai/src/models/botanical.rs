//! Botanical database model
//!
//! Wire types mirror the search and detail endpoints. `BotanicalRecord` is the
//! normalized detail record the synthesizer consumes.

use serde::{Deserialize, Deserializer, Serialize};

/// Search endpoint envelope
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<BotanicalSearchHit>,
}

/// One search result
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BotanicalSearchHit {
    pub id: i64,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub genus: Option<GenusRef>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub duration: Option<String>,
    #[serde(default)]
    pub edible_part: Option<Vec<String>>,
    #[serde(default)]
    pub vegetable: Option<bool>,
}

impl BotanicalSearchHit {
    pub fn genus_name(&self) -> Option<&str> {
        self.genus.as_ref()?.name.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GenusRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Detail endpoint envelope
#[derive(Debug, Clone, Deserialize)]
pub struct DetailResponse {
    pub data: PlantDetailWire,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlantDetailWire {
    pub id: i64,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    pub duration: Option<String>,
    #[serde(default)]
    pub edible_part: Option<Vec<String>>,
    #[serde(default)]
    pub vegetable: Option<bool>,
    #[serde(default)]
    pub main_species: Option<SpeciesWire>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesWire {
    #[serde(default)]
    pub growth: Option<GrowthParameters>,
}

/// Growth parameters of a detail record
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GrowthParameters {
    /// Light requirement, 1 (full shade) to 4 (full sun)
    #[serde(default)]
    pub light: Option<i32>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub soil_texture: Option<String>,
    #[serde(default)]
    pub atmospheric_humidity: Option<i32>,
    #[serde(default)]
    pub ph_minimum: Option<f64>,
    #[serde(default)]
    pub ph_maximum: Option<f64>,
    #[serde(default)]
    pub temperature_minimum: Option<f64>,
}

/// Lifespan classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeDuration {
    Annual,
    Perennial,
    Biennial,
    Unknown,
}

impl LifeDuration {
    /// Classify free-text duration ("annual", "Perennial", ...)
    pub fn classify(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return Self::Unknown;
        };
        let lower = text.to_lowercase();
        if lower.contains("annual") {
            Self::Annual
        } else if lower.contains("perennial") {
            Self::Perennial
        } else if lower.contains("biennial") {
            Self::Biennial
        } else {
            Self::Unknown
        }
    }
}

/// Selected botanical detail record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotanicalRecord {
    pub id: i64,
    pub scientific_name: Option<String>,
    pub common_name: Option<String>,
    pub family: Option<String>,
    pub duration: LifeDuration,
    pub growth: GrowthParameters,
    pub edible_parts: Vec<String>,
    pub vegetable: bool,
}

impl From<PlantDetailWire> for BotanicalRecord {
    fn from(wire: PlantDetailWire) -> Self {
        Self {
            id: wire.id,
            scientific_name: wire.scientific_name,
            common_name: wire.common_name,
            family: wire.family,
            duration: LifeDuration::classify(wire.duration.as_deref()),
            growth: wire
                .main_species
                .and_then(|species| species.growth)
                .unwrap_or_default(),
            edible_parts: wire.edible_part.unwrap_or_default(),
            vegetable: wire.vegetable.unwrap_or(false),
        }
    }
}

/// Accept a string or a list of strings (joined with ", ")
fn text_or_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Array(items)) => {
            let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    })
}

/// Accept a string or a number (rendered as text)
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
