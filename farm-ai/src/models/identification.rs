//! Plant identification service response model

use serde::{Deserialize, Serialize};

/// Identification response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdentificationResponse {
    #[serde(default)]
    pub id: Option<i64>,
    pub is_plant: bool,
    #[serde(default)]
    pub is_plant_probability: f64,
    #[serde(default)]
    pub suggestions: Option<Vec<IdentificationCandidate>>,
}

impl IdentificationResponse {
    /// Highest-probability candidate; ties keep the earliest in list order
    pub fn best_candidate(&self) -> Option<&IdentificationCandidate> {
        self.suggestions
            .as_deref()?
            .iter()
            .fold(None, |best: Option<&IdentificationCandidate>, candidate| match best {
                Some(current) if candidate.probability <= current.probability => Some(current),
                Some(current) if candidate.probability.is_nan() => Some(current),
                _ => Some(candidate),
            })
    }
}

/// Ranked species guess
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IdentificationCandidate {
    /// Species display name
    #[serde(rename = "plant_name")]
    pub name: String,
    /// Confidence in [0, 1]
    pub probability: f64,
    #[serde(default)]
    pub plant_details: Option<CandidateDetails>,
}

/// Extended botanical detail attached to a candidate
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CandidateDetails {
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub common_names: Option<Vec<String>>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub wiki_description: Option<WikiDescription>,
    #[serde(default)]
    pub taxonomy: Option<Taxonomy>,
    #[serde(default)]
    pub edible_parts: Option<Vec<String>>,
    #[serde(default)]
    pub watering: Option<Watering>,
    #[serde(default)]
    pub propagation_methods: Option<Vec<String>>,
    #[serde(default)]
    pub sunlight: Option<Vec<String>>,
    #[serde(default)]
    pub pruning_month: Option<Vec<String>>,
    #[serde(default)]
    pub harvest_season: Option<Vec<String>>,
    #[serde(default)]
    pub care: Option<Care>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WikiDescription {
    pub value: String,
    #[serde(default)]
    pub citation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub genus: Option<String>,
}

/// Watering interval range in days
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Watering {
    #[serde(default)]
    pub min: Option<i32>,
    #[serde(default)]
    pub max: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Care {
    #[serde(default)]
    pub pruning: Option<String>,
    #[serde(default)]
    pub soil: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, probability: f64) -> IdentificationCandidate {
        IdentificationCandidate {
            name: name.to_string(),
            probability,
            plant_details: None,
        }
    }

    fn response(suggestions: Option<Vec<IdentificationCandidate>>) -> IdentificationResponse {
        IdentificationResponse {
            id: None,
            is_plant: true,
            is_plant_probability: 0.99,
            suggestions,
        }
    }

    #[test]
    fn test_best_candidate_is_max_probability() {
        let r = response(Some(vec![
            candidate("Basil", 0.2),
            candidate("Tomato", 0.7),
            candidate("Pepper", 0.1),
        ]));
        assert_eq!(r.best_candidate().unwrap().name, "Tomato");
    }

    #[test]
    fn test_best_candidate_tie_keeps_first() {
        let r = response(Some(vec![candidate("First", 0.5), candidate("Second", 0.5)]));
        assert_eq!(r.best_candidate().unwrap().name, "First");
    }

    #[test]
    fn test_best_candidate_none_for_empty_or_missing() {
        assert!(response(Some(vec![])).best_candidate().is_none());
        assert!(response(None).best_candidate().is_none());
    }

    #[test]
    fn test_deserialize_with_details() {
        let json = r#"{
            "id": 42,
            "is_plant": true,
            "is_plant_probability": 0.98,
            "suggestions": [{
                "id": 1,
                "plant_name": "Solanum lycopersicum",
                "probability": 0.91,
                "confirmed": false,
                "plant_details": {
                    "scientific_name": "Solanum lycopersicum",
                    "common_names": ["tomato", "garden tomato"],
                    "watering": {"min": 2, "max": 3},
                    "sunlight": ["full sun"],
                    "harvest_season": null,
                    "taxonomy": {"family": "Solanaceae", "genus": "Solanum"}
                }
            }]
        }"#;

        let r: IdentificationResponse = serde_json::from_str(json).unwrap();
        let best = r.best_candidate().unwrap();
        let details = best.plant_details.as_ref().unwrap();
        assert_eq!(best.name, "Solanum lycopersicum");
        assert_eq!(details.watering.as_ref().unwrap().max, Some(3));
        assert!(details.harvest_season.is_none());
        assert_eq!(
            details.taxonomy.as_ref().unwrap().family.as_deref(),
            Some("Solanaceae")
        );
    }
}
