//! Keyword heuristics over free description text
//!
//! Last-resort inference used when no structured extraction is available.
//! Every function is a pure mapping of text to one inferred field.

use crate::models::{AdditionalInfo, CropRequirements, NOT_AVAILABLE, UNKNOWN_TOTAL_DAYS};

/// Placeholder pointing the reader at the description text
pub const SEE_DESCRIPTION: &str = "See description";

/// Default cycle lengths for common crops, matched in order
pub const CROP_CYCLE_DAYS: &[(&str, i32)] = &[
    ("tomato", 120),
    ("wheat", 120),
    ("rice", 150),
    ("maize", 120),
    ("corn", 120),
    ("potato", 110),
    ("soybean", 100),
    ("cucumber", 60),
    ("carrot", 75),
    ("onion", 120),
    ("lettuce", 65),
];

/// Lifecycle class inferred from text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleGuess {
    pub label: &'static str,
    /// `UNKNOWN_TOTAL_DAYS` when no keyword matched
    pub total_days: i32,
}

impl LifecycleGuess {
    pub fn is_known(&self) -> bool {
        self.total_days > 0
    }
}

pub fn infer_lifecycle(text: &str) -> LifecycleGuess {
    let lower = text.to_lowercase();
    let (label, total_days) = if lower.contains("annual") {
        ("Annual", 365)
    } else if lower.contains("biennial") {
        ("Biennial", 730)
    } else if lower.contains("perennial") {
        ("Perennial", 1095)
    } else if lower.contains("germination") && lower.contains("harvest") {
        ("Full cycle", 120)
    } else {
        (NOT_AVAILABLE, UNKNOWN_TOTAL_DAYS)
    };
    LifecycleGuess { label, total_days }
}

/// Default cycle length for a species name via `CROP_CYCLE_DAYS`
pub fn crop_default_days(species_name: &str) -> Option<i32> {
    let lower = species_name.to_lowercase();
    CROP_CYCLE_DAYS
        .iter()
        .find(|(crop, _)| lower.contains(crop))
        .map(|&(_, days)| days)
}

pub fn infer_requirements(text: &str) -> CropRequirements {
    let lower = text.to_lowercase();

    let sunlight = first_keyword(
        &lower,
        &[
            ("full sun", "Full sun"),
            ("partial shade", "Partial shade"),
            ("shade", "Shade"),
        ],
    );
    let water = first_keyword(
        &lower,
        &[
            ("moist soil", "Keep soil moist"),
            ("dry soil", "Allow soil to dry between waterings"),
            ("water regularly", "Water regularly"),
        ],
    );
    let soil_type = first_keyword(
        &lower,
        &[
            ("loamy", "Loamy"),
            ("sandy", "Sandy"),
            ("clay", "Clay"),
            ("well-drained", "Well-drained"),
        ],
    );
    let temperature = mention(lower.contains("temperature"));
    let ph_level = mention(mentions_ph(&lower));

    CropRequirements {
        sunlight,
        water,
        soil_type,
        temperature,
        ph_level,
    }
}

pub fn infer_additional_info(text: &str) -> AdditionalInfo {
    let lower = text.to_lowercase();
    let placeholder_list = |keyword: &str| {
        if lower.contains(keyword) {
            vec![SEE_DESCRIPTION.to_string()]
        } else {
            Vec::new()
        }
    };

    AdditionalInfo {
        fertilizers: placeholder_list("fertilizer"),
        ideal_climate: if lower.contains("climate") {
            SEE_DESCRIPTION.to_string()
        } else {
            String::new()
        },
        harvesting_tips: placeholder_list("harvest"),
        pest_control: placeholder_list("pest"),
    }
}

fn first_keyword(lower: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(NOT_AVAILABLE, |&(_, value)| value)
        .to_string()
}

fn mention(found: bool) -> String {
    let value = if found { SEE_DESCRIPTION } else { NOT_AVAILABLE };
    value.to_string()
}

/// "ph" as a word ("pH 6.5", "pH-neutral", "ph6"), not inside "phosphorus"
///
/// Stricter than a substring check, which would flag any "ph" inside a word.
fn mentions_ph(lower: &str) -> bool {
    lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| {
            token
                .strip_prefix("ph")
                .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_digit()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_keywords() {
        assert_eq!(infer_lifecycle("A hardy PERENNIAL shrub").total_days, 1095);
        assert_eq!(infer_lifecycle("Usually biennial").total_days, 730);
        assert_eq!(infer_lifecycle("An annual herb").label, "Annual");
        assert_eq!(
            infer_lifecycle("From germination to harvest takes months").total_days,
            120
        );
    }

    #[test]
    fn test_lifecycle_annual_wins_over_perennial() {
        let guess = infer_lifecycle("Grown as an annual, though perennial in the tropics");
        assert_eq!(guess.total_days, 365);
    }

    #[test]
    fn test_lifecycle_unknown() {
        let guess = infer_lifecycle("A green plant with broad leaves. Harvest in June.");
        assert_eq!(guess.total_days, UNKNOWN_TOTAL_DAYS);
        assert_eq!(guess.label, NOT_AVAILABLE);
        assert!(!guess.is_known());
    }

    #[test]
    fn test_crop_default_days() {
        assert_eq!(crop_default_days("Cherry Tomato"), Some(120));
        assert_eq!(crop_default_days("Sweet CORN"), Some(120));
        assert_eq!(crop_default_days("Romaine lettuce"), Some(65));
        assert_eq!(crop_default_days("Basil"), None);
    }

    #[test]
    fn test_crop_default_first_entry_wins() {
        // tomato is listed before potato
        assert_eq!(crop_default_days("Potato tomato hybrid"), Some(120));
    }

    #[test]
    fn test_sunlight_priority() {
        assert_eq!(infer_requirements("full sun or partial shade").sunlight, "Full sun");
        assert_eq!(infer_requirements("tolerates partial shade").sunlight, "Partial shade");
        assert_eq!(infer_requirements("grows in deep shade").sunlight, "Shade");
        assert_eq!(infer_requirements("grows anywhere").sunlight, NOT_AVAILABLE);
    }

    #[test]
    fn test_water_and_soil() {
        let requirements = infer_requirements("Prefers moist soil that is sandy and well-drained.");
        assert_eq!(requirements.water, "Keep soil moist");
        assert_eq!(requirements.soil_type, "Sandy");

        let requirements = infer_requirements("Tolerates dry soil and clay.");
        assert_eq!(requirements.water, "Allow soil to dry between waterings");
        assert_eq!(requirements.soil_type, "Clay");

        let requirements = infer_requirements("Water regularly.");
        assert_eq!(requirements.water, "Water regularly");
        assert_eq!(requirements.soil_type, NOT_AVAILABLE);
    }

    #[test]
    fn test_temperature_and_ph_mentions() {
        let requirements = infer_requirements("Optimal temperature is mild; soil pH 6.5.");
        assert_eq!(requirements.temperature, SEE_DESCRIPTION);
        assert_eq!(requirements.ph_level, SEE_DESCRIPTION);

        // Word match, not a bare substring: "phosphorus" alone does not count as a pH mention
        let requirements = infer_requirements("Rich in phosphorus.");
        assert_eq!(requirements.temperature, NOT_AVAILABLE);
        assert_eq!(requirements.ph_level, NOT_AVAILABLE);

        assert_eq!(infer_requirements("pH-neutral soil").ph_level, SEE_DESCRIPTION);
    }

    #[test]
    fn test_additional_info() {
        let info = infer_additional_info("Use fertilizer. Temperate climate. Watch for pests.");
        assert_eq!(info.fertilizers, vec![SEE_DESCRIPTION.to_string()]);
        assert_eq!(info.ideal_climate, SEE_DESCRIPTION);
        assert!(info.harvesting_tips.is_empty());
        assert_eq!(info.pest_control.len(), 1);

        let info = infer_additional_info("Nothing useful here");
        assert!(info.fertilizers.is_empty());
        assert!(info.ideal_climate.is_empty());
    }
}
