//! Structured plant details from a botanical record
//!
//! Combines the selected botanical record with the identification
//! candidate's detail sub-record. Purely informational; never feeds the
//! core analysis fields.

use super::lifecycle::proportional_lifecycle;
use crate::models::{
    BotanicalRecord, CandidateDetails, CareRequirements, GrowthCycle, LifeDuration,
    NarrativeSections, PlantDetails,
};

const DEFAULT_SUNLIGHT: &str = "Full sun (6-8 hours daily)";
const DEFAULT_WATERING: &str = "Regular watering";
const DEFAULT_SOIL: &str = "Well-draining soil";
const DEFAULT_PH: &str = "6.0-7.0 (neutral to slightly acidic)";
const DEFAULT_TEMPERATURE: &str = "70-85°F (21-29°C)";

pub fn derive_plant_details(
    record: &BotanicalRecord,
    candidate: Option<&CandidateDetails>,
    sections: Option<&NarrativeSections>,
) -> PlantDetails {
    let harvest_season: &[String] = candidate
        .and_then(|c| c.harvest_season.as_deref())
        .unwrap_or_default();
    let edible_parts: &[String] = if record.edible_parts.is_empty() {
        candidate
            .and_then(|c| c.edible_parts.as_deref())
            .unwrap_or_default()
    } else {
        &record.edible_parts
    };

    let mut growing_tips = fertilizer_tips(record);
    growing_tips.extend(pest_tips(record));
    growing_tips.extend(harvest_tips(edible_parts, harvest_season));

    PlantDetails {
        common_names: common_names(record, candidate),
        scientific_name: record
            .scientific_name
            .clone()
            .or_else(|| candidate.and_then(|c| c.scientific_name.clone()))
            .unwrap_or_default(),
        family: record
            .family
            .clone()
            .or_else(|| candidate.and_then(|c| c.taxonomy.as_ref()?.family.clone()))
            .unwrap_or_default(),
        growth_cycle: growth_cycle(record.duration, harvest_season),
        care_requirements: care_requirements(record, candidate),
        growing_tips,
        interesting_facts: sections
            .map(|s| fact_lines(&s.interesting_facts))
            .unwrap_or_default(),
        description: sections
            .map(|s| s.summary.clone())
            .filter(|summary| !summary.is_empty())
            .or_else(|| candidate.and_then(|c| Some(c.wiki_description.as_ref()?.value.clone())))
            .unwrap_or_default(),
    }
}

/// Record name first, then candidate names, without case-insensitive repeats
fn common_names(record: &BotanicalRecord, candidate: Option<&CandidateDetails>) -> Vec<String> {
    let candidate_names = candidate
        .and_then(|c| c.common_names.as_deref())
        .unwrap_or_default();

    let mut names: Vec<String> = Vec::new();
    for name in record.common_name.iter().chain(candidate_names) {
        let name = name.trim();
        if !name.is_empty() && !names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            names.push(name.to_string());
        }
    }
    names
}

fn growth_cycle(duration: LifeDuration, harvest_season: &[String]) -> GrowthCycle {
    let (cycle_type, total_days) = match duration {
        LifeDuration::Annual => ("Annual", 365),
        LifeDuration::Perennial => ("Perennial", 730),
        LifeDuration::Biennial => ("Biennial", 730),
        LifeDuration::Unknown if !harvest_season.is_empty() => {
            ("Seasonal", season_days(harvest_season))
        }
        LifeDuration::Unknown => ("", 120),
    };

    let lifecycle = proportional_lifecycle(total_days);
    GrowthCycle {
        cycle_type: cycle_type.to_string(),
        total_days: lifecycle.total_days,
        stages: lifecycle.stages,
    }
}

fn season_days(harvest_season: &[String]) -> i32 {
    if season_mentions(harvest_season, &["spring"]) {
        90
    } else if season_mentions(harvest_season, &["summer"]) {
        120
    } else if season_mentions(harvest_season, &["fall", "autumn"]) {
        150
    } else if season_mentions(harvest_season, &["winter"]) {
        180
    } else {
        120
    }
}

fn season_mentions(harvest_season: &[String], words: &[&str]) -> bool {
    harvest_season
        .iter()
        .map(|s| s.to_lowercase())
        .any(|s| words.iter().any(|w| s.contains(w)))
}

fn care_requirements(record: &BotanicalRecord, candidate: Option<&CandidateDetails>) -> CareRequirements {
    let growth = &record.growth;

    let sunlight = match growth.light {
        Some(1) => "Full shade".to_string(),
        Some(2) => "Light shade".to_string(),
        Some(3) => "Partial shade".to_string(),
        Some(4) => "Full sun".to_string(),
        Some(_) => DEFAULT_SUNLIGHT.to_string(),
        None => candidate
            .and_then(|c| c.sunlight.as_ref())
            .filter(|tags| !tags.is_empty())
            .map(|tags| tags.join(", "))
            .unwrap_or_else(|| DEFAULT_SUNLIGHT.to_string()),
    };

    let water = match candidate.and_then(|c| c.watering.as_ref()) {
        Some(w) => match (w.min, w.max) {
            (Some(min), Some(max)) => format!("Water every {}-{} days", min, max),
            (Some(min), None) => format!("Water every {}+ days", min),
            (None, Some(max)) => format!("Water every {} days or less", max),
            (None, None) => DEFAULT_WATERING.to_string(),
        },
        None => DEFAULT_WATERING.to_string(),
    };

    let soil_type = growth
        .soil_texture
        .clone()
        .or_else(|| candidate.and_then(|c| c.care.as_ref()?.soil.clone()))
        .unwrap_or_else(|| DEFAULT_SOIL.to_string());

    let ph_level = match (growth.ph_minimum, growth.ph_maximum) {
        (Some(min), Some(max)) => format!("{}-{}", decimal(min), decimal(max)),
        (Some(min), None) => format!("{}+", decimal(min)),
        (None, Some(max)) => format!("Up to {}", decimal(max)),
        (None, None) => DEFAULT_PH.to_string(),
    };

    let temperature = growth
        .temperature_minimum
        .map(|t| format!("Minimum {}°C, optimal 20-30°C", decimal(t)))
        .unwrap_or_else(|| DEFAULT_TEMPERATURE.to_string());

    let humidity = growth
        .atmospheric_humidity
        .map(|h| format!("Atmospheric humidity {}/10", h))
        .unwrap_or_default();

    CareRequirements {
        sunlight,
        water,
        soil_type,
        temperature,
        ph_level,
        humidity,
    }
}

fn family_is(record: &BotanicalRecord, family: &str) -> bool {
    record
        .family
        .as_deref()
        .is_some_and(|f| f.to_lowercase().contains(family))
}

fn fertilizer_tips(record: &BotanicalRecord) -> Vec<String> {
    let tips: &[&str] = if family_is(record, "brassicaceae") {
        &["Nitrogen-rich fertilizer", "Balanced fertilizer", "Organic compost"]
    } else if family_is(record, "solanaceae") {
        &["Balanced 10-10-10 fertilizer", "High phosphorus fertilizer", "Calcium supplement"]
    } else if record.vegetable {
        &["Balanced vegetable fertilizer", "Organic compost", "Fish emulsion"]
    } else {
        &["Balanced fertilizer", "Organic compost"]
    };
    tips.iter().map(|t| t.to_string()).collect()
}

fn pest_tips(record: &BotanicalRecord) -> Vec<String> {
    let tips: &[&str] = if family_is(record, "brassicaceae") {
        &["Use floating row covers", "Hand-pick caterpillars", "Apply neem oil"]
    } else if family_is(record, "solanaceae") {
        &["Companion planting with marigolds", "Hand-pick hornworms", "Apply neem oil"]
    } else {
        &["Regular monitoring", "Natural pest control methods"]
    };
    tips.iter().map(|t| t.to_string()).collect()
}

fn harvest_tips(edible_parts: &[String], harvest_season: &[String]) -> Vec<String> {
    let mut tips = Vec::new();
    if !edible_parts.is_empty() {
        tips.push(format!("Harvest {} when ready", edible_parts.join(", ")));
    }
    if !harvest_season.is_empty() {
        tips.push(format!("Best harvested during: {}", harvest_season.join(", ")));
    }
    if tips.is_empty() {
        tips.push("Harvest when ready".to_string());
    }
    tips
}

/// Non-empty lines with list bullets removed
fn fact_lines(section: &str) -> Vec<String> {
    section
        .lines()
        .map(|line| line.trim().trim_start_matches(['-', '*', '•']).trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Keep one decimal place on whole numbers ("6.0", "6.5")
fn decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
