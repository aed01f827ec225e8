//! Demonstration analysis used when connectivity is lost

use crate::models::{
    AdditionalInfo, CropAnalysis, CropLifecycle, CropRequirements, Disease, DiseaseSeverity,
    LifecycleStage,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Fixed "Tomato / Early Blight" analysis
pub fn mock_analysis() -> CropAnalysis {
    CropAnalysis {
        crop_name: "Tomato".to_string(),
        confidence: 0.95,
        is_healthy: false,
        diseases: vec![Disease {
            name: "Early Blight".to_string(),
            severity: DiseaseSeverity::Medium,
            description: "A fungal disease that affects tomato plants, causing dark spots on leaves and stems.".to_string(),
            symptoms: strings(&[
                "Dark brown spots on lower leaves",
                "Yellowing of leaves",
                "Stem lesions",
                "Fruit rot in severe cases",
            ]),
            remedies: strings(&[
                "Remove infected leaves immediately",
                "Improve air circulation",
                "Apply fungicide",
                "Avoid overhead watering",
            ]),
        }],
        lifecycle: CropLifecycle {
            stages: vec![
                LifecycleStage::new("Seedling", 14, "Germination and early growth"),
                LifecycleStage::new("Vegetative", 30, "Leaf and stem development"),
                LifecycleStage::new("Flowering", 21, "Flower formation and pollination"),
                LifecycleStage::new("Fruiting", 45, "Fruit development and ripening"),
                LifecycleStage::new("Harvesting", 14, "Ready for harvest"),
            ],
            total_days: 124,
        },
        requirements: CropRequirements {
            sunlight: "Full sun (6-8 hours daily)".to_string(),
            water: "Regular watering, keep soil moist but not waterlogged".to_string(),
            soil_type: "Well-draining, rich loamy soil".to_string(),
            temperature: "70-85°F (21-29°C) during day, 60-70°F (16-21°C) at night".to_string(),
            ph_level: "6.0-6.8 (slightly acidic)".to_string(),
        },
        additional_info: AdditionalInfo {
            fertilizers: strings(&[
                "Balanced 10-10-10 fertilizer at planting",
                "High phosphorus fertilizer during flowering",
                "Calcium supplement to prevent blossom end rot",
            ]),
            ideal_climate: "Warm, sunny climate with moderate humidity".to_string(),
            harvesting_tips: strings(&[
                "Harvest when fruits are fully colored",
                "Pick regularly to encourage more fruit production",
                "Store at room temperature until fully ripe",
                "Refrigerate only after fully ripe",
            ]),
            pest_control: strings(&[
                "Use companion planting with marigolds",
                "Apply neem oil for aphid control",
                "Hand-pick hornworms",
                "Use floating row covers for young plants",
            ]),
        },
        ai_details: None,
        plant_info_sections: None,
        plant_details: None,
        is_generic: false,
    }
}
