//! End-to-end pipeline tests over in-process fake services

mod helpers;

use farm_ai::models::{
    BotanicalRecord, BotanicalSearchHit, GrowthParameters, LifeDuration, NOT_AVAILABLE,
    UNKNOWN_TOTAL_DAYS,
};
use farm_ai::pipeline::mock_analysis;
use farm_ai::services::narrative_enricher::NO_DESCRIPTION;
use farm_ai::{
    AnalysisError, AnalysisSession, CropAnalyzer, ImageSource, ServiceError, TransportKind,
};
use helpers::{identification, transport, Fakes, Scripted};
use std::sync::Arc;

const LIMIT: u64 = 1024;

const NARRATIVE: &str = "**LIFECYCLE:**
Basil is an annual herb that completes its cycle in one season.
**CARE REQUIREMENTS:**
Full sun and moist soil.
**IDEAL CLIMATE:**
Warm and humid.
**INTERESTING FACTS:**
- Sacred in parts of India
- Related to mint
**SUMMARY:**
An aromatic culinary herb.";

const FACTS_JSON: &str = r#"```json
{
  "lifecycle": {"type": "Annual", "totalDays": 100},
  "requirements": {
    "sunlight": "Full sun",
    "water": "Keep soil moist",
    "soilType": "Loamy",
    "temperature": "20-30°C",
    "phLevel": "6.0-7.5"
  },
  "additionalInfo": {
    "fertilizers": ["Compost"],
    "idealClimate": "Warm",
    "harvestingTips": ["Pinch leaves from the top"],
    "pestControl": ["Neem oil"]
  }
}
```"#;

fn image() -> ImageSource {
    ImageSource::from_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3])
}

fn analyzer(fakes: &Fakes) -> CropAnalyzer {
    CropAnalyzer::new(fakes.services(), LIMIT)
}

fn basil_record() -> BotanicalRecord {
    BotanicalRecord {
        id: 7,
        scientific_name: Some("Ocimum basilicum".to_string()),
        common_name: Some("Basil".to_string()),
        family: Some("Lamiaceae".to_string()),
        duration: LifeDuration::Annual,
        growth: GrowthParameters {
            light: Some(4),
            ..Default::default()
        },
        edible_parts: vec!["leaves".to_string()],
        vegetable: false,
    }
}

#[tokio::test]
async fn test_not_a_plant_fails_without_mock() {
    let fakes = Fakes::with_identifier(|_| Ok(identification(false, &[("Rock", 0.2)])));

    let result = analyzer(&fakes).analyze(&image()).await;

    assert!(matches!(result, Err(AnalysisError::NotAPlant { .. })));
    assert_eq!(fakes.search.calls(), 0);
    assert_eq!(fakes.generator.calls(), 0);
}

#[tokio::test]
async fn test_no_candidates_fails_without_mock() {
    let fakes = Fakes::with_identifier(|_| Ok(identification(true, &[])));
    let result = analyzer(&fakes).analyze(&image()).await;
    assert!(matches!(result, Err(AnalysisError::NoCandidatesFound)));
}

#[tokio::test]
async fn test_connection_refused_message_yields_mock() {
    let fakes = Fakes::with_identifier(|_| {
        Err(transport(
            TransportKind::Other,
            "failed to connect to /10.0.2.2 (port 443): Connection refused",
        ))
    });

    let analysis = analyzer(&fakes).analyze(&image()).await.unwrap();

    assert_eq!(analysis, mock_analysis());
    assert_eq!(analysis.crop_name, "Tomato");
    assert_eq!(analysis.diseases[0].name, "Early Blight");
}

#[tokio::test]
async fn test_tagged_timeout_yields_mock() {
    let fakes = Fakes::with_identifier(|_| Err(transport(TransportKind::Timeout, "deadline elapsed")));
    let analysis = analyzer(&fakes).analyze(&image()).await.unwrap();
    assert_eq!(analysis.crop_name, "Tomato");
}

#[tokio::test]
async fn test_api_errors_propagate() {
    let fakes = Fakes::with_identifier(|_| Err(ServiceError::InvalidApiKey));
    let result = analyzer(&fakes).analyze(&image()).await;
    assert!(matches!(
        result,
        Err(AnalysisError::Identification(ServiceError::InvalidApiKey))
    ));

    let fakes = Fakes::with_identifier(|_| {
        Err(ServiceError::Api {
            status: 500,
            body: "internal".to_string(),
        })
    });
    let result = analyzer(&fakes).analyze(&image()).await;
    assert!(matches!(
        result,
        Err(AnalysisError::Identification(ServiceError::Api { status: 500, .. }))
    ));
}

#[tokio::test]
async fn test_invalid_images_never_reach_identifier() {
    let fakes = Fakes::with_identifier(|_| Ok(identification(true, &[("Basil", 0.9)])));
    let analyzer = analyzer(&fakes);

    let empty = analyzer.analyze(&ImageSource::from_bytes(Vec::new())).await;
    assert!(matches!(empty, Err(AnalysisError::EmptyImage)));

    let oversized = analyzer
        .analyze(&ImageSource::from_bytes(vec![1u8; LIMIT as usize + 1]))
        .await;
    assert!(matches!(oversized, Err(AnalysisError::ImageTooLarge { .. })));

    assert_eq!(fakes.identifier.calls(), 0);
}

#[tokio::test]
async fn test_full_enrichment() {
    let mut fakes = Fakes::with_identifier(|_| {
        Ok(identification(true, &[("Mint", 0.3), ("Basil", 0.91)]))
    });
    fakes.search = Scripted::new(|_| {
        Ok(vec![
            BotanicalSearchHit {
                id: 3,
                common_name: Some("Holy basil".to_string()),
                scientific_name: Some("Ocimum tenuiflorum".to_string()),
                ..Default::default()
            },
            BotanicalSearchHit {
                id: 7,
                common_name: Some("Basil".to_string()),
                scientific_name: Some("Ocimum basilicum".to_string()),
                ..Default::default()
            },
        ])
    });
    fakes.detail = Scripted::new(|_| Ok(basil_record()));
    fakes.generator = Scripted::new(|_| Ok(Some(NARRATIVE.to_string())));
    fakes.chat = Scripted::new(|_| Ok(Some(FACTS_JSON.to_string())));

    let analysis = analyzer(&fakes).analyze(&image()).await.unwrap();

    assert_eq!(analysis.crop_name, "Basil");
    assert!((analysis.confidence - 0.91).abs() < 1e-6);
    assert!(analysis.is_healthy);
    assert!(analysis.diseases.is_empty());
    assert_eq!(analysis.lifecycle.total_days, 100);
    assert_eq!(analysis.requirements.soil_type, "Loamy");
    assert_eq!(analysis.additional_info.pest_control, vec!["Neem oil".to_string()]);
    assert!(!analysis.is_generic);
    assert_eq!(analysis.ai_details.as_deref(), Some(NARRATIVE));

    let sections = analysis.plant_info_sections.unwrap();
    assert_eq!(sections.summary, "An aromatic culinary herb.");
    assert_eq!(sections.ideal_climate, "Warm and humid.");

    let details = analysis.plant_details.unwrap();
    assert_eq!(details.scientific_name, "Ocimum basilicum");
    assert_eq!(details.care_requirements.sunlight, "Full sun");
    assert_eq!(details.interesting_facts.len(), 2);
    assert_eq!(details.description, "An aromatic culinary herb.");

    // Exact match beats the earlier substring hit
    assert_eq!(fakes.detail.inputs(), vec!["7".to_string()]);
    assert_eq!(fakes.search.inputs(), vec!["Basil".to_string()]);
    assert!(fakes.generator.inputs()[0].contains("'Basil'"));
    assert!(fakes.chat.inputs()[0].ends_with(&format!("Text: {}", NARRATIVE)));
    assert_eq!(fakes.encyclopedia.calls(), 0);
}

#[tokio::test]
async fn test_encyclopedia_fallback_with_heuristics() {
    let mut fakes = Fakes::with_identifier(|_| Ok(identification(true, &[("Solanum lycopersicum", 0.8)])));
    fakes.generator = Scripted::new(|_| Ok(Some("   ".to_string())));
    fakes.encyclopedia = Scripted::new(|_| {
        Ok(Some(
            "The tomato is a perennial grown as an annual. It needs full sun and loamy soil."
                .to_string(),
        ))
    });
    fakes.chat = Scripted::new(|_| Ok(Some("I cannot help with that.".to_string())));

    let analysis = analyzer(&fakes).analyze(&image()).await.unwrap();

    assert_eq!(fakes.encyclopedia.inputs(), vec!["Solanum_lycopersicum".to_string()]);
    assert_eq!(analysis.lifecycle.total_days, 365);
    assert_eq!(analysis.requirements.sunlight, "Full sun");
    assert_eq!(analysis.requirements.soil_type, "Loamy");
    assert_eq!(analysis.requirements.water, NOT_AVAILABLE);
    assert!(analysis.is_generic);
    // Only generated narratives carry section markers
    assert!(analysis.plant_info_sections.is_none());
    assert!(analysis.plant_details.is_none());
}

#[tokio::test]
async fn test_extracted_facts_without_total_mark_lifecycle_unknown() {
    let mut fakes = Fakes::with_identifier(|_| Ok(identification(true, &[("Basil", 0.9)])));
    fakes.generator = Scripted::new(|_| Ok(Some(NARRATIVE.to_string())));
    fakes.chat = Scripted::new(|_| {
        Ok(Some(FACTS_JSON.replace("\"totalDays\": 100", "\"totalDays\": 0")))
    });

    let analysis = analyzer(&fakes).analyze(&image()).await.unwrap();

    assert_eq!(analysis.lifecycle.total_days, UNKNOWN_TOTAL_DAYS);
    assert!(analysis.lifecycle.stages.is_empty());
    assert_eq!(analysis.requirements.soil_type, "Loamy");
    assert_eq!(analysis.additional_info.fertilizers, vec!["Compost".to_string()]);
    assert!(analysis.is_generic);
}

#[tokio::test]
async fn test_all_enrichment_failures_absorbed() {
    let fakes = Fakes::with_identifier(|_| Ok(identification(true, &[("Cherry Tomato", 0.66)])));

    let analysis = analyzer(&fakes).analyze(&image()).await.unwrap();

    assert_eq!(analysis.ai_details.as_deref(), Some(NO_DESCRIPTION));
    assert!(analysis.plant_info_sections.is_none());
    assert!(analysis.plant_details.is_none());
    assert_eq!(analysis.lifecycle.total_days, 120);
    assert_eq!(analysis.lifecycle.stages.len(), 5);
    assert_eq!(analysis.requirements.sunlight, NOT_AVAILABLE);
    assert!(analysis.is_generic);

    assert_eq!(fakes.search.calls(), 1);
    assert_eq!(fakes.detail.calls(), 0);
    assert_eq!(fakes.generator.calls(), 1);
    assert_eq!(fakes.encyclopedia.calls(), 1);
    // No description means nothing to extract from
    assert_eq!(fakes.chat.calls(), 0);
}

#[tokio::test]
async fn test_detail_fetch_failure_absorbed() {
    let mut fakes = Fakes::with_identifier(|_| Ok(identification(true, &[("Basil", 0.9)])));
    fakes.search = Scripted::new(|_| {
        Ok(vec![BotanicalSearchHit {
            id: 11,
            common_name: Some("Basil".to_string()),
            ..Default::default()
        }])
    });
    fakes.generator = Scripted::new(|_| Ok(Some(NARRATIVE.to_string())));

    let analysis = analyzer(&fakes).analyze(&image()).await.unwrap();

    assert_eq!(fakes.detail.inputs(), vec!["11".to_string()]);
    assert!(analysis.plant_details.is_none());
    assert_eq!(analysis.lifecycle.total_days, 365);
    assert_eq!(analysis.requirements.water, "Keep soil moist");
}

#[tokio::test]
async fn test_session_retry_reruns_stored_image() {
    let fakes = Fakes::with_identifier(|_| Err(ServiceError::InvalidApiKey));
    let session = AnalysisSession::new(Arc::new(analyzer(&fakes)));

    assert!(session.retry().await.is_none());

    let first = session.analyze(image()).await;
    assert!(first.is_err());
    assert_eq!(session.last_submission().await.unwrap().image.as_ref(), &image());

    let retried = session.retry().await.unwrap();
    assert!(matches!(
        retried,
        Err(AnalysisError::Identification(ServiceError::InvalidApiKey))
    ));
    assert_eq!(fakes.identifier.calls(), 2);

    session.reset().await;
    assert!(session.retry().await.is_none());
    assert_eq!(fakes.identifier.calls(), 2);
}
