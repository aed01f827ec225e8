//! farm-ai: crop image analysis pipeline
//!
//! Identifies a plant from a photo, enriches the identification with
//! botanical records and narrative text, and synthesizes one
//! [`CropAnalysis`](models::CropAnalysis).
//!
//! ```no_run
//! # async fn demo() -> farm_ai::AnalysisResult<()> {
//! use farm_ai::{AnalysisConfig, CropAnalyzer, ImageSource};
//!
//! let config = AnalysisConfig::load(None)?;
//! config.init_logging()?;
//! let analyzer = CropAnalyzer::from_config(&config)?;
//! let analysis = analyzer.analyze(&ImageSource::Path("leaf.jpg".into())).await?;
//! println!("{} ({:.0}%)", analysis.crop_name, analysis.confidence * 100.0);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod extraction;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod synthesis;

pub use config::AnalysisConfig;
pub use error::{AnalysisError, AnalysisResult, ServiceError, TransportError, TransportKind};
pub use models::CropAnalysis;
pub use pipeline::{AnalysisServices, AnalysisSession, CropAnalyzer};
pub use services::{ImagePayload, ImageSource};
