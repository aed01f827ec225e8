//! Analysis pipeline
//!
//! `CropAnalyzer` runs one image through identification, botanical lookup,
//! narrative enrichment, extraction and synthesis. The failure classifier
//! decides which failures degrade to the demonstration analysis.
//! `AnalysisSession` adds retry over the last submitted image.

pub mod failure_classifier;
pub mod mock_data;
pub mod orchestrator;
pub mod session;

pub use failure_classifier::{classify, FailureDisposition};
pub use mock_data::mock_analysis;
pub use orchestrator::{AnalysisServices, CropAnalyzer};
pub use session::{AnalysisSession, LastSubmission};
