//! Text extraction
//!
//! - `sections`: split a narrative on its five literal section markers
//! - `heuristics`: keyword inference of lifecycle, requirements and tips
//! - `structured`: schema-validated JSON extraction via chat completion

pub mod heuristics;
pub mod sections;
pub mod structured;

pub use sections::split_sections;
pub use structured::{ExtractedFacts, FactsExtractor};
