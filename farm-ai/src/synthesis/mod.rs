//! Analysis synthesis
//!
//! Pure merging of identification, botanical, narrative and extraction
//! outputs into one `CropAnalysis`.

pub mod lifecycle;
pub mod plant_details;
pub mod synthesizer;

pub use synthesizer::{synthesize, SynthesisInput};
