//! # Farm Common Library
//!
//! Shared code for the farm crop-analysis crates:
//! - Error type
//! - Configuration file discovery and API key resolution
//! - Logging initialisation

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
