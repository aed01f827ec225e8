//! Error types for farm-ai
//!
//! Three layers:
//! - [`TransportError`]: connectivity failure tagged with a [`TransportKind`] at the HTTP layer
//! - [`ServiceError`]: any failure of a single remote service call
//! - [`AnalysisError`]: the only error an `analyze` caller ever observes

use thiserror::Error;

/// Connectivity category of a transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Connect or request deadline elapsed
    Timeout,
    /// DNS resolution failed
    HostUnresolved,
    /// Remote end refused the TCP connection
    ConnectionRefused,
    /// Any other transport failure
    Other,
}

/// Transport-level failure with its connectivity category
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Remote service client errors
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Transport(#[from] TransportError),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Errors surfaced to the caller of an analysis
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Zero-byte image payload
    #[error("Image file is empty. Please select a valid image.")]
    EmptyImage,

    /// Image payload over the configured limit
    #[error("Image file is too large ({size} bytes). Please select a smaller image (max {limit} bytes).")]
    ImageTooLarge { size: u64, limit: u64 },

    /// Image reference could not be read
    #[error("Image could not be read: {0}")]
    ImageUnreadable(String),

    /// Identification service says the image is not a plant
    #[error("The uploaded image doesn't appear to be a plant. Please try with a clearer image of a plant.")]
    NotAPlant { probability: f64 },

    /// Identification service returned no candidates
    #[error("No plant could be identified in the image. Please try with a clearer image of a plant.")]
    NoCandidatesFound,

    /// Identification service call failed
    #[error("Plant identification failed: {0}")]
    Identification(#[from] ServiceError),

    /// Client construction or configuration failure
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<farm_common::Error> for AnalysisError {
    fn from(err: farm_common::Error) -> Self {
        AnalysisError::Configuration(err.to_string())
    }
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
