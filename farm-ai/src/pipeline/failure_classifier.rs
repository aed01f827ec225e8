//! Failure classification
//!
//! Connectivity loss on the identification call degrades to the fixed
//! demonstration analysis. Everything else reaches the caller unchanged.

use super::mock_data::mock_analysis;
use crate::error::{AnalysisError, AnalysisResult, ServiceError, TransportError, TransportKind};
use crate::models::CropAnalysis;

/// Message fragments recognised as connectivity loss on untagged transport errors
const CONNECTIVITY_MARKERS: [&str; 3] = ["timeout", "unable to resolve host", "connection refused"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureDisposition {
    /// Report the error to the caller
    Propagate,
    /// Report success with the demonstration analysis
    SubstituteMock,
}

pub fn classify(error: &AnalysisError) -> FailureDisposition {
    match error {
        AnalysisError::Identification(ServiceError::Transport(transport))
            if is_connectivity_loss(transport) =>
        {
            FailureDisposition::SubstituteMock
        }
        _ => FailureDisposition::Propagate,
    }
}

fn is_connectivity_loss(error: &TransportError) -> bool {
    match error.kind {
        TransportKind::Timeout | TransportKind::HostUnresolved | TransportKind::ConnectionRefused => {
            true
        }
        TransportKind::Other => {
            let message = error.message.to_lowercase();
            CONNECTIVITY_MARKERS.iter().any(|marker| message.contains(marker))
        }
    }
}

/// Apply the classification to a pipeline outcome
pub fn resolve(outcome: AnalysisResult<CropAnalysis>) -> AnalysisResult<CropAnalysis> {
    match outcome {
        Ok(analysis) => Ok(analysis),
        Err(error) => match classify(&error) {
            FailureDisposition::SubstituteMock => {
                tracing::warn!(error = %error, "Connectivity lost, using demonstration analysis");
                Ok(mock_analysis())
            }
            FailureDisposition::Propagate => {
                tracing::info!(error = %error, "Analysis failed");
                Err(error)
            }
        },
    }
}
