//! Retry-capable analysis session
//!
//! Remembers the last submitted image so a failed request can be re-run
//! unchanged. Nothing else carries over between analyses.

use super::orchestrator::CropAnalyzer;
use crate::error::AnalysisResult;
use crate::models::CropAnalysis;
use crate::services::ImageSource;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Last image handed to `analyze`
#[derive(Debug, Clone)]
pub struct LastSubmission {
    pub image: Arc<ImageSource>,
    pub submitted_at: DateTime<Utc>,
}

pub struct AnalysisSession {
    analyzer: Arc<CropAnalyzer>,
    last: RwLock<Option<LastSubmission>>,
}

impl AnalysisSession {
    pub fn new(analyzer: Arc<CropAnalyzer>) -> Self {
        Self {
            analyzer,
            last: RwLock::new(None),
        }
    }

    /// Record the image, then analyze it
    pub async fn analyze(&self, image: ImageSource) -> AnalysisResult<CropAnalysis> {
        let image = Arc::new(image);
        *self.last.write().await = Some(LastSubmission {
            image: Arc::clone(&image),
            submitted_at: Utc::now(),
        });
        self.analyzer.analyze(&image).await
    }

    /// Re-run the pipeline on the last submitted image
    ///
    /// `None` when nothing has been submitted since creation or `reset`.
    pub async fn retry(&self) -> Option<AnalysisResult<CropAnalysis>> {
        let last = self.last.read().await.clone()?;
        tracing::info!(submitted_at = %last.submitted_at, "Retrying analysis");
        Some(self.analyzer.analyze(&last.image).await)
    }

    pub async fn last_submission(&self) -> Option<LastSubmission> {
        self.last.read().await.clone()
    }

    /// Forget the last submitted image
    pub async fn reset(&self) {
        *self.last.write().await = None;
    }
}
