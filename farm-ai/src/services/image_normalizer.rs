//! Image normalization
//!
//! Turns a caller's image reference into a size-bounded payload with a
//! declared content type, ready for multipart upload. No format or dimension
//! checks are made; the identification service decides what it can decode.

use crate::error::{AnalysisError, AnalysisResult};
use std::path::PathBuf;

/// Content type declared when the payload is not a recognised image format
pub const FALLBACK_CONTENT_TYPE: &str = "image/*";

const DEFAULT_FILE_NAME: &str = "plant_image.jpg";

/// Caller-supplied image reference
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// Image file on disk
    Path(PathBuf),
    /// Image already held in memory
    Bytes {
        data: Vec<u8>,
        file_name: Option<String>,
    },
}

impl ImageSource {
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        ImageSource::Bytes {
            data: data.into(),
            file_name: None,
        }
    }
}

/// Validated upload payload
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub file_name: String,
}

/// Validates image size and sniffs the content type
#[derive(Debug, Clone)]
pub struct ImageNormalizer {
    max_bytes: u64,
}

impl ImageNormalizer {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    /// Read and validate an image reference
    ///
    /// Files are size-checked from metadata before any bytes are read, and
    /// in-memory payloads before they are copied.
    pub async fn normalize(&self, source: &ImageSource) -> AnalysisResult<ImagePayload> {
        let (bytes, file_name) = match source {
            ImageSource::Path(path) => {
                let metadata = tokio::fs::metadata(path)
                    .await
                    .map_err(|e| AnalysisError::ImageUnreadable(format!("{}: {}", path.display(), e)))?;
                self.check_size(metadata.len())?;

                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|e| AnalysisError::ImageUnreadable(format!("{}: {}", path.display(), e)))?;
                // File may have changed between metadata and read
                self.check_size(bytes.len() as u64)?;
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
                (bytes, file_name)
            }
            ImageSource::Bytes { data, file_name } => {
                self.check_size(data.len() as u64)?;
                (
                    data.clone(),
                    file_name.clone().unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
                )
            }
        };

        let content_type = sniff_content_type(&bytes);

        tracing::debug!(
            size = bytes.len(),
            content_type = %content_type,
            file_name = %file_name,
            "Image normalized"
        );

        Ok(ImagePayload {
            bytes,
            content_type,
            file_name,
        })
    }

    fn check_size(&self, size: u64) -> AnalysisResult<()> {
        if size == 0 {
            return Err(AnalysisError::EmptyImage);
        }
        if size > self.max_bytes {
            return Err(AnalysisError::ImageTooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }
}

fn sniff_content_type(bytes: &[u8]) -> String {
    infer::get(bytes)
        .filter(|kind| kind.matcher_type() == infer::MatcherType::Image)
        .map(|kind| kind.mime_type().to_string())
        .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string())
}
