//! Semantic extraction errors.
//!
//! Never surfaced by the extractor itself; they are kept on the record as the
//! reason behind an empty result.

use super::error_code::{self, ErrorCode};
use super::GenerationError;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response JSON is not an object")]
    NotAnObject,
}

impl ErrorCode for ExtractionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Generation(e) => e.error_code(),
            _ => error_code::EXTRACTION_ERROR,
        }
    }
}
