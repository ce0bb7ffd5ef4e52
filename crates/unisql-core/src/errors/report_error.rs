//! Report persistence errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while persisting the analysis report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
