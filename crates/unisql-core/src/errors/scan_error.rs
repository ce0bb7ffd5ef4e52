//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while discovering and reading scripts.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Scan root not found or not a directory: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RootNotFound { .. } => error_code::ROOT_NOT_FOUND,
            _ => error_code::SCAN_ERROR,
        }
    }
}
