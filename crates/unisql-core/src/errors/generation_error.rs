//! Text generation service errors.

use super::error_code::{self, ErrorCode};

/// Errors raised by a [`TextGenerator`](crate::traits::TextGenerator).
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("No API key configured for provider {provider}")]
    MissingApiKey { provider: String },

    #[error("Runtime error: {reason}")]
    Runtime { reason: String },

    #[error("HTTP error: {reason}")]
    Http { reason: String },

    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Undecodable response: {reason}")]
    InvalidResponse { reason: String },

    #[error("Response contained no candidates")]
    EmptyResponse,
}

impl ErrorCode for GenerationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingApiKey { .. } => error_code::MISSING_CREDENTIAL,
            _ => error_code::GENERATION_ERROR,
        }
    }
}
