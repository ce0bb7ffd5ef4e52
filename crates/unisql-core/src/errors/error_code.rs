//! Stable error codes reported by the CLI.

/// Maps an error to a stable, machine-readable code.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const ROOT_NOT_FOUND: &str = "ROOT_NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const GENERATION_ERROR: &str = "GENERATION_ERROR";
pub const MISSING_CREDENTIAL: &str = "MISSING_CREDENTIAL";
pub const EXTRACTION_ERROR: &str = "EXTRACTION_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
