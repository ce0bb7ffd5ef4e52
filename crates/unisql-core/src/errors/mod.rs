//! Error handling for unisql.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod extraction_error;
pub mod generation_error;
pub mod pipeline_error;
pub mod report_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use extraction_error::ExtractionError;
pub use generation_error::GenerationError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use report_error::ReportError;
pub use scan_error::ScanError;
