//! Run orchestration: per-file record building, combination detection, SQL
//! synthesis, and report persistence.

pub mod orchestrator;
pub mod record;
pub mod report;

pub use orchestrator::{AnalysisRun, ScriptAnalyzer};
pub use record::ScriptRecord;
pub use report::{AnalysisReport, UnifiedSql};
