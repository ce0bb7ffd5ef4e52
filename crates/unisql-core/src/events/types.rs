//! Event payload types.

use std::path::PathBuf;

/// Payload for `on_run_started`.
#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub root: PathBuf,
}

/// Payload for `on_script_analyzed`, emitted once per discovered script.
#[derive(Debug, Clone)]
pub struct ScriptAnalyzedEvent {
    pub name: String,
    pub path: PathBuf,
    /// Zero-based position in discovery order.
    pub index: usize,
    /// False when the model call or its response parsing failed.
    pub inferred: bool,
}

/// Payload for `on_script_skipped`.
#[derive(Debug, Clone)]
pub struct ScriptSkippedEvent {
    pub path: PathBuf,
    pub message: String,
}

/// Payload for `on_combinations_found`.
#[derive(Debug, Clone)]
pub struct CombinationsFoundEvent {
    pub count: usize,
}

/// Payload for `on_sql_generated`, emitted once per combination.
#[derive(Debug, Clone)]
pub struct SqlGeneratedEvent {
    pub table: String,
    /// True when the placeholder was stored instead of model output.
    pub fallback: bool,
}

/// Payload for `on_report_saved`.
#[derive(Debug, Clone)]
pub struct ReportSavedEvent {
    pub path: PathBuf,
}
