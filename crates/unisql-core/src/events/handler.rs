//! UnisqlEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling run progress events.
///
/// Handlers only override the events they care about.
pub trait UnisqlEventHandler: Send + Sync {
    fn on_run_started(&self, _event: &RunStartedEvent) {}
    fn on_script_analyzed(&self, _event: &ScriptAnalyzedEvent) {}
    fn on_script_skipped(&self, _event: &ScriptSkippedEvent) {}
    fn on_combinations_found(&self, _event: &CombinationsFoundEvent) {}
    fn on_sql_generated(&self, _event: &SqlGeneratedEvent) {}
    fn on_report_saved(&self, _event: &ReportSavedEvent) {}
}
