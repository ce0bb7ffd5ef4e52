//! Console progress notices.

use unisql_core::events::types::*;
use unisql_core::events::UnisqlEventHandler;

/// Prints one line per run event to stdout.
pub struct ConsoleProgress;

impl UnisqlEventHandler for ConsoleProgress {
    fn on_run_started(&self, event: &RunStartedEvent) {
        println!("Analyzing scripts in {}...", event.root.display());
    }

    fn on_script_analyzed(&self, event: &ScriptAnalyzedEvent) {
        println!("✓ {}", event.name);
    }

    fn on_script_skipped(&self, event: &ScriptSkippedEvent) {
        println!("✗ {} ({})", event.path.display(), event.message);
    }

    fn on_combinations_found(&self, event: &CombinationsFoundEvent) {
        println!("\nCombinations found: {}", event.count);
    }

    fn on_sql_generated(&self, event: &SqlGeneratedEvent) {
        println!("✓ SQL generated for {}", event.table);
    }

    fn on_report_saved(&self, event: &ReportSavedEvent) {
        println!("\nResults saved to {}", event.path.display());
    }
}
