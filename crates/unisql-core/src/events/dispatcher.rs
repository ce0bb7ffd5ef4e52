//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::UnisqlEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn UnisqlEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn UnisqlEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not prevent later handlers from receiving the event.
    fn emit<F: Fn(&dyn UnisqlEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked");
            }
        }
    }

    pub fn emit_run_started(&self, event: &RunStartedEvent) {
        self.emit(|h| h.on_run_started(event));
    }

    pub fn emit_script_analyzed(&self, event: &ScriptAnalyzedEvent) {
        self.emit(|h| h.on_script_analyzed(event));
    }

    pub fn emit_script_skipped(&self, event: &ScriptSkippedEvent) {
        self.emit(|h| h.on_script_skipped(event));
    }

    pub fn emit_combinations_found(&self, event: &CombinationsFoundEvent) {
        self.emit(|h| h.on_combinations_found(event));
    }

    pub fn emit_sql_generated(&self, event: &SqlGeneratedEvent) {
        self.emit(|h| h.on_sql_generated(event));
    }

    pub fn emit_report_saved(&self, event: &ReportSavedEvent) {
        self.emit(|h| h.on_report_saved(event));
    }
}
