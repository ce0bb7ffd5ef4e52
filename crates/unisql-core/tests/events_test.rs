//! Tests for the unisql event system.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use unisql_core::events::types::*;
use unisql_core::events::{EventDispatcher, UnisqlEventHandler};

#[derive(Default)]
struct RecordingHandler {
    analyzed: Mutex<Vec<String>>,
    tables: Mutex<Vec<(String, bool)>>,
}

impl UnisqlEventHandler for RecordingHandler {
    fn on_script_analyzed(&self, event: &ScriptAnalyzedEvent) {
        self.analyzed.lock().unwrap().push(event.name.clone());
    }

    fn on_sql_generated(&self, event: &SqlGeneratedEvent) {
        self.tables
            .lock()
            .unwrap()
            .push((event.table.clone(), event.fallback));
    }
}

struct PanickingHandler;

impl UnisqlEventHandler for PanickingHandler {
    fn on_script_analyzed(&self, _event: &ScriptAnalyzedEvent) {
        panic!("handler failure");
    }
}

struct CountingHandler(AtomicUsize);

impl UnisqlEventHandler for CountingHandler {
    fn on_script_analyzed(&self, _event: &ScriptAnalyzedEvent) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn analyzed(name: &str, index: usize) -> ScriptAnalyzedEvent {
    ScriptAnalyzedEvent {
        name: name.into(),
        path: PathBuf::from(name),
        index,
        inferred: true,
    }
}

#[test]
fn test_empty_dispatcher_is_a_no_op() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_script_analyzed(&analyzed("a.py", 0));
    dispatcher.emit_report_saved(&ReportSavedEvent {
        path: PathBuf::from("out.json"),
    });
}

#[test]
fn test_events_reach_handlers_in_order() {
    let handler = Arc::new(RecordingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(handler.clone());

    dispatcher.emit_script_analyzed(&analyzed("a.py", 0));
    dispatcher.emit_script_analyzed(&analyzed("b.py", 1));
    dispatcher.emit_sql_generated(&SqlGeneratedEvent {
        table: "orders".into(),
        fallback: true,
    });
    // Events the handler does not override use the no-op default.
    dispatcher.emit_combinations_found(&CombinationsFoundEvent { count: 1 });

    assert_eq!(*handler.analyzed.lock().unwrap(), vec!["a.py", "b.py"]);
    assert_eq!(
        *handler.tables.lock().unwrap(),
        vec![("orders".to_string(), true)]
    );
}

#[test]
fn test_panicking_handler_does_not_block_others() {
    let counter = Arc::new(CountingHandler(AtomicUsize::new(0)));
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_script_analyzed(&analyzed("a.py", 0));

    assert_eq!(dispatcher.handler_count(), 2);
    assert_eq!(counter.0.load(Ordering::SeqCst), 1);
}
