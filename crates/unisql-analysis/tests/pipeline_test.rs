//! End-to-end runs of the analyzer over fixture directories.

mod common;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use unisql_analysis::extraction::Dialect;
use unisql_analysis::ScriptAnalyzer;
use unisql_core::config::UnisqlConfig;
use unisql_core::errors::{PipelineError, ScanError};
use unisql_core::events::types::*;
use unisql_core::events::UnisqlEventHandler;
use unisql_core::traits::TextGenerator;

use common::{writes_to, write_tree, FailingGenerator, FixedGenerator, ScriptedGenerator};

fn analyzer(root: &std::path::Path, generator: impl TextGenerator + 'static) -> ScriptAnalyzer {
    ScriptAnalyzer::new(root, Arc::new(generator), &UnisqlConfig::default())
}

fn read_json(path: &std::path::Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_two_writers_of_one_table_produce_unified_sql() {
    let dir = TempDir::new().unwrap();
    write_tree(
        dir.path(),
        &[
            ("rpa/a.py", "import psycopg2\ncursor.execute('insert into customers ...')\n"),
            ("rpa/b.py", "cursor.execute('update customers set ...')\n"),
        ],
    );
    let output = dir.path().join("analysis_results.json");

    let generator = ScriptedGenerator::new(
        |_: &str| Ok(writes_to("customers")),
        |_: &str| Ok("{}".to_string()),
    );
    let run = analyzer(dir.path(), generator).save_results(&output).unwrap();
    assert!(run.is_clean());

    let json = read_json(&output);
    let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys.len(), 3);
    for key in ["scripts", "combinations", "unified_sql"] {
        assert!(keys.contains(&key.to_string()), "missing {key}");
    }

    assert_eq!(json["scripts"], 2);
    assert_eq!(
        json["combinations"],
        serde_json::json!([{"table": "customers", "scripts": ["a.py", "b.py"]}])
    );
    assert_eq!(json["unified_sql"]["customers"], "{}");
    assert_eq!(json["unified_sql"].as_object().unwrap().len(), 1);
}

#[test]
fn test_record_count_matches_discovered_scripts() {
    let dir = TempDir::new().unwrap();
    write_tree(
        dir.path(),
        &[
            ("one.py", "conn = psycopg2.connect(host='h', database='sales')"),
            ("nested/two.py", "print('hi')"),
            ("nested/deeper/three.py", ""),
            ("notes.txt", "not a script"),
            ("setup.pyc", "bytecode"),
        ],
    );

    let run = analyzer(dir.path(), FixedGenerator::new("{}"))
        .run_analysis()
        .unwrap();
    let run = run.data;

    assert_eq!(run.records.len(), 3);
    assert_eq!(run.report.scripts, 3);

    let one = run.records.iter().find(|r| r.name == "one.py").unwrap();
    assert_eq!(one.connections[&Dialect::Postgres], vec!["sales"]);
    assert!(one.connections[&Dialect::Mysql].is_empty());
    assert!(one.connections[&Dialect::Mongodb].is_empty());
}

#[test]
fn test_service_failure_still_counts_every_script() {
    let dir = TempDir::new().unwrap();
    write_tree(
        dir.path(),
        &[("a.py", "x = 1"), ("b.py", "y = 2"), ("c.py", "z = 3")],
    );
    let output = dir.path().join("out.json");

    let run = analyzer(dir.path(), FailingGenerator)
        .save_results(&output)
        .unwrap();

    assert!(run.is_clean());
    assert!(run.data.records.iter().all(|r| r.extraction.is_failed()));
    assert!(run.data.records.iter().all(|r| r.outputs.is_empty()));

    let json = read_json(&output);
    assert_eq!(json["scripts"], 3);
    assert_eq!(json["combinations"], serde_json::json!([]));
    assert_eq!(json["unified_sql"], serde_json::json!({}));
}

#[test]
fn test_failed_synthesis_stores_placeholder() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("a.py", "a"), ("b.py", "b")]);
    let output = dir.path().join("out.json");

    let generator = ScriptedGenerator::new(
        |_: &str| Ok(writes_to("orders")),
        |_: &str| {
            Err(unisql_core::errors::GenerationError::Status {
                status: 503,
                body: "unavailable".into(),
            })
        },
    );
    let run = analyzer(dir.path(), generator).save_results(&output).unwrap();

    assert!(run.data.synthesized[0].is_fallback());
    let json = read_json(&output);
    assert_eq!(
        json["unified_sql"]["orders"],
        "-- Erro ao gerar SQL para orders"
    );
}

#[test]
fn test_empty_root_writes_empty_report() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    analyzer(dir.path(), FixedGenerator::new("{}"))
        .save_results(&output)
        .unwrap();

    let json = read_json(&output);
    assert_eq!(
        json,
        serde_json::json!({"scripts": 0, "combinations": [], "unified_sql": {}})
    );
}

#[test]
fn test_existing_report_is_replaced() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");
    std::fs::write(&output, "stale content that is much longer than the new report ".repeat(50))
        .unwrap();
    write_tree(dir.path(), &[("only.py", "pass")]);

    analyzer(dir.path(), FixedGenerator::new("{}"))
        .save_results(&output)
        .unwrap();

    let json = read_json(&output);
    assert_eq!(json["scripts"], 1);
}

#[test]
fn test_report_is_indented_and_keeps_non_ascii() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("a.py", "a"), ("b.py", "b")]);
    let output = dir.path().join("out.json");

    let generator = ScriptedGenerator::new(
        |_: &str| Ok(writes_to("relatório_vendas")),
        |_: &str| Ok("```sql\nINSERT INTO relatório_vendas VALUES ('ação');\n```".to_string()),
    );
    analyzer(dir.path(), generator).save_results(&output).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("relatório_vendas"));
    assert!(text.contains("'ação'"));
    assert!(!text.contains("\\u"));
    assert!(text.contains("\n  \"scripts\": 2"));
}

#[test]
fn test_missing_root_is_fatal() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let output = dir.path().join("out.json");

    let err = analyzer(&missing, FixedGenerator::new("{}"))
        .save_results(&output)
        .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Scan(ScanError::RootNotFound { .. })
    ));
    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_a_non_fatal_error() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("a.py", "a"), ("locked/b.py", "b")]);
    let locked = dir.path().join("locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
    if std::fs::read_dir(&locked).is_ok() {
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = analyzer(dir.path(), FixedGenerator::new("{}"))
        .analyze_scripts()
        .unwrap();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(result.data.len(), 1);
    assert_eq!(result.error_count(), 1);
    assert!(matches!(
        result.errors[0],
        PipelineError::Scan(ScanError::Walk { .. })
    ));
}

#[test]
fn test_unwritable_output_is_reported() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("a.py", "a")]);
    let output = dir.path().join("missing_dir").join("out.json");

    let err = analyzer(dir.path(), FixedGenerator::new("{}"))
        .save_results(&output)
        .unwrap_err();
    assert!(matches!(err, PipelineError::Report(_)));
}

#[derive(Default)]
struct RecordingHandler {
    log: Mutex<Vec<String>>,
}

impl RecordingHandler {
    fn push(&self, line: String) {
        self.log.lock().unwrap().push(line);
    }
}

impl UnisqlEventHandler for RecordingHandler {
    fn on_run_started(&self, _event: &RunStartedEvent) {
        self.push("started".into());
    }

    fn on_script_analyzed(&self, event: &ScriptAnalyzedEvent) {
        self.push(format!("analyzed {} {}", event.index, event.name));
    }

    fn on_combinations_found(&self, event: &CombinationsFoundEvent) {
        self.push(format!("combinations {}", event.count));
    }

    fn on_sql_generated(&self, event: &SqlGeneratedEvent) {
        self.push(format!("sql {} {}", event.table, event.fallback));
    }

    fn on_report_saved(&self, event: &ReportSavedEvent) {
        self.push(format!("saved {}", event.path.display()));
    }
}

#[test]
fn test_progress_events_follow_run_order() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("a.py", "a"), ("b.py", "b")]);
    let output: PathBuf = dir.path().join("out.json");

    let handler = Arc::new(RecordingHandler::default());
    let generator = ScriptedGenerator::new(
        |_: &str| Ok(writes_to("t")),
        |_: &str| Ok("SELECT 1;".to_string()),
    );
    analyzer(dir.path(), generator)
        .with_event_handler(handler.clone())
        .save_results(&output)
        .unwrap();

    let log = handler.log.lock().unwrap().clone();
    assert_eq!(
        log,
        vec![
            "started".to_string(),
            "analyzed 0 a.py".to_string(),
            "analyzed 1 b.py".to_string(),
            "combinations 1".to_string(),
            "sql t false".to_string(),
            format!("saved {}", output.display()),
        ]
    );
}
