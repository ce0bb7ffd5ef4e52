//! ScriptAnalyzer: drives discovery, per-file analysis, combination
//! detection, SQL synthesis, and persistence in a single sequential pass.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};
use unisql_core::config::UnisqlConfig;
use unisql_core::errors::{PipelineError, PipelineResult, ScanError};
use unisql_core::events::types::*;
use unisql_core::events::{EventDispatcher, UnisqlEventHandler};
use unisql_core::traits::TextGenerator;

use super::record::ScriptRecord;
use super::report::AnalysisReport;
use crate::combination::{
    find_combinations, CombinationCandidate, SqlSynthesizer, SynthesizedSql,
};
use crate::extraction::SemanticExtractor;
use crate::scanner::{discover_scripts, Discovery};

/// Everything produced by one run, including the in-memory records the
/// report is derived from.
#[derive(Debug, Default)]
pub struct AnalysisRun {
    pub records: Vec<ScriptRecord>,
    pub combinations: Vec<CombinationCandidate>,
    pub synthesized: Vec<SynthesizedSql>,
    pub report: AnalysisReport,
}

pub struct ScriptAnalyzer {
    root: PathBuf,
    suffix: String,
    follow_symlinks: bool,
    extractor: SemanticExtractor,
    synthesizer: SqlSynthesizer,
    events: EventDispatcher,
}

impl ScriptAnalyzer {
    /// Create an analyzer for the scripts under `root`.
    ///
    /// `generator` serves both the per-script extraction and the per-table
    /// synthesis calls. Every call is attempted exactly once.
    pub fn new(
        root: impl Into<PathBuf>,
        generator: Arc<dyn TextGenerator>,
        config: &UnisqlConfig,
    ) -> Self {
        Self {
            root: root.into(),
            suffix: config.scan.effective_suffix().to_string(),
            follow_symlinks: config.scan.effective_follow_symlinks(),
            extractor: SemanticExtractor::new(
                Arc::clone(&generator),
                config.analysis.effective_max_prompt_chars(),
            ),
            synthesizer: SqlSynthesizer::new(generator),
            events: EventDispatcher::new(),
        }
    }

    /// Register a progress handler.
    pub fn with_event_handler(mut self, handler: Arc<dyn UnisqlEventHandler>) -> Self {
        self.events.register(handler);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Discover and analyze every script under the root.
    ///
    /// Unreadable directories and files are skipped and reported as non-fatal
    /// errors. Only a missing root aborts.
    pub fn analyze_scripts(&self) -> Result<PipelineResult<Vec<ScriptRecord>>, PipelineError> {
        let Discovery { paths, skipped } =
            discover_scripts(&self.root, &self.suffix, self.follow_symlinks)?;
        info!(
            root = %self.root.display(),
            scripts = paths.len(),
            skipped = skipped.len(),
            "analyzing scripts"
        );

        let mut result = PipelineResult::new(Vec::with_capacity(paths.len()));
        for error in skipped {
            if let ScanError::Walk { path, message } = &error {
                self.events.emit_script_skipped(&ScriptSkippedEvent {
                    path: path.clone(),
                    message: message.clone(),
                });
            }
            result.add_error(error.into());
        }
        for path in paths {
            match ScriptRecord::build(&path, &self.extractor) {
                Ok(record) => {
                    self.events.emit_script_analyzed(&ScriptAnalyzedEvent {
                        name: record.name.clone(),
                        path: record.path.clone(),
                        index: result.data.len(),
                        inferred: !record.extraction.is_failed(),
                    });
                    result.data.push(record);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable script");
                    self.events.emit_script_skipped(&ScriptSkippedEvent {
                        path,
                        message: e.to_string(),
                    });
                    result.add_error(e.into());
                }
            }
        }
        Ok(result)
    }

    /// Run discovery, analysis, combination detection, and synthesis, and
    /// assemble the report without writing it.
    pub fn run_analysis(&self) -> Result<PipelineResult<AnalysisRun>, PipelineError> {
        let start = Instant::now();
        self.events.emit_run_started(&RunStartedEvent {
            root: self.root.clone(),
        });

        let PipelineResult { data: records, errors } = self.analyze_scripts()?;

        let combinations = find_combinations(&records);
        info!(combinations = combinations.len(), "combination detection complete");
        self.events.emit_combinations_found(&CombinationsFoundEvent {
            count: combinations.len(),
        });

        let mut report = AnalysisReport {
            scripts: records.len(),
            combinations: combinations.clone(),
            ..Default::default()
        };
        let mut synthesized = Vec::with_capacity(combinations.len());
        for candidate in &combinations {
            let generated = self.synthesizer.synthesize(candidate, &records);
            self.events.emit_sql_generated(&SqlGeneratedEvent {
                table: generated.table.clone(),
                fallback: generated.is_fallback(),
            });
            report
                .unified_sql
                .insert(generated.table.clone(), generated.sql.clone());
            synthesized.push(generated);
        }

        info!(
            scripts = report.scripts,
            combinations = report.combinations.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "analysis complete"
        );

        Ok(PipelineResult {
            data: AnalysisRun {
                records,
                combinations,
                synthesized,
                report,
            },
            errors,
        })
    }

    /// Full run: analyze and write the report to `output` as indented JSON,
    /// replacing the file if it exists.
    pub fn save_results(
        &self,
        output: &Path,
    ) -> Result<PipelineResult<AnalysisRun>, PipelineError> {
        let run = self.run_analysis()?;
        run.data.report.save(output)?;
        info!(path = %output.display(), "report saved");
        self.events.emit_report_saved(&ReportSavedEvent {
            path: output.to_path_buf(),
        });
        Ok(run)
    }
}
