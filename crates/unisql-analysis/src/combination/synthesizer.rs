//! Unified SQL synthesis for combination candidates.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;
use unisql_core::constants::SQL_FALLBACK_PREFIX;
use unisql_core::errors::GenerationError;
use unisql_core::traits::TextGenerator;

use super::finder::CombinationCandidate;
use crate::extraction::fenced::{fenced_or_whole, Fence};
use crate::extraction::prompts::{synthesis_prompt, ScriptEffects};
use crate::pipeline::record::ScriptRecord;

/// Whether the stored SQL came from the model or is the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisOutcome {
    Generated,
    Fallback { reason: String },
}

#[derive(Debug, Clone)]
pub struct SynthesizedSql {
    pub table: String,
    pub sql: String,
    pub outcome: SynthesisOutcome,
}

impl SynthesizedSql {
    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, SynthesisOutcome::Fallback { .. })
    }
}

/// The placeholder stored when synthesis for `table` fails.
pub fn fallback_sql(table: &str) -> String {
    format!("{SQL_FALLBACK_PREFIX} {table}")
}

pub struct SqlSynthesizer {
    generator: Arc<dyn TextGenerator>,
}

impl SqlSynthesizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Ask the model for one SQL statement reconciling every member's effects.
    ///
    /// Members are the records whose display name appears in the candidate.
    /// Returns the `sql` fenced block if present, else the raw response. On
    /// failure the result holds [`fallback_sql`]; this never fails.
    pub fn synthesize(
        &self,
        candidate: &CombinationCandidate,
        records: &[ScriptRecord],
    ) -> SynthesizedSql {
        let start = Instant::now();
        let result = self.try_synthesize(candidate, records);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(sql) => {
                debug!(table = %candidate.table, elapsed_ms, "unified SQL generated");
                SynthesizedSql {
                    table: candidate.table.clone(),
                    sql,
                    outcome: SynthesisOutcome::Generated,
                }
            }
            Err(e) => {
                debug!(
                    table = %candidate.table,
                    elapsed_ms,
                    error = %e,
                    "SQL synthesis failed, storing placeholder"
                );
                SynthesizedSql {
                    table: candidate.table.clone(),
                    sql: fallback_sql(&candidate.table),
                    outcome: SynthesisOutcome::Fallback {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }

    /// Fallible variant of [`synthesize`](Self::synthesize), returning the SQL text.
    pub fn try_synthesize(
        &self,
        candidate: &CombinationCandidate,
        records: &[ScriptRecord],
    ) -> Result<String, GenerationError> {
        let members: Vec<ScriptEffects<'_>> = records
            .iter()
            .filter(|r| candidate.scripts.contains(&r.name))
            .map(|r| ScriptEffects {
                name: &r.name,
                inputs: &r.raw_inputs,
                outputs: &r.raw_outputs,
            })
            .collect();

        let prompt = synthesis_prompt(&candidate.table, &members);
        let response = self.generator.generate(&prompt)?;
        Ok(fenced_or_whole(&response, Fence::Sql).to_string())
    }
}
