//! Model-assisted inference of a script's inputs and outputs.
//!
//! Best-effort: any failure in the call, the fenced-block lookup, or the JSON
//! parse collapses to [`SemanticExtraction::empty`]. One script failing never
//! stops the batch.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::debug;
use unisql_core::errors::ExtractionError;
use unisql_core::traits::TextGenerator;

use super::fenced::{fenced_or_whole, Fence};
use super::prompts::{extraction_prompt, truncate_chars};
use super::types::{ExtractionOutcome, SemanticExtraction};

pub struct SemanticExtractor {
    generator: Arc<dyn TextGenerator>,
    max_prompt_chars: usize,
}

impl SemanticExtractor {
    /// `max_prompt_chars` bounds how much of each script reaches the model.
    /// Longer scripts are analyzed partially without notice.
    pub fn new(generator: Arc<dyn TextGenerator>, max_prompt_chars: usize) -> Self {
        Self {
            generator,
            max_prompt_chars,
        }
    }

    /// Infer inputs, outputs, and related tables for `code`. Never fails.
    pub fn extract(&self, code: &str) -> (SemanticExtraction, ExtractionOutcome) {
        let start = Instant::now();
        let result = self.try_extract(code);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(extraction) => {
                debug!(
                    provider = self.generator.name(),
                    elapsed_ms,
                    inputs = extraction.inputs.len(),
                    outputs = extraction.outputs.len(),
                    "semantic extraction succeeded"
                );
                (extraction, ExtractionOutcome::Inferred)
            }
            Err(e) => {
                debug!(
                    provider = self.generator.name(),
                    elapsed_ms,
                    error = %e,
                    "semantic extraction failed, using empty result"
                );
                (
                    SemanticExtraction::empty(),
                    ExtractionOutcome::Failed {
                        reason: e.to_string(),
                    },
                )
            }
        }
    }

    /// Fallible variant of [`extract`](Self::extract).
    pub fn try_extract(&self, code: &str) -> Result<SemanticExtraction, ExtractionError> {
        let prompt = extraction_prompt(truncate_chars(code, self.max_prompt_chars));
        let response = self.generator.generate(&prompt)?;
        parse_extraction_response(&response)
    }
}

/// Parse a model response: the `json` fenced block if present, otherwise the
/// whole text. The payload must be a JSON object.
pub fn parse_extraction_response(response: &str) -> Result<SemanticExtraction, ExtractionError> {
    let payload = fenced_or_whole(response, Fence::Json);
    let value: Value = serde_json::from_str(payload)?;
    let obj = value.as_object().ok_or(ExtractionError::NotAnObject)?;
    Ok(SemanticExtraction::from_object(obj))
}
