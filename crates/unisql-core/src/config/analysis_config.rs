//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_PROMPT_CHARS;

/// Configuration for the model-assisted extraction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Characters of each script embedded in the extraction prompt. Default: 3000.
    pub max_prompt_chars: Option<usize>,
}

impl AnalysisConfig {
    /// Returns the effective truncation length, defaulting to 3000.
    pub fn effective_max_prompt_chars(&self) -> usize {
        self.max_prompt_chars.unwrap_or(DEFAULT_MAX_PROMPT_CHARS)
    }
}
