//! Generation model configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MODEL, DEFAULT_MODEL_ENDPOINT};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelConfig {
    /// Model identifier. Default: "gemini-2.0-flash".
    pub name: Option<String>,
    /// API base URL. Default: the public Generative Language v1beta endpoint.
    pub endpoint: Option<String>,
    /// Service credential. Prefer `UNISQL_API_KEY` over storing it in a file.
    pub api_key: Option<String>,
    /// Per-request timeout in seconds. Unset means the call may block indefinitely.
    pub timeout_secs: Option<u64>,
}

impl ModelConfig {
    pub fn effective_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn effective_endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_MODEL_ENDPOINT)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
