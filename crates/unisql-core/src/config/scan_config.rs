//! Scanner configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SCRIPT_SUFFIX;

/// Configuration for script discovery.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// File name suffix of analyzed scripts. Default: ".py".
    pub suffix: Option<String>,
    /// Follow symbolic links while walking. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl ScanConfig {
    pub fn effective_suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or(DEFAULT_SCRIPT_SUFFIX)
    }

    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }
}
