//! Top-level unisql configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ModelConfig, OutputConfig, ScanConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`UNISQL_*`)
/// 3. Project config (`unisql.toml` in the scanned root)
/// 4. User config (`~/.unisql/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UnisqlConfig {
    pub scan: ScanConfig,
    pub analysis: AnalysisConfig,
    pub model: ModelConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub suffix: Option<String>,
    pub max_prompt_chars: Option<usize>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub output: Option<PathBuf>,
}

impl UnisqlConfig {
    /// Load configuration with layered resolution, using `root` to locate
    /// the project config file.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        // Unreadable user config is not fatal.
                        tracing::warn!(error = %e, "ignoring user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &UnisqlConfig) -> Result<(), ConfigError> {
        if let Some(ref suffix) = config.scan.suffix {
            if suffix.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.suffix".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config.analysis.max_prompt_chars == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.max_prompt_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.model.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "model.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.unisql/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".unisql").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut UnisqlConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: UnisqlConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut UnisqlConfig, other: &UnisqlConfig) {
        if other.scan.suffix.is_some() {
            base.scan.suffix = other.scan.suffix.clone();
        }
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }

        if other.analysis.max_prompt_chars.is_some() {
            base.analysis.max_prompt_chars = other.analysis.max_prompt_chars;
        }

        if other.model.name.is_some() {
            base.model.name = other.model.name.clone();
        }
        if other.model.endpoint.is_some() {
            base.model.endpoint = other.model.endpoint.clone();
        }
        if other.model.api_key.is_some() {
            base.model.api_key = other.model.api_key.clone();
        }
        if other.model.timeout_secs.is_some() {
            base.model.timeout_secs = other.model.timeout_secs;
        }

        if other.output.path.is_some() {
            base.output.path = other.output.path.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable numeric values are ignored.
    fn apply_env_overrides(config: &mut UnisqlConfig) {
        if let Ok(val) = std::env::var("UNISQL_SCAN_SUFFIX") {
            config.scan.suffix = Some(val);
        }
        if let Ok(val) = std::env::var("UNISQL_MAX_PROMPT_CHARS") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.max_prompt_chars = Some(v);
            }
        }
        if let Ok(val) = std::env::var("UNISQL_MODEL") {
            config.model.name = Some(val);
        }
        if let Ok(val) = std::env::var("UNISQL_MODEL_ENDPOINT") {
            config.model.endpoint = Some(val);
        }
        if let Ok(val) =
            std::env::var("UNISQL_API_KEY").or_else(|_| std::env::var("GEMINI_API_KEY"))
        {
            config.model.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("UNISQL_MODEL_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.model.timeout_secs = Some(v);
            }
        }
        if let Ok(val) = std::env::var("UNISQL_OUTPUT") {
            config.output.path = Some(PathBuf::from(val));
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut UnisqlConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.suffix {
            config.scan.suffix = Some(v.clone());
        }
        if let Some(v) = cli.max_prompt_chars {
            config.analysis.max_prompt_chars = Some(v);
        }
        if let Some(ref v) = cli.model {
            config.model.name = Some(v.clone());
        }
        if let Some(ref v) = cli.api_key {
            config.model.api_key = Some(v.clone());
        }
        if let Some(ref v) = cli.output {
            config.output.path = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML. The API key is redacted.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let mut printable = self.clone();
        if printable.model.api_key.is_some() {
            printable.model.api_key = Some("<redacted>".to_string());
        }
        toml::to_string_pretty(&printable).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
