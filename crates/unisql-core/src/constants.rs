//! Shared constants for the unisql analyzer.

/// File name suffix of the scripts picked up by the scanner.
pub const DEFAULT_SCRIPT_SUFFIX: &str = ".py";

/// Number of leading characters of a script sent to the model.
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 3000;

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default base URL of the Generative Language API.
pub const DEFAULT_MODEL_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default report destination, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "analysis_results.json";

/// Project-level config file name, looked up in the scanned root.
pub const PROJECT_CONFIG_FILE: &str = "unisql.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "UNISQL_LOG";

/// Placeholder prefix stored in place of SQL when synthesis fails.
pub const SQL_FALLBACK_PREFIX: &str = "-- Erro ao gerar SQL para";
