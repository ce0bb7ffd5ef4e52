//! Subcommand implementations.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use unisql_analysis::extraction::{extract_connections, ConnectionMap};
use unisql_analysis::providers::GeminiProvider;
use unisql_analysis::scanner::{discover_scripts, read_script};
use unisql_analysis::ScriptAnalyzer;
use unisql_core::config::{CliOverrides, UnisqlConfig};

use crate::progress::ConsoleProgress;

pub struct AnalyzeArgs {
    pub root: PathBuf,
    pub output: Option<PathBuf>,
    pub suffix: Option<String>,
    pub model: Option<String>,
    pub max_prompt_chars: Option<usize>,
    pub api_key: Option<String>,
}

/// Full run: every script analyzed, report written.
pub fn analyze(args: AnalyzeArgs) -> Result<()> {
    let overrides = CliOverrides {
        suffix: args.suffix,
        max_prompt_chars: args.max_prompt_chars,
        model: args.model,
        api_key: args.api_key,
        output: args.output,
    };
    let config = UnisqlConfig::load(&args.root, Some(&overrides))?;
    let provider = GeminiProvider::from_config(&config.model)
        .context("set UNISQL_API_KEY or pass --api-key")?;

    let analyzer = ScriptAnalyzer::new(&args.root, Arc::new(provider), &config)
        .with_event_handler(Arc::new(ConsoleProgress));

    let output = config.output.effective_path();
    let run = analyzer.save_results(&output)?;

    if !run.is_clean() {
        eprintln!("{} entries could not be read:", run.error_count());
        for error in &run.errors {
            eprintln!("  {error}");
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct ScriptConnections {
    path: PathBuf,
    connections: ConnectionMap,
}

/// Static pass: connection patterns only, printed as JSON keyed by script name.
pub fn connections(root: &Path, suffix: Option<String>) -> Result<()> {
    let overrides = CliOverrides {
        suffix,
        ..Default::default()
    };
    let config = UnisqlConfig::load(root, Some(&overrides))?;
    let discovery = discover_scripts(
        root,
        config.scan.effective_suffix(),
        config.scan.effective_follow_symlinks(),
    )?;

    let mut found: BTreeMap<String, ScriptConnections> = BTreeMap::new();
    for path in discovery.paths {
        let code = match read_script(&path) {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable script");
                continue;
            }
        };
        let key = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .display()
            .to_string();
        found.insert(
            key,
            ScriptConnections {
                connections: extract_connections(&code),
                path,
            },
        );
    }

    println!("{}", serde_json::to_string_pretty(&found)?);
    Ok(())
}

/// Print the resolved configuration, with the API key redacted.
pub fn show_config(root: &Path) -> Result<()> {
    let config = UnisqlConfig::load(root, None)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
