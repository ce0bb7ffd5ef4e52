//! CLI for unisql.
//!
//! Scans a directory of scripts, infers what each one reads and writes, and
//! proposes a unified SQL statement for every table written by several scripts.

mod commands;
mod progress;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use unisql_core::errors::{ConfigError, ErrorCode, GenerationError, PipelineError, ScanError};

#[derive(Parser)]
#[command(name = "unisql")]
#[command(about = "Find scripts writing the same tables and unify them into SQL", long_about = None)]
#[command(version)]
enum Cli {
    /// Analyze every script under ROOT and write the JSON report
    Analyze {
        /// Directory scanned recursively for scripts
        root: PathBuf,

        /// Report destination (default: analysis_results.json)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// File name suffix of analyzed scripts (default: .py)
        #[arg(long)]
        suffix: Option<String>,

        /// Generation model name
        #[arg(long)]
        model: Option<String>,

        /// Characters of each script sent to the model
        #[arg(long)]
        max_prompt_chars: Option<usize>,

        /// API key (prefer the UNISQL_API_KEY environment variable)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Print the database connections found in each script, without calling the model
    Connections {
        /// Directory scanned recursively for scripts
        root: PathBuf,

        /// File name suffix of analyzed scripts (default: .py)
        #[arg(long)]
        suffix: Option<String>,
    },

    /// Print the resolved configuration as TOML
    Config {
        /// Directory whose unisql.toml is used
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

fn main() -> ExitCode {
    unisql_core::tracing::init_tracing("unisql=warn");

    let cli = Cli::parse();
    let result = match cli {
        Cli::Analyze {
            root,
            output,
            suffix,
            model,
            max_prompt_chars,
            api_key,
        } => commands::analyze(commands::AnalyzeArgs {
            root,
            output,
            suffix,
            model,
            max_prompt_chars,
            api_key,
        }),
        Cli::Connections { root, suffix } => commands::connections(&root, suffix),
        Cli::Config { root } => commands::show_config(&root),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", describe(&e));
            ExitCode::FAILURE
        }
    }
}

/// Prefix known unisql errors with their error code.
fn describe(error: &anyhow::Error) -> String {
    let coded = error
        .chain()
        .find_map(|cause| {
            if let Some(e) = cause.downcast_ref::<PipelineError>() {
                Some(e.coded_message())
            } else if let Some(e) = cause.downcast_ref::<ConfigError>() {
                Some(e.coded_message())
            } else if let Some(e) = cause.downcast_ref::<ScanError>() {
                Some(e.coded_message())
            } else {
                cause
                    .downcast_ref::<GenerationError>()
                    .map(|e| e.coded_message())
            }
        });
    match coded {
        Some(message) if error.chain().count() > 1 => format!("{message} ({error})"),
        Some(message) => message,
        None => format!("{error:#}"),
    }
}
