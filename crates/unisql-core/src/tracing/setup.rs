//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the unisql tracing/logging system.
///
/// Reads the `UNISQL_LOG` environment variable for per-crate log levels.
/// Format: `UNISQL_LOG=unisql_analysis=debug,unisql_core=info`
///
/// Falls back to `default_filter` if `UNISQL_LOG` is not set or is invalid.
/// Output goes to stderr so it never interleaves with JSON printed on stdout.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
