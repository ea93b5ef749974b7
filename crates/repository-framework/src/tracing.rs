//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log verbosity comes from the `RUST_LOG` environment variable and defaults to `info`.
//! Module paths are hidden (`with_target(false)`); every framework log line carries an
//! `entity_type` field instead.
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show every lookup, filter and search with match counts
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework only
//! RUST_LOG=repository_framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Repository loading**: entity type and record count (`Repository loaded`)
//! - **Queries**: `Get`, `Filter` and `Search` with the id or number of matches
//! - **Misses**: `Not found` warnings with the requested id
//!
//! ## Output Formats
//!
//! [`LogFormat`] selects between `compact` (the default), `pretty` and `json` output.

use clap::ValueEnum;
use std::fmt;
use tracing_subscriber::EnvFilter;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Initializes the global tracing subscriber.
///
/// Must be called once, at process start.
pub fn setup_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}
