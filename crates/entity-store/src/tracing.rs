//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! ## Configuration
//!
//! - **Filtering** comes from `RUST_LOG`; without it everything at `info` and above is shown.
//! - **Format** is either compact (spans inline, no module prefix) or JSON lines for log shippers.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: startup and shutdown with the final record count
//! - **Store Operations**: FindById, FindAll, Save, Remove with ids and sizes
//! - **Service Operations**: one span per call with the arguments recorded
//!
//! ```bash
//! RUST_LOG=info cargo run             # compact
//! RUST_LOG=debug cargo run            # full payloads on every Save
//! CATALOG_LOG_FORMAT=json cargo run   # JSON lines
//! ```

use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Output format of the subscriber installed by [`setup_tracing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Initializes the tracing subscriber. Call once, at process start.
pub fn setup_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Compact => builder
            .with_target(false) // entity_type / observer fields identify the source
            .compact()
            .init(),
        LogFormat::Json => builder.json().init(),
    }
}
