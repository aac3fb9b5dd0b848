//! Logging setup for applications using the builder
//!
//! The library itself only emits `tracing` events: factory calls at `trace`,
//! render summaries at `debug`, rejected input at `warn`. Applications that
//! want to see them install a subscriber, either their own or the one built
//! by [`init_logging`].
//!
//! # Environment Variables
//!
//! - `MERMAID_BUILDER_LOG_LEVEL`: log level or filter directive
//! - `RUST_LOG`: standard `tracing-subscriber` filter, used as a fallback
//! - `MERMAID_BUILDER_LOG_FORMAT`: `compact`, `pretty` or `json`
//!
//! # Filtering
//!
//! ```bash
//! # Only the subgraph renderer, at trace level
//! RUST_LOG="mermaid_builder::plugins::flowchart::subgraph=trace" cargo run --example nested
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

const LEVEL_ENV: &str = "MERMAID_BUILDER_LOG_LEVEL";
const FORMAT_ENV: &str = "MERMAID_BUILDER_LOG_FORMAT";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Single line per event
    #[default]
    Compact,
    /// Multi-line with source locations
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// All accepted format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Install a global `tracing` subscriber
///
/// `level` falls back to `MERMAID_BUILDER_LOG_LEVEL`, then `RUST_LOG`, then
/// `info`. `format` falls back to `MERMAID_BUILDER_LOG_FORMAT`, then
/// `compact`. Fails on an unknown format or if a global subscriber is
/// already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = level
        .map(str::to_string)
        .or_else(|| std::env::var(LEVEL_ENV).ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    let log_format = format
        .map(str::to_string)
        .or_else(|| std::env::var(FORMAT_ENV).ok())
        .unwrap_or_else(|| "compact".to_string());

    let format = LogFormat::from_str(&log_format)
        .map_err(|e| format!("Invalid log format: {}", e))?;

    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = Registry::default().with(filter);
    match format {
        LogFormat::Compact => registry
            .with(
                fmt::Layer::default()
                    .with_target(false)
                    .with_span_events(FmtSpan::NONE)
                    .compact(),
            )
            .try_init()?,
        LogFormat::Pretty => registry
            .with(
                fmt::Layer::default()
                    .with_file(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .pretty(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::Layer::default()
                    .with_span_events(FmtSpan::CLOSE)
                    .json(),
            )
            .try_init()?,
    }

    Ok(())
}

/// Install a subscriber with the environment-driven defaults
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
