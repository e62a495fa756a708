//! Tracing setup for both binaries.
//!
//! `ENVIRONMENT=production` (or `prod`) writes one JSON object per event so a
//! log collector can index the signal fields; any other value writes plain
//! coloured lines. `RUST_LOG` selects the level, `info` when unset or invalid.

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_subscriber::{EnvFilter, Layer, Registry};

pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn for_environment(env: &str) -> Self {
        if is_production(env) {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

pub fn is_production(env: &str) -> bool {
    matches!(env.trim().to_lowercase().as_str(), "production" | "prod")
}

/// Filter from a `RUST_LOG`-style directive, falling back to `info`.
pub fn filter_from(directive: Option<&str>) -> EnvFilter {
    directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

fn output_layer(format: LogFormat, filter: EnvFilter) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stdout)
            .with_filter(filter)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_ansi(true)
            .with_writer(std::io::stdout)
            .with_filter(filter)
            .boxed(),
    }
}

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging() {
    let format = LogFormat::for_environment(&get_environment());
    let directive = std::env::var("RUST_LOG").ok();
    let filter = filter_from(directive.as_deref());

    tracing_subscriber::registry()
        .with(output_layer(format, filter))
        .init();
}
