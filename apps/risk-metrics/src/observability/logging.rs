//! Tracing subscriber setup.
//!
//! `RUST_LOG` overrides the configured level when set.
//!
//! # Usage
//!
//! ```rust,ignore
//! use risk_metrics::{config::LoggingConfig, observability::init_logging};
//!
//! init_logging(&LoggingConfig::default());
//! tracing::info!("ready");
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Build the log filter from `RUST_LOG`, falling back to the configured level.
#[must_use]
pub fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&config.level))
}

fn default_filter(level: &str) -> EnvFilter {
    let directive = format!("{level},risk_metrics={level}");
    EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Invalid log level '{level}': {e}, using info");
        EnvFilter::new("info")
    })
}

/// Install the global tracing subscriber.
///
/// Returns `false` when a subscriber was already installed, which happens
/// when tests initialise logging more than once.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let env_filter = build_env_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().with_target(false).try_init(),
    };

    result.is_ok()
}
