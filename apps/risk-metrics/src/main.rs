//! Risk Metrics Binary
//!
//! Computes VaR, CVaR and drawdown for one trade P&L file, prints the
//! summary on stdout and writes the chart.
//!
//! # Usage
//!
//! ```bash
//! RISK_METRICS_CONFIG=config.yaml risk-metrics
//! ```
//!
//! # Environment Variables
//!
//! - `RISK_METRICS_CONFIG`: Config file path (default: config.yaml, optional)
//! - `RUST_LOG`: Log filter, overrides `observability.logging.level`

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use risk_metrics::config::{Config, LoggingConfig, resolve_config};
use risk_metrics::observability::init_logging;
use risk_metrics::report::{render_text, write_chart};
use risk_metrics::{RiskCalculator, RiskError, load_csv};

/// Exit code for configuration errors.
const CONFIG_EXIT: u8 = 2;

/// Exit code for failures that carry no `RiskError`.
const GENERIC_EXIT: u8 = 1;

fn main() -> ExitCode {
    load_dotenv();

    let config = match resolve_config() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LoggingConfig::default());
            tracing::error!(error = %e, "Configuration error");
            return ExitCode::from(CONFIG_EXIT);
        }
    };
    init_logging(&config.observability.logging);

    match run(&config) {
        Ok(code) => code,
        Err(e) => {
            let risk_error = e.downcast_ref::<RiskError>();
            let code = risk_error.map_or(GENERIC_EXIT, |err| err.code().exit_code());
            tracing::error!(
                error = %format!("{e:#}"),
                reason = risk_error.map_or("UNKNOWN", |err| err.code().reason()),
                "Risk report failed"
            );
            ExitCode::from(code)
        }
    }
}

/// Load, compute, print and write the report.
///
/// Metrics that fail are reported in place; the first failure sets the
/// exit code once everything available has been printed.
fn run(config: &Config) -> anyhow::Result<ExitCode> {
    let path = Path::new(&config.input.path);

    tracing::info!(
        path = %path.display(),
        confidence = config.metrics.confidence,
        aum = %config.metrics.aum,
        "Starting risk report"
    );

    let dataset = load_csv(path, &config.input)
        .with_context(|| format!("loading trades from {}", path.display()))?;

    let calculator = RiskCalculator::from_config(&config.metrics)?;
    let report = calculator.calculate(&dataset);

    print!("{}", render_text(&report));

    write_chart(&report, &config.report).context("writing chart")?;

    if let Some(error) = report.errors().next() {
        tracing::error!(
            error = %error,
            reason = error.code().reason(),
            "Risk report incomplete"
        );
        return Ok(ExitCode::from(error.code().exit_code()));
    }

    tracing::info!("Risk report complete");
    Ok(ExitCode::SUCCESS)
}

/// Load .env file from the current directory, if present.
fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load .env: {e}");
        }
    }
}
