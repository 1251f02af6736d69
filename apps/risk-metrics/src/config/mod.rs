//! Configuration module for the risk metrics report.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation for the input, metric, report and logging settings.
//!
//! # Usage
//!
//! ```rust,ignore
//! use risk_metrics::config::{Config, load_config};
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//!
//! println!("confidence: {}", config.metrics.confidence);
//! ```

mod input;
mod metrics;
mod observability;
mod report;

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use input::InputConfig;
pub use metrics::MetricsConfig;
pub use observability::{LogFormat, LoggingConfig, ObservabilityConfig};
pub use report::ReportConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "RISK_METRICS_CONFIG";

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Input file configuration.
    #[serde(default)]
    pub input: InputConfig,
    /// Risk metric parameters.
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// Report output configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve the runtime configuration.
///
/// An explicit `RISK_METRICS_CONFIG` path must exist. Without it,
/// `config.yaml` is used when present and built-in defaults otherwise.
pub fn resolve_config() -> Result<Config, ConfigError> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.is_empty() => load_config(Some(&path)),
        _ if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(None),
        _ => Ok(Config::default()),
    }
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is a compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match cap.get(1).map(|m| std::env::var(m.as_str())) {
            Some(Ok(v)) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let confidence = config.metrics.confidence;
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(ConfigError::ValidationError(
            "metrics.confidence must be strictly between 0.0 and 1.0".to_string(),
        ));
    }

    if config.metrics.aum <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "metrics.aum must be positive".to_string(),
        ));
    }

    let columns = [
        ("input.pnl_column", &config.input.pnl_column),
        ("input.cumulative_column", &config.input.cumulative_column),
        ("input.date_column", &config.input.date_column),
    ];
    for (name, value) in columns {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{name} must not be empty"
            )));
        }
    }

    if !config.input.cumulative_base.is_finite() {
        return Err(ConfigError::ValidationError(
            "input.cumulative_base must be finite".to_string(),
        ));
    }

    if config.report.chart_width == 0 || config.report.chart_height == 0 {
        return Err(ConfigError::ValidationError(
            "report.chart_width and report.chart_height must be positive".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!((config.metrics.confidence - 0.99).abs() < f64::EPSILON);
        assert_eq!(config.metrics.aum, dec!(1000000));
        assert_eq!(config.input.pnl_column, "trade_pnl");
        assert_eq!(config.input.cumulative_column, "cumulative_pnl");
        assert_eq!(config.input.date_column, "date");
        assert!(!config.input.derive_cumulative);
        assert_eq!(config.report.chart_path, "risk_chart.svg");
        assert_eq!(config.observability.logging.level, "info");
        assert_eq!(config.observability.logging.format, LogFormat::Compact);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_empty_config() {
        let config = match load_config_from_string("{}") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_minimal_config() {
        let yaml = r"
metrics:
  confidence: 0.95
";

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load minimal config: {e}"),
        };
        assert!((config.metrics.confidence - 0.95).abs() < f64::EPSILON);
        assert_eq!(config.metrics.aum, dec!(1000000)); // Default value
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "path: ${RISK_METRICS_TEST_NONEXISTENT_VAR:-trades.csv}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "path: trades.csv");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_env_var_with_default_uses_existing() {
        // PATH should always exist
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "chart_path: ${RISK_METRICS_TEST_UNLIKELY_TO_EXIST}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "chart_path: ");
    }

    #[test]
    fn test_validation_confidence_out_of_range() {
        for confidence in ["1.0", "0.0", "1.5", "-0.1"] {
            let yaml = format!("metrics:\n  confidence: {confidence}\n");
            let Err(err) = load_config_from_string(&yaml) else {
                panic!("expected error for confidence {confidence}");
            };
            assert!(err.to_string().contains("confidence"));
        }
    }

    #[test]
    fn test_validation_non_positive_aum() {
        let yaml = r"
metrics:
  aum: 0
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero aum");
        };
        assert!(err.to_string().contains("aum"));
    }

    #[test]
    fn test_validation_empty_column() {
        let yaml = r#"
input:
  pnl_column: ""
"#;
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for empty column");
        };
        assert!(err.to_string().contains("input.pnl_column"));
    }

    #[test]
    fn test_validation_zero_chart_size() {
        let yaml = r"
report:
  chart_width: 0
";
        assert!(load_config_from_string(yaml).is_err());
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let yaml = r"
observability:
  logging:
    format: xml
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected parse error for unknown format");
        };
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
input:
  path: "data/strategy.csv"
  pnl_column: "pnl"
  cumulative_column: "equity"
  date_column: "day"
  derive_cumulative: true
  cumulative_base: 1000000

metrics:
  confidence: 0.975
  aum: "2500000.50"

report:
  chart_path: "out/chart.svg"
  chart_width: 1200
  chart_height: 800

observability:
  logging:
    level: "debug"
    format: "json"
"#;

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };

        assert_eq!(config.input.path, "data/strategy.csv");
        assert_eq!(config.input.pnl_column, "pnl");
        assert_eq!(config.input.cumulative_column, "equity");
        assert_eq!(config.input.date_column, "day");
        assert!(config.input.derive_cumulative);
        assert!((config.input.cumulative_base - 1_000_000.0).abs() < f64::EPSILON);
        assert!((config.metrics.confidence - 0.975).abs() < f64::EPSILON);
        assert_eq!(config.metrics.aum, dec!(2500000.50));
        assert_eq!(config.report.chart_path, "out/chart.svg");
        assert_eq!(config.report.chart_width, 1200);
        assert_eq!(config.report.chart_height, 800);
        assert_eq!(config.observability.logging.level, "debug");
        assert_eq!(config.observability.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_missing_file() {
        let Err(err) = load_config(Some("/nonexistent/risk-metrics.yaml")) else {
            panic!("expected read error");
        };
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
