// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::option_if_let_else,
        clippy::items_after_statements
    )
)]

//! Risk Metrics - Strategy Tail-Risk Report
//!
//! Loads a strategy's trade P&L from CSV and reports three risk figures:
//!
//! - **Value at Risk**: parametric, Normal fit to per-trade P&L, scaled to AUM
//! - **Conditional Value at Risk**: mean of the worst `floor((1 - c) * n)` trades
//! - **Drawdown**: decline of cumulative P&L from its running peak
//!
//! # Pipeline
//!
//! `data` (CSV → `TradeDataset`) → `metrics` (`RiskCalculator` →
//! `RiskReport`) → `report` (text, SVG chart).
//!
//! Every stage is synchronous and runs once. Degenerate input fails with a
//! typed `RiskError` instead of producing NaN or infinity.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// YAML configuration with environment interpolation.
pub mod config;
/// CSV loading into a trade P&L dataset.
pub mod data;
/// Error taxonomy and exit codes.
pub mod error;
/// VaR, CVaR and drawdown computation.
pub mod metrics;
/// Logging setup.
pub mod observability;
/// Text and chart output.
pub mod report;

pub use config::{Config, ConfigError, load_config, resolve_config};
pub use data::{TradeDataset, load_csv};
pub use error::{ErrorCode, Result, RiskError};
pub use metrics::{RiskCalculator, RiskReport};
