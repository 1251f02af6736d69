//! Risk metric calculation for strategy trade P&L.
//!
//! Implements the three tail-risk statistics reported per run:
//! - Value at Risk (parametric, Normal assumption, scaled to AUM)
//! - Conditional Value at Risk (empirical expected shortfall)
//! - Drawdown curve and maximum drawdown from cumulative P&L
//!
//! Each statistic is a pure function over a slice; `RiskCalculator`
//! bundles them into a single `RiskReport`.

mod calculator;
mod constants;
mod cvar;
mod drawdown;
mod format;
mod math;
mod normal;
mod types;
mod var;

pub use calculator::RiskCalculator;
pub use cvar::{expected_shortfall, tail_count};
pub use drawdown::{drawdown_series, drawdowns, max_drawdown, running_max};
pub use format::{format_confidence, format_currency, format_pct};
pub use math::{mean, std_dev};
pub use normal::{norm_cdf, norm_ppf, normal_quantile};
pub use types::{CvarEstimate, DrawdownPoint, DrawdownSeries, RiskReport, VarEstimate};
pub use var::{parametric_var, validate_confidence};
