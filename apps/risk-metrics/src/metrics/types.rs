//! Core types for risk metric results.

use rust_decimal::Decimal;

use crate::error::RiskError;

/// Parametric Value at Risk estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct VarEstimate {
    /// Confidence level (e.g., 0.99).
    pub confidence: f64,
    /// Capital base the returns are expressed against.
    pub aum: Decimal,
    /// Sample mean of the returns.
    pub mean: f64,
    /// Sample standard deviation of the returns.
    pub std_dev: f64,
    /// `(1 - confidence)` quantile of the fitted Normal (fractional return).
    pub quantile: f64,
    /// Dollar VaR, `aum - aum * (quantile + 1)`, rounded to cents.
    pub var_amount: Decimal,
}

/// Empirical Conditional Value at Risk (expected shortfall).
#[derive(Debug, Clone, PartialEq)]
pub struct CvarEstimate {
    /// Confidence level (e.g., 0.99).
    pub confidence: f64,
    /// Number of worst observations averaged.
    pub tail_count: usize,
    /// Total observations.
    pub sample_size: usize,
    /// Mean of the tail (fractional return, e.g., -0.02 = -2%).
    pub cvar: f64,
}

/// Drawdown tracking point.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawdownPoint {
    /// Date label from the input.
    pub timestamp: String,
    /// Cumulative P&L.
    pub equity: f64,
    /// Running peak of cumulative P&L so far.
    pub peak: f64,
    /// `equity / peak - 1` (zero at new highs, negative below the peak).
    pub drawdown: f64,
}

/// Full drawdown curve with its deepest episode.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawdownSeries {
    /// One point per input observation.
    pub points: Vec<DrawdownPoint>,
    /// Minimum of the drawdown curve (e.g., -0.25 = 25% below peak).
    pub max_drawdown: f64,
    /// Index of the running peak preceding the deepest trough.
    pub peak_index: usize,
    /// Index of the deepest trough.
    pub trough_index: usize,
}

impl DrawdownSeries {
    /// Periods between the peak and the deepest trough.
    #[must_use]
    pub const fn max_drawdown_duration(&self) -> usize {
        self.trough_index - self.peak_index
    }

    /// Drawdown values only, in input order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.drawdown).collect()
    }
}

/// All risk metrics computed for one dataset.
///
/// Each metric is computed independently, so one failing statistic never
/// hides the others.
#[derive(Debug)]
pub struct RiskReport {
    /// Number of P&L observations.
    pub observations: usize,
    /// Confidence level used for VaR and CVaR.
    pub confidence: f64,
    /// Value at Risk.
    pub var: Result<VarEstimate, RiskError>,
    /// Conditional Value at Risk.
    pub cvar: Result<CvarEstimate, RiskError>,
    /// Drawdown curve.
    pub drawdown: Result<DrawdownSeries, RiskError>,
}

impl RiskReport {
    /// Whether every metric was computed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.var.is_ok() && self.cvar.is_ok() && self.drawdown.is_ok()
    }

    /// Failures in report order: VaR, CVaR, drawdown.
    pub fn errors(&self) -> impl Iterator<Item = &RiskError> {
        [
            self.var.as_ref().err(),
            self.cvar.as_ref().err(),
            self.drawdown.as_ref().err(),
        ]
        .into_iter()
        .flatten()
    }
}
