//! Risk calculator bundling VaR, CVaR and drawdown for one dataset.

use rust_decimal::Decimal;

use super::cvar::expected_shortfall;
use super::drawdown::drawdown_series;
use super::format::{format_currency, format_pct};
use super::types::RiskReport;
use super::var::{parametric_var, validate_confidence};
use crate::config::MetricsConfig;
use crate::data::TradeDataset;
use crate::error::Result;

const UNAVAILABLE: &str = "n/a";

/// Risk calculator for a strategy's trade P&L.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskCalculator {
    confidence: f64,
    aum: Decimal,
}

impl RiskCalculator {
    /// Create a new risk calculator.
    pub fn new(confidence: f64, aum: Decimal) -> Result<Self> {
        validate_confidence(confidence)?;
        Ok(Self { confidence, aum })
    }

    /// Create a calculator from the metrics configuration section.
    pub fn from_config(config: &MetricsConfig) -> Result<Self> {
        Self::new(config.confidence, config.aum)
    }

    /// Confidence level used for VaR and CVaR.
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Capital base used to scale VaR.
    #[must_use]
    pub const fn aum(&self) -> Decimal {
        self.aum
    }

    /// Calculate all risk metrics.
    ///
    /// VaR, CVaR and drawdown are computed independently; a failing metric
    /// is recorded in its slot of the report and the others still run.
    pub fn calculate(&self, dataset: &TradeDataset) -> RiskReport {
        let var = parametric_var(dataset.pnl(), self.confidence, self.aum);
        let cvar = expected_shortfall(dataset.pnl(), self.confidence);
        let drawdown = drawdown_series(dataset.cumulative(), dataset.dates());

        let report = RiskReport {
            observations: dataset.len(),
            confidence: self.confidence,
            var,
            cvar,
            drawdown,
        };

        for error in report.errors() {
            tracing::warn!(error = %error, reason = %error.code(), "Risk metric unavailable");
        }

        let var_text = report
            .var
            .as_ref()
            .map_or_else(|_| UNAVAILABLE.to_string(), |v| format_currency(v.var_amount));
        let cvar_text = report
            .cvar
            .as_ref()
            .map_or_else(|_| UNAVAILABLE.to_string(), |c| format_pct(c.cvar));
        let drawdown_text = report
            .drawdown
            .as_ref()
            .map_or_else(|_| UNAVAILABLE.to_string(), |d| format_pct(d.max_drawdown));

        tracing::info!(
            observations = report.observations,
            confidence = self.confidence,
            var = %var_text,
            cvar = %cvar_text,
            max_drawdown = %drawdown_text,
            complete = report.is_complete(),
            "Risk metrics calculated"
        );

        report
    }
}
