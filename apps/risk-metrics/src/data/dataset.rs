//! Loaded trade P&L series.

use crate::error::{Result, RiskError};

/// Per-period P&L, cumulative P&L and date labels of one strategy.
///
/// All three series share one length and chronological order. The dataset
/// is read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeDataset {
    dates: Vec<String>,
    pnl: Vec<f64>,
    cumulative: Vec<f64>,
}

impl TradeDataset {
    /// Build a dataset from columns loaded side by side.
    pub fn new(dates: Vec<String>, pnl: Vec<f64>, cumulative: Vec<f64>) -> Result<Self> {
        if pnl.len() != cumulative.len() {
            return Err(RiskError::LengthMismatch {
                left_name: "trade_pnl",
                left: pnl.len(),
                right_name: "cumulative_pnl",
                right: cumulative.len(),
            });
        }
        if dates.len() != pnl.len() {
            return Err(RiskError::LengthMismatch {
                left_name: "trade_pnl",
                left: pnl.len(),
                right_name: "date",
                right: dates.len(),
            });
        }
        Ok(Self {
            dates,
            pnl,
            cumulative,
        })
    }

    /// Build a dataset whose cumulative series is `base` plus the running
    /// sum of `pnl`.
    pub fn from_pnl(dates: Vec<String>, pnl: Vec<f64>, base: f64) -> Result<Self> {
        let mut total = base;
        let cumulative = pnl
            .iter()
            .map(|v| {
                total += v;
                total
            })
            .collect();
        Self::new(dates, pnl, cumulative)
    }

    /// Per-period P&L.
    #[must_use]
    pub fn pnl(&self) -> &[f64] {
        &self.pnl
    }

    /// Cumulative P&L.
    #[must_use]
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Date labels.
    #[must_use]
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pnl.len()
    }

    /// Whether the dataset has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pnl.is_empty()
    }
}
