//! Risk metric parameters.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Confidence level and capital base for VaR and CVaR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Confidence level, strictly between 0 and 1.
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    /// Assets under management used to scale VaR to dollars.
    #[serde(default = "default_aum")]
    pub aum: Decimal,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            confidence: default_confidence(),
            aum: default_aum(),
        }
    }
}

const fn default_confidence() -> f64 {
    0.99
}

fn default_aum() -> Decimal {
    dec!(1000000)
}
