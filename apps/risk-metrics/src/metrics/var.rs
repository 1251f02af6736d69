//! Parametric Value at Risk under a Normal assumption.
//!
//! P&L observations are treated as fractional returns on the capital base.
//! The `(1 - c)` quantile `α` of `Normal(μ, σ)` is scaled to dollars as
//! `A - A·(α + 1)`.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use super::constants::{CURRENCY_DP, MIN_VAR_OBSERVATIONS};
use super::math::{mean, std_dev};
use super::normal::normal_quantile;
use super::types::VarEstimate;
use crate::error::{Result, RiskError};

const METRIC: &str = "VaR";

/// Reject confidence levels outside the open interval (0, 1).
pub fn validate_confidence(confidence: f64) -> Result<()> {
    if confidence > 0.0 && confidence < 1.0 {
        Ok(())
    } else {
        Err(RiskError::InvalidConfidence(confidence))
    }
}

/// Calculate parametric VaR.
///
/// Fails with `InsufficientData` below two observations. A constant series
/// has zero deviation and its quantile is the mean itself.
pub fn parametric_var(returns: &[f64], confidence: f64, aum: Decimal) -> Result<VarEstimate> {
    validate_confidence(confidence)?;

    let insufficient = || RiskError::InsufficientData {
        metric: METRIC,
        required: MIN_VAR_OBSERVATIONS,
        actual: returns.len(),
    };
    let mu = mean(returns).ok_or_else(insufficient)?;
    let sigma = std_dev(returns).ok_or_else(insufficient)?;

    let quantile = normal_quantile(1.0 - confidence, mu, sigma);

    let overflow = || RiskError::NumericOverflow { metric: METRIC };
    let alpha = Decimal::from_f64(quantile).ok_or_else(overflow)?;
    let scaled = alpha
        .checked_add(Decimal::ONE)
        .and_then(|growth| aum.checked_mul(growth))
        .ok_or_else(overflow)?;
    let var_amount = aum
        .checked_sub(scaled)
        .ok_or_else(overflow)?
        .round_dp(CURRENCY_DP);

    tracing::debug!(
        observations = returns.len(),
        mean = mu,
        std_dev = sigma,
        quantile,
        var_amount = %var_amount,
        "Parametric VaR computed"
    );

    Ok(VarEstimate {
        confidence,
        aum,
        mean: mu,
        std_dev: sigma,
        quantile,
        var_amount,
    })
}
