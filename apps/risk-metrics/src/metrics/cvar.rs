//! Empirical Conditional Value at Risk (expected shortfall).

use super::constants::{MIN_TAIL_OBSERVATIONS, TAIL_COUNT_TOLERANCE};
use super::math::mean;
use super::types::CvarEstimate;
use super::var::validate_confidence;
use crate::error::{Result, RiskError};

/// Number of worst observations in the tail: `floor((1 - c) * n)`.
///
/// Products within `1e-9` of an integer snap to it first, so that the
/// binary representation of `1 - c` never costs a whole observation. This
/// differs from a plain floor exactly at those points: `c = 0.9, n = 10`
/// gives `k = 1` here, where `floor((1.0 - 0.9) * 10.0)` is `0`.
pub fn tail_count(confidence: f64, sample_size: usize) -> usize {
    let raw = (1.0 - confidence) * sample_size as f64;
    let nearest = raw.round();
    let snapped = if (raw - nearest).abs() < TAIL_COUNT_TOLERANCE {
        nearest
    } else {
        raw.floor()
    };
    snapped.max(0.0) as usize
}

/// Calculate CVaR as the mean of the worst `k` returns.
///
/// The cutoff is positional, so ties at the boundary never change which
/// values are averaged. An empty tail is an error rather than NaN.
pub fn expected_shortfall(returns: &[f64], confidence: f64) -> Result<CvarEstimate> {
    validate_confidence(confidence)?;

    let k = tail_count(confidence, returns.len());
    if k < MIN_TAIL_OBSERVATIONS {
        return Err(RiskError::InsufficientData {
            metric: "CVaR",
            required: MIN_TAIL_OBSERVATIONS,
            actual: k,
        });
    }

    let mut sorted = returns.to_vec();
    sorted.sort_by(f64::total_cmp);

    let cvar = mean(&sorted[..k]).ok_or(RiskError::InsufficientData {
        metric: "CVaR",
        required: MIN_TAIL_OBSERVATIONS,
        actual: 0,
    })?;

    tracing::debug!(
        observations = returns.len(),
        tail_count = k,
        cvar,
        "Expected shortfall computed"
    );

    Ok(CvarEstimate {
        confidence,
        tail_count: k,
        sample_size: returns.len(),
        cvar,
    })
}
