//! Drawdown of cumulative P&L from its running peak.

use super::types::{DrawdownPoint, DrawdownSeries};
use crate::error::{Result, RiskError};

/// Running maximum, `out[i] = max(values[0..=i])`.
pub fn running_max(values: &[f64]) -> Vec<f64> {
    let mut peak = f64::NEG_INFINITY;
    values
        .iter()
        .map(|v| {
            peak = peak.max(*v);
            peak
        })
        .collect()
}

/// Drawdown curve, `cum[i] / roll_max[i] - 1`.
///
/// A zero running peak fails with `DivisionByZero` and a negative one with
/// `NonPositivePeak`; neither yields a meaningful ratio.
pub fn drawdowns(cumulative: &[f64]) -> Result<Vec<f64>> {
    if cumulative.is_empty() {
        return Err(RiskError::InsufficientData {
            metric: "drawdown",
            required: 1,
            actual: 0,
        });
    }

    running_max(cumulative)
        .into_iter()
        .zip(cumulative)
        .enumerate()
        .map(|(index, (peak, equity))| {
            if peak == 0.0 {
                Err(RiskError::DivisionByZero { index })
            } else if peak < 0.0 {
                Err(RiskError::NonPositivePeak { index, peak })
            } else {
                Ok(equity / peak - 1.0)
            }
        })
        .collect()
}

/// Maximum drawdown, `min(drawdown)`.
pub fn max_drawdown(cumulative: &[f64]) -> Result<f64> {
    Ok(drawdowns(cumulative)?
        .into_iter()
        .fold(0.0, f64::min))
}

/// Full drawdown series labelled with input dates.
pub fn drawdown_series(cumulative: &[f64], timestamps: &[String]) -> Result<DrawdownSeries> {
    if timestamps.len() != cumulative.len() {
        return Err(RiskError::LengthMismatch {
            left_name: "cumulative_pnl",
            left: cumulative.len(),
            right_name: "date",
            right: timestamps.len(),
        });
    }

    let values = drawdowns(cumulative)?;
    let peaks = running_max(cumulative);

    let mut max_drawdown = 0.0;
    let mut trough_index = 0;
    let mut peak_index = 0;
    let mut last_peak_index = 0;

    let mut points = Vec::with_capacity(cumulative.len());
    for (idx, ((equity, peak), drawdown)) in cumulative.iter().zip(&peaks).zip(&values).enumerate() {
        if *drawdown == 0.0 {
            last_peak_index = idx;
        }
        if *drawdown < max_drawdown {
            max_drawdown = *drawdown;
            trough_index = idx;
            peak_index = last_peak_index;
        }
        points.push(DrawdownPoint {
            timestamp: timestamps[idx].clone(),
            equity: *equity,
            peak: *peak,
            drawdown: *drawdown,
        });
    }

    tracing::debug!(
        points = points.len(),
        max_drawdown,
        peak_index,
        trough_index,
        "Drawdown series computed"
    );

    Ok(DrawdownSeries {
        points,
        max_drawdown,
        peak_index,
        trough_index,
    })
}
