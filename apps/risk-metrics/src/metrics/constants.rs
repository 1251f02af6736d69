//! Constants for risk metric calculations.

/// Fraction to percent.
pub const HUNDRED: f64 = 100.0;

/// Sample standard deviation needs two observations.
pub const MIN_VAR_OBSERVATIONS: usize = 2;

/// Expected shortfall needs at least one tail observation.
pub const MIN_TAIL_OBSERVATIONS: usize = 1;

/// Snap distance for `(1 - c) * n` before flooring.
pub const TAIL_COUNT_TOLERANCE: f64 = 1e-9;

/// Decimal places kept on currency amounts.
pub const CURRENCY_DP: u32 = 2;
