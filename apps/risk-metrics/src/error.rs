//! Error taxonomy for risk metric computation.
//!
//! Load failures abort the run. Metric failures are held per metric in the
//! report, so one failed statistic never hides the others.
//!
//! # Error Codes
//!
//! | Code | Exit | Usage |
//! |------|------|-------|
//! | `MISSING_COLUMN` | 3 | Required CSV column absent |
//! | `INVALID_VALUE` | 3 | Numeric cell failed to parse or is not finite |
//! | `LENGTH_MISMATCH` | 3 | Dataset columns differ in length |
//! | `CSV_ERROR` | 3 | Malformed CSV |
//! | `INSUFFICIENT_DATA` | 4 | Sample too small for the statistic |
//! | `DIVISION_BY_ZERO` | 4 | Zero running peak in drawdown |
//! | `NON_POSITIVE_PEAK` | 4 | Negative running peak in drawdown |
//! | `NUMERIC_OVERFLOW` | 4 | Result does not fit a currency amount |
//! | `INVALID_CONFIDENCE` | 2 | Confidence outside (0, 1) |
//! | `IO_ERROR` | 5 | File read/write failure |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for risk metric failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Input errors
    /// Required column missing from the input file.
    MissingColumn,
    /// Cell value could not be used as a number.
    InvalidValue,
    /// Dataset columns have different lengths.
    LengthMismatch,
    /// CSV reader failure.
    CsvError,

    // Computation errors
    /// Not enough observations for the statistic.
    InsufficientData,
    /// Running peak equal to zero.
    DivisionByZero,
    /// Running peak below zero.
    NonPositivePeak,
    /// Result outside the representable currency range.
    NumericOverflow,

    // Parameter errors
    /// Confidence level outside the open unit interval.
    InvalidConfidence,

    // System errors
    /// Filesystem failure.
    IoError,
}

impl ErrorCode {
    /// Get the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidConfidence => 2,

            Self::MissingColumn | Self::InvalidValue | Self::LengthMismatch | Self::CsvError => 3,

            Self::InsufficientData
            | Self::DivisionByZero
            | Self::NonPositivePeak
            | Self::NumericOverflow => 4,

            Self::IoError => 5,
        }
    }

    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::MissingColumn => "MISSING_COLUMN",
            Self::InvalidValue => "INVALID_VALUE",
            Self::LengthMismatch => "LENGTH_MISMATCH",
            Self::CsvError => "CSV_ERROR",
            Self::InsufficientData => "INSUFFICIENT_DATA",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::NonPositivePeak => "NON_POSITIVE_PEAK",
            Self::NumericOverflow => "NUMERIC_OVERFLOW",
            Self::InvalidConfidence => "INVALID_CONFIDENCE",
            Self::IoError => "IO_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Errors raised while loading data or computing risk metrics.
#[derive(Debug, Error)]
pub enum RiskError {
    /// Required column absent from the input header.
    #[error("missing required column '{column}'")]
    MissingColumn {
        /// Column name that was expected.
        column: String,
    },

    /// Sample too short to compute a statistic.
    #[error("insufficient data for {metric}: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Metric being computed.
        metric: &'static str,
        /// Minimum number of observations (or tail observations) needed.
        required: usize,
        /// Number actually available.
        actual: usize,
    },

    /// Running maximum of cumulative P&L is zero.
    #[error("running peak is zero at index {index}; drawdown ratio undefined")]
    DivisionByZero {
        /// Zero-based position in the cumulative series.
        index: usize,
    },

    /// Running maximum of cumulative P&L is negative.
    #[error("running peak {peak} at index {index} is negative; drawdown ratio undefined")]
    NonPositivePeak {
        /// Zero-based position in the cumulative series.
        index: usize,
        /// Running peak at that position.
        peak: f64,
    },

    /// Result cannot be represented as a currency amount.
    #[error("{metric} result is outside the representable currency range")]
    NumericOverflow {
        /// Metric being computed.
        metric: &'static str,
    },

    /// Confidence level outside (0, 1).
    #[error("confidence level must be strictly between 0 and 1, got {0}")]
    InvalidConfidence(f64),

    /// Numeric cell could not be parsed or is not finite.
    #[error("invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        /// One-based data row (header excluded).
        row: usize,
        /// Column name.
        column: String,
        /// Raw cell contents.
        value: String,
    },

    /// Columns of a dataset have different lengths.
    #[error("series length mismatch: {left_name} has {left}, {right_name} has {right}")]
    LengthMismatch {
        /// Name of the first series.
        left_name: &'static str,
        /// Length of the first series.
        left: usize,
        /// Name of the second series.
        right_name: &'static str,
        /// Length of the second series.
        right: usize,
    },

    /// Malformed CSV.
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem failure.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Path being read or written.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },
}

impl RiskError {
    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingColumn { .. } => ErrorCode::MissingColumn,
            Self::InsufficientData { .. } => ErrorCode::InsufficientData,
            Self::DivisionByZero { .. } => ErrorCode::DivisionByZero,
            Self::NonPositivePeak { .. } => ErrorCode::NonPositivePeak,
            Self::NumericOverflow { .. } => ErrorCode::NumericOverflow,
            Self::InvalidConfidence(_) => ErrorCode::InvalidConfidence,
            Self::InvalidValue { .. } => ErrorCode::InvalidValue,
            Self::LengthMismatch { .. } => ErrorCode::LengthMismatch,
            Self::Csv(_) => ErrorCode::CsvError,
            Self::Io { .. } => ErrorCode::IoError,
        }
    }

    /// Missing column.
    #[must_use]
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// IO failure on a path.
    #[must_use]
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for risk metric operations.
pub type Result<T> = std::result::Result<T, RiskError>;
