//! Input file configuration.

use serde::{Deserialize, Serialize};

/// Trade P&L CSV location and column mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path to the CSV file.
    #[serde(default = "default_input_path")]
    pub path: String,
    /// Column holding per-trade P&L.
    #[serde(default = "default_pnl_column")]
    pub pnl_column: String,
    /// Column holding cumulative P&L.
    #[serde(default = "default_cumulative_column")]
    pub cumulative_column: String,
    /// Column holding date labels.
    #[serde(default = "default_date_column")]
    pub date_column: String,
    /// Derive cumulative P&L as a running sum instead of reading it.
    #[serde(default)]
    pub derive_cumulative: bool,
    /// Starting value added to the derived running sum.
    ///
    /// Drawdown needs a positive running peak, so with the default of zero
    /// an opening loss fails the drawdown metric. Set this to the starting
    /// capital when deriving cumulative P&L.
    #[serde(default)]
    pub cumulative_base: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            pnl_column: default_pnl_column(),
            cumulative_column: default_cumulative_column(),
            date_column: default_date_column(),
            derive_cumulative: false,
            cumulative_base: 0.0,
        }
    }
}

fn default_input_path() -> String {
    "trades.csv".to_string()
}

fn default_pnl_column() -> String {
    "trade_pnl".to_string()
}

fn default_cumulative_column() -> String {
    "cumulative_pnl".to_string()
}

fn default_date_column() -> String {
    "date".to_string()
}
