//! Report output configuration.

use serde::{Deserialize, Serialize};

/// Where and how to write the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// SVG chart path; empty disables the chart.
    #[serde(default = "default_chart_path")]
    pub chart_path: String,
    /// Chart width in pixels.
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,
    /// Chart height in pixels.
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart_path: default_chart_path(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

fn default_chart_path() -> String {
    "risk_chart.svg".to_string()
}

const fn default_chart_width() -> u32 {
    1000
}

const fn default_chart_height() -> u32 {
    600
}
