//! Report rendering and output.
//!
//! - `text`: human-readable summary printed on stdout
//! - `chart`: two-panel SVG of cumulative P&L and drawdown

mod chart;
mod text;

use std::path::{Path, PathBuf};

pub use chart::render_chart;
pub use text::render_text;

use crate::config::ReportConfig;
use crate::error::{Result, RiskError};
use crate::metrics::RiskReport;

/// Write `contents` to `path`, creating missing parent directories.
pub fn write_report_file(path: &Path, contents: &str) -> Result<()> {
    let display = || path.display().to_string();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RiskError::io(display(), e))?;
    }
    std::fs::write(path, contents).map_err(|e| RiskError::io(display(), e))
}

/// Write the chart when it is enabled and the drawdown curve is available.
///
/// Returns the path written, if any.
pub fn write_chart(report: &RiskReport, config: &ReportConfig) -> Result<Option<PathBuf>> {
    if config.chart_path.is_empty() {
        return Ok(None);
    }
    let Ok(drawdown) = &report.drawdown else {
        tracing::warn!("Drawdown unavailable, chart not written");
        return Ok(None);
    };

    let path = PathBuf::from(&config.chart_path);
    let svg = render_chart(drawdown, config.chart_width, config.chart_height);
    write_report_file(&path, &svg)?;
    tracing::info!(path = %path.display(), "Chart written");
    Ok(Some(path))
}
