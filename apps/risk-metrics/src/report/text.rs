//! Plain-text risk summary.

use std::fmt::Write;

use crate::error::RiskError;
use crate::metrics::{RiskReport, format_confidence, format_currency, format_pct};

fn unavailable(error: &RiskError) -> String {
    format!("unavailable ({}: {error})", error.code())
}

/// Render the report as the lines printed on stdout.
///
/// A metric that could not be computed gets its own line naming the error
/// code, and the other metrics are still shown.
#[must_use]
pub fn render_text(report: &RiskReport) -> String {
    let mut out = String::new();
    let label = format_confidence(report.confidence);

    let _ = writeln!(out, "Observations: {}", report.observations);

    let var = report
        .var
        .as_ref()
        .map_or_else(unavailable, |v| format_currency(v.var_amount));
    let _ = writeln!(out, "Value at Risk ({label}): {var}");

    let cvar = report
        .cvar
        .as_ref()
        .map_or_else(unavailable, |c| format_pct(c.cvar));
    let _ = writeln!(out, "Conditional Value at Risk ({label}): {cvar}");

    match &report.drawdown {
        Ok(drawdown) => {
            let _ = write!(out, "Maximum Drawdown: {}", format_pct(drawdown.max_drawdown));
            let span = (
                drawdown.points.get(drawdown.peak_index),
                drawdown.points.get(drawdown.trough_index),
            );
            if let (Some(peak), Some(trough)) = span {
                if drawdown.max_drawdown < 0.0 {
                    let _ = write!(
                        out,
                        " ({} to {}, {} periods)",
                        peak.timestamp,
                        trough.timestamp,
                        drawdown.max_drawdown_duration()
                    );
                }
            }
            out.push('\n');
        }
        Err(e) => {
            let _ = writeln!(out, "Maximum Drawdown: {}", unavailable(e));
        }
    }

    out
}
