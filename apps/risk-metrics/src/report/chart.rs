//! Static SVG chart of cumulative P&L and drawdown.
//!
//! Two stacked panels share the horizontal axis: cumulative P&L on top,
//! drawdown below as a filled area under zero. The x-axis carries no
//! labels; the date range is recorded in the SVG `<desc>`.

use std::fmt::Write;

use crate::metrics::{DrawdownSeries, format_pct};

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 36.0;
const MARGIN_BOTTOM: f64 = 20.0;
const PANEL_GAP: f64 = 40.0;
/// Share of the plot height given to the cumulative P&L panel.
const TOP_PANEL_SHARE: f64 = 0.6;

const EQUITY_COLOR: &str = "#1f77b4";
const DRAWDOWN_COLOR: &str = "#d62728";

/// Plot area of one panel in SVG user units.
#[derive(Debug, Clone, Copy)]
struct Panel {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Panel {
    fn x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        let fraction = index as f64 / (count - 1) as f64;
        self.left + fraction * self.width
    }

    fn y(&self, value: f64, (lo, hi): (f64, f64)) -> f64 {
        self.top + (hi - value) / (hi - lo) * self.height
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Value range padded so flat series still get a visible band.
fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if hi > lo {
        let pad = (hi - lo) * 0.05;
        (lo - pad, hi + pad)
    } else {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.05 };
        (lo - pad, hi + pad)
    }
}

fn polyline_points(panel: &Panel, values: &[f64], range: (f64, f64)) -> String {
    let mut points = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            points.push(' ');
        }
        let _ = write!(
            points,
            "{:.2},{:.2}",
            panel.x(i, values.len()),
            panel.y(*v, range)
        );
    }
    points
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn draw_frame(svg: &mut String, panel: &Panel, title: &str, labels: (&str, &str)) {
    let _ = writeln!(
        svg,
        r##"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="#cccccc"/>"##,
        panel.left, panel.top, panel.width, panel.height
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{:.2}" y="{:.2}" font-size="14" font-weight="bold">{}</text>"#,
        panel.left,
        panel.top - 8.0,
        escape(title)
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end">{}</text>"#,
        panel.left - 6.0,
        panel.top + 11.0,
        escape(labels.1)
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end">{}</text>"#,
        panel.left - 6.0,
        panel.bottom(),
        escape(labels.0)
    );
}

/// Render the cumulative P&L and drawdown panels as an SVG document.
#[must_use]
pub fn render_chart(series: &DrawdownSeries, width: u32, height: u32) -> String {
    let (w, h) = (f64::from(width), f64::from(height));
    let plot_width = (w - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let plot_height = (h - MARGIN_TOP - MARGIN_BOTTOM - PANEL_GAP).max(2.0);

    let top = Panel {
        left: MARGIN_LEFT,
        top: MARGIN_TOP,
        width: plot_width,
        height: plot_height * TOP_PANEL_SHARE,
    };
    let bottom = Panel {
        left: MARGIN_LEFT,
        top: top.bottom() + PANEL_GAP,
        width: plot_width,
        height: plot_height * (1.0 - TOP_PANEL_SHARE),
    };

    let equity: Vec<f64> = series.points.iter().map(|p| p.equity).collect();
    let drawdown = series.values();
    let equity_range = value_range(equity.iter().copied());
    // Drawdown panel always includes the zero line.
    let drawdown_range = value_range(drawdown.iter().copied().chain(std::iter::once(0.0)));

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
    );
    if let (Some(first), Some(last)) = (series.points.first(), series.points.last()) {
        let _ = writeln!(
            svg,
            "  <desc>{} to {}, {} observations</desc>",
            escape(&first.timestamp),
            escape(&last.timestamp),
            series.points.len()
        );
    }
    let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#);

    let equity_labels = (
        format!("{:.2}", equity_range.0),
        format!("{:.2}", equity_range.1),
    );
    draw_frame(
        &mut svg,
        &top,
        "Cumulative P&L",
        (equity_labels.0.as_str(), equity_labels.1.as_str()),
    );
    if !equity.is_empty() {
        let _ = writeln!(
            svg,
            r#"  <polyline id="cumulative-pnl" fill="none" stroke="{EQUITY_COLOR}" stroke-width="1.5" points="{}"/>"#,
            polyline_points(&top, &equity, equity_range)
        );
    }

    let drawdown_labels = (format_pct(drawdown_range.0), format_pct(drawdown_range.1));
    draw_frame(
        &mut svg,
        &bottom,
        &format!("Drawdown (max {})", format_pct(series.max_drawdown)),
        (drawdown_labels.0.as_str(), drawdown_labels.1.as_str()),
    );
    let zero_y = bottom.y(0.0, drawdown_range);
    let _ = writeln!(
        svg,
        r##"  <line x1="{:.2}" y1="{zero_y:.2}" x2="{:.2}" y2="{zero_y:.2}" stroke="#888888" stroke-dasharray="4 3"/>"##,
        bottom.left,
        bottom.left + bottom.width
    );
    if !drawdown.is_empty() {
        let n = drawdown.len();
        let _ = writeln!(
            svg,
            r#"  <polygon id="drawdown" fill="{DRAWDOWN_COLOR}" fill-opacity="0.3" stroke="{DRAWDOWN_COLOR}" stroke-width="1" points="{:.2},{zero_y:.2} {} {:.2},{zero_y:.2}"/>"#,
            bottom.x(0, n),
            polyline_points(&bottom, &drawdown, drawdown_range),
            bottom.x(n - 1, n)
        );
    }

    svg.push_str("</svg>\n");
    svg
}
