//! Bar chart rendering
//!
//! A two-category horizontal bar chart in text. Category order is fixed:
//! Shard A first, Shard B second.

use crate::engine::Counts;
use std::fmt::Write;

/// Chart title, carried from the original report
pub const CHART_TITLE: &str = "Distribuição de IDs por Shard";

/// Value axis label
pub const AXIS_LABEL: &str = "Quantidade de IDs";

/// Widest bar, in characters
const MAX_BAR_WIDTH: usize = 40;

/// Render the distribution chart for a completed run
pub fn render_chart(counts: &Counts) -> String {
    let categories = [("Shard A (Par)", counts.even), ("Shard B (Ímpar)", counts.odd)];
    let scale = counts.even.max(counts.odd).max(1);

    let mut out = String::new();
    let _ = writeln!(out, "{CHART_TITLE}");
    for (label, value) in categories {
        let width = value * MAX_BAR_WIDTH / scale;
        let _ = writeln!(out, "{label:>16} | {} {value}", "█".repeat(width));
    }
    let _ = writeln!(out, "{:>16} | ({AXIS_LABEL})", "");

    out
}
