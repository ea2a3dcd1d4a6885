//! Text summary and table rendering

use crate::engine::SimulationReport;
use std::fmt::Write;

/// Render the counts and the three ID lists as text
pub fn render_summary(report: &SimulationReport) -> String {
    let counts = report.counts();
    let mut out = String::new();

    // writeln! into a String cannot fail
    let _ = writeln!(out, "Total IDs:        {}", counts.total);
    let _ = writeln!(out, "Shard A (Par):    {}", counts.even);
    let _ = writeln!(out, "Shard B (Ímpar):  {}", counts.odd);
    let _ = writeln!(out);
    let _ = writeln!(out, "Original list: {}", format_ids(&report.ids));
    let _ = writeln!(out, "Shard A (Par): {}", format_ids(&report.partition.evens));
    let _ = writeln!(
        out,
        "Shard B (Ímpar): {}",
        format_ids(&report.partition.odds)
    );

    out
}

/// Render the result records as a two-column table, one row per input ID
pub fn render_table(report: &SimulationReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{:>12}  Shard", "ID");
    let _ = writeln!(out, "{:>12}  ---------", "----");
    for record in &report.records {
        let _ = writeln!(out, "{:>12}  {}", record.id, record.shard);
    }

    out
}

fn format_ids(ids: &[i64]) -> String {
    let joined = ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
