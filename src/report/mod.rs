//! Reporting module
//!
//! Formatting and export only: counts, the three ID lists, a two-category
//! bar chart, a result table, and the CSV export. Nothing here alters the
//! partition result.

mod chart;
mod export;
mod summary;

pub use chart::render_chart;
pub use export::{to_csv_bytes, write_csv, CSV_FILE_NAME, CSV_MIME};
pub use summary::{render_summary, render_table};

#[cfg(test)]
mod tests;
