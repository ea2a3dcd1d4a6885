//! Tests for reporting module

use super::*;
use crate::config::SimulationConfig;
use crate::engine::{run_simulation, SimulationReport};
use crate::partition::{records, ShardLabel};
use crate::source::RandomSampler;
use pretty_assertions::assert_eq;

fn sample_report() -> SimulationReport {
    let config = SimulationConfig::manual("10, 23, 45, 66");
    let mut sampler = RandomSampler::new();
    run_simulation(&config, &mut sampler)
        .unwrap()
        .report()
        .unwrap()
        .clone()
}

// ============================================================================
// Summary Tests
// ============================================================================

#[test]
fn test_summary_contains_counts_and_lists() {
    let summary = render_summary(&sample_report());

    assert!(summary.contains("Total IDs:        4"));
    assert!(summary.contains("Shard A (Par):    2"));
    assert!(summary.contains("Shard B (Ímpar):  2"));
    assert!(summary.contains("Original list: [10, 23, 45, 66]"));
    assert!(summary.contains("Shard A (Par): [10, 66]"));
    assert!(summary.contains("Shard B (Ímpar): [23, 45]"));
}

#[test]
fn test_table_has_one_row_per_id_in_input_order() {
    let table = render_table(&sample_report());
    let rows: Vec<&str> = table.lines().skip(2).collect();

    assert_eq!(rows.len(), 4);
    assert!(rows[0].contains("10") && rows[0].contains("A (Par)"));
    assert!(rows[1].contains("23") && rows[1].contains("B (Ímpar)"));
    assert!(rows[2].contains("45") && rows[2].contains("B (Ímpar)"));
    assert!(rows[3].contains("66") && rows[3].contains("A (Par)"));
}

// ============================================================================
// Chart Tests
// ============================================================================

#[test]
fn test_chart_category_order_and_labels() {
    let report = sample_report();
    let chart = render_chart(&report.counts());
    let lines: Vec<&str> = chart.lines().collect();

    assert_eq!(lines[0], chart::CHART_TITLE);
    assert!(lines[1].contains("Shard A (Par)"));
    assert!(lines[2].contains("Shard B (Ímpar)"));
    assert!(lines[3].contains(chart::AXIS_LABEL));
}

#[test]
fn test_chart_bar_lengths_are_proportional() {
    let counts = crate::engine::Counts {
        total: 6,
        even: 4,
        odd: 2,
    };
    let chart = render_chart(&counts);
    let lines: Vec<&str> = chart.lines().collect();

    let even_bar = lines[1].matches('█').count();
    let odd_bar = lines[2].matches('█').count();
    assert_eq!(even_bar, 40);
    assert_eq!(odd_bar, 20);
    assert!(lines[1].ends_with("4"));
    assert!(lines[2].ends_with("2"));
}

#[test]
fn test_chart_handles_empty_bucket() {
    let counts = crate::engine::Counts {
        total: 3,
        even: 3,
        odd: 0,
    };
    let chart = render_chart(&counts);
    let lines: Vec<&str> = chart.lines().collect();
    assert_eq!(lines[2].matches('█').count(), 0);
}

// ============================================================================
// CSV Export Tests
// ============================================================================

#[test]
fn test_csv_bytes_are_exact() {
    let report = sample_report();
    let bytes = to_csv_bytes(&report.records).unwrap();
    let expected = "ID,Shard\n10,A (Par)\n23,B (Ímpar)\n45,B (Ímpar)\n66,A (Par)\n";
    assert_eq!(String::from_utf8(bytes).unwrap(), expected);
}

#[test]
fn test_csv_header_written_for_empty_records() {
    let bytes = to_csv_bytes(&[]).unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), "ID,Shard\n");
}

#[test]
fn test_csv_negative_ids() {
    let recs = records(&[-3, -4, 0]);
    let bytes = to_csv_bytes(&recs).unwrap();
    let expected = "ID,Shard\n-3,B (Ímpar)\n-4,A (Par)\n0,A (Par)\n";
    assert_eq!(String::from_utf8(bytes).unwrap(), expected);
}

#[test]
fn test_csv_round_trip() {
    let report = sample_report();
    let bytes = to_csv_bytes(&report.records).unwrap();

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    assert_eq!(
        reader.headers().unwrap(),
        &csv::StringRecord::from(vec!["ID", "Shard"])
    );

    let mut ids = Vec::new();
    let mut labels = Vec::new();
    for row in reader.records() {
        let row = row.unwrap();
        ids.push(row[0].parse::<i64>().unwrap());
        labels.push(row[1].to_string());
    }

    assert_eq!(ids, report.ids);
    for (id, label) in ids.iter().zip(&labels) {
        assert_eq!(label, ShardLabel::of(*id).as_str());
    }
}

#[test]
fn test_write_csv_to_file() {
    let report = sample_report();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CSV_FILE_NAME);

    write_csv(&report.records, &path).unwrap();

    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk, to_csv_bytes(&report.records).unwrap());
}

#[test]
fn test_export_constants() {
    assert_eq!(CSV_FILE_NAME, "distribuicao_shards.csv");
    assert_eq!(CSV_MIME, "text/csv");
}
