//! Parallel sweeps and their CSV export.

mod common;

use chomp::{
    analysis::{sweep_three_row, sweep_two_row, write_csv, write_records},
    solver::{Arithmetic, three_row_win_probability_exact},
};
use common::frac;

#[test]
fn parallel_sweep_matches_single_solves() {
    let records = sweep_three_row(5, 4, 3, Arithmetic::Normalized).unwrap();
    for record in &records {
        let expected = three_row_win_probability_exact(
            record.n1 as i64,
            record.n2 as i64,
            record.n3 as i64,
        )
        .unwrap();
        assert_eq!(record.probability, expected);
        assert_eq!(record.value, expected.to_f64());
    }
}

#[test]
fn variants_produce_identical_tables() {
    let normalized = sweep_three_row(4, 4, 4, Arithmetic::Normalized).unwrap();
    let unnormalized = sweep_three_row(4, 4, 4, Arithmetic::Unnormalized).unwrap();
    assert_eq!(normalized.len(), unnormalized.len());
    for (a, b) in normalized.iter().zip(&unnormalized) {
        assert_eq!((a.n1, a.n2, a.n3), (b.n1, b.n2, b.n3));
        assert_eq!(a.probability.to_string(), b.probability.to_string());
    }
}

#[test]
fn negative_bounds_are_rejected() {
    assert!(sweep_three_row(-1, 2, 2, Arithmetic::Normalized).is_err());
    assert!(sweep_two_row(3, -1).is_err());
}

#[test]
fn two_row_table_round_trips_through_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two_row.csv");
    let records = sweep_two_row(4, 2).unwrap();
    write_csv(&path, &records).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["n1", "n2", "n3", "probability", "value"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.unwrap()).collect();
    assert_eq!(rows.len(), records.len());
    let four_by_four = rows
        .iter()
        .find(|row| &row[0] == "4" && &row[1] == "4")
        .unwrap();
    assert_eq!(frac(&four_by_four[3]), frac("113/240"));
}

#[test]
fn export_format_follows_extension() {
    let dir = tempfile::tempdir().unwrap();
    let records = sweep_three_row(2, 2, 2, Arithmetic::Normalized).unwrap();

    let csv_path = dir.path().join("table.csv");
    write_records(&csv_path, &records).unwrap();
    assert!(std::fs::read_to_string(&csv_path).unwrap().starts_with("n1,"));

    let json_path = dir.path().join("table.json");
    write_records(&json_path, &records).unwrap();
    assert!(std::fs::read_to_string(&json_path).unwrap().starts_with('['));
}
