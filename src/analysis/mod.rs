//! Analysis tools over the exact engines
//!
//! This module provides parallel probability sweeps, the denominator
//! divisibility survey, and CSV/JSON export of the resulting tables.

pub mod export;
pub mod sweep;

pub use export::{write_csv, write_json, write_records};
pub use sweep::{
    DivisibilityRecord, ProbabilityRecord, divisibility_survey, ordered_boards, sweep_three_row,
    sweep_two_row,
};
