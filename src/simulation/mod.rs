//! Monte-Carlo simulation of uniformly random Chomp
//!
//! This module provides:
//! - A pipeline that plays many games on a rectangular board
//! - Observers for progress bars and JSONL game logs
//! - Exact reference values to compare the estimates with

pub mod observers;
pub mod pipeline;
pub mod reference;

pub use observers::{GameRecord, JsonlObserver, ProgressObserver, SimulationObserver};
pub use pipeline::{ConfidenceInterval, SimulationConfig, SimulationPipeline, SimulationResult};
pub use reference::exact_reference;
