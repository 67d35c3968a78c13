//! Exact win probabilities for Chomp under uniformly random play
//!
//! This crate provides:
//! - Unnormalized exact rational arithmetic over big integers
//! - A closed-form two-row engine driven by an integer matrix recurrence
//! - A memoized three-row engine with normalized and unnormalized variants
//! - A probe of the denominator structure of exact probabilities
//! - A board, random agents, and a Monte-Carlo simulation pipeline
//! - Parallel sweeps with CSV/JSON export, and the `chomp` CLI

pub mod analysis;
pub mod cli;
pub mod error;
pub mod fraction;
pub mod game;
pub mod simulation;
pub mod solver;

pub use error::{Error, Result};
pub use fraction::ExactFraction;
