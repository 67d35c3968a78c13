//! CLI infrastructure for the Chomp probability toolkit
//!
//! This module provides the command-line interface for the exact engines,
//! the divisibility probe, sweeps, and Monte-Carlo comparisons.

pub mod commands;
pub mod config;
pub mod output;
