//! Subcommands of the `chomp` binary

pub mod divisibility;
pub mod probability;
pub mod recurrence;
pub mod simulate;
pub mod sweep;
