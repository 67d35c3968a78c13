//! Chomp CLI - Exact and simulated win probabilities for random Chomp
//!
//! This CLI provides a unified interface for:
//! - The two-row recurrence and closed form
//! - The memoized three-row engine
//! - Probing the denominator structure of exact probabilities
//! - Monte-Carlo simulation checked against the exact values
//! - Parallel sweeps exported to CSV or JSON

use anyhow::Result;
use chomp::cli::commands::{divisibility, probability, recurrence, simulate, sweep};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chomp")]
#[command(version, about = "Win probabilities for uniformly random Chomp", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the two-row recurrence vectors
    Recurrence(recurrence::RecurrenceArgs),

    /// Exact probability on a two-row board
    TwoRow(probability::TwoRowArgs),

    /// Exact probability on a three-row board
    ThreeRow(probability::ThreeRowArgs),

    /// Check the denominator divisibility property on one board
    Divisibility(divisibility::DivisibilityArgs),

    /// Check the divisibility property over a grid of boards
    Survey(divisibility::SurveyArgs),

    /// Simulate random games on a rectangular board
    Simulate(simulate::SimulateArgs),

    /// Compare theory and simulation on 2xk boards
    Compare(simulate::CompareArgs),

    /// Compute a table of exact probabilities in parallel
    Sweep(sweep::SweepArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Recurrence(args) => recurrence::execute(args),
        Commands::TwoRow(args) => probability::execute_two_row(args),
        Commands::ThreeRow(args) => probability::execute_three_row(args),
        Commands::Divisibility(args) => divisibility::execute(args),
        Commands::Survey(args) => divisibility::execute_survey(args),
        Commands::Simulate(args) => simulate::execute(args),
        Commands::Compare(args) => simulate::execute_compare(args),
        Commands::Sweep(args) => sweep::execute(args),
    }
}
