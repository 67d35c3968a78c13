//! Sweep command - Exact probability tables computed in parallel

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    analysis::{ProbabilityRecord, sweep_three_row, sweep_two_row, write_records},
    cli::{
        config::CommonConfig,
        output::{create_spinner, format_number, print_kv, print_section},
    },
    solver::Arithmetic,
};

#[derive(Parser, Debug)]
#[command(about = "Compute a table of exact probabilities")]
pub struct SweepArgs {
    #[arg(long, default_value_t = 8)]
    pub max_n1: i64,

    #[arg(long, default_value_t = 8)]
    pub max_n2: i64,

    #[arg(long, default_value_t = 8)]
    pub max_n3: i64,

    /// Use the two-row closed form: k up to --max-n2, n up to k + --max-n1
    #[arg(long)]
    pub two_row: bool,

    /// Skip reduction of intermediate sums in the three-row engine
    #[arg(long)]
    pub unnormalized: bool,

    /// Export the table to CSV or JSON instead of printing it
    #[arg(long)]
    pub export: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonConfig,
}

pub fn execute(args: SweepArgs) -> Result<()> {
    let spinner = if args.common.progress {
        Some(create_spinner("Computing probability table...")?)
    } else {
        None
    };
    let records = if args.two_row {
        sweep_two_row(args.max_n2, args.max_n1)?
    } else {
        let arithmetic = if args.unnormalized {
            Arithmetic::Unnormalized
        } else {
            Arithmetic::Normalized
        };
        sweep_three_row(args.max_n1, args.max_n2, args.max_n3, arithmetic)?
    };
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    print_section("Probability sweep");
    print_kv("Boards", &format_number(records.len()));

    match &args.export {
        Some(path) => {
            write_records(path, &records)?;
            println!("\n✓ Table exported to: {}", path.display());
        }
        None => print_table(&records),
    }

    Ok(())
}

fn print_table(records: &[ProbabilityRecord]) {
    println!();
    println!(
        "  {:>4} {:>4} {:>4}  {:>14}  {:<}",
        "n1", "n2", "n3", "value", "exact"
    );
    for record in records {
        println!(
            "  {:>4} {:>4} {:>4}  {:>14.10}  {}",
            record.n1, record.n2, record.n3, record.value, record.probability
        );
    }
}
