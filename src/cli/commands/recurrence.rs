//! Recurrence command - Print the two-row recurrence vectors

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    analysis::write_records,
    cli::output::{print_kv, print_section},
    solver::two_row_recurrence_sequence,
};

#[derive(Parser, Debug)]
#[command(about = "Print the recurrence vectors (a_i, b_i) for i = 1..K")]
pub struct RecurrenceArgs {
    /// Last index to print
    #[arg(long, short = 'k', allow_negative_numbers = true)]
    pub k: i64,

    /// Export the vectors to CSV or JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RecurrenceRow {
    k: u64,
    a: String,
    b: String,
}

pub fn execute(args: RecurrenceArgs) -> Result<()> {
    let sequence = two_row_recurrence_sequence(args.k)?;

    print_section(&format!("Two-row recurrence, k = 1..{}", args.k));
    for vector in &sequence {
        print_kv(&format!("k = {}", vector.k), &format!("({}, {})", vector.a, vector.b));
    }

    if let Some(path) = &args.export {
        let rows: Vec<RecurrenceRow> = sequence
            .iter()
            .map(|vector| RecurrenceRow {
                k: vector.k,
                a: vector.a.to_string(),
                b: vector.b.to_string(),
            })
            .collect();
        write_records(path, &rows)?;
        println!("\n✓ Vectors exported to: {}", path.display());
    }

    Ok(())
}
