//! Divisibility commands - Probe the denominator structure of exact probabilities

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    ExactFraction,
    analysis::{divisibility_survey, ordered_boards, write_records},
    cli::{
        config::CommonConfig,
        output::{create_spinner, format_number, print_kv, print_probability, print_section},
    },
    solver::{is_denominator_multiple, minimal_divisible_exponent, three_row_win_probability_exact},
};

#[derive(Parser, Debug)]
#[command(about = "Check whether the denominator of 1/2 - P divides s(s-1)...(s-n)")]
pub struct DivisibilityArgs {
    /// Number of extra factors in the falling product
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub n: i64,

    /// Probability to test as `p/q`; computed from the board when omitted
    #[arg(long)]
    pub prob: Option<ExactFraction>,

    #[arg(allow_negative_numbers = true)]
    pub n1: i64,

    #[arg(allow_negative_numbers = true)]
    pub n2: i64,

    #[arg(allow_negative_numbers = true, default_value_t = 0)]
    pub n3: i64,
}

pub fn execute(args: DivisibilityArgs) -> Result<()> {
    let probability = match args.prob {
        Some(prob) => prob,
        None => three_row_win_probability_exact(args.n1, args.n2, args.n3)?,
    };
    let divides = is_denominator_multiple(&probability, args.n, args.n1, args.n2, args.n3)?;
    let minimal = minimal_divisible_exponent(&probability, args.n1, args.n2, args.n3)?;

    print_section(&format!(
        "Divisibility on ({}, {}, {}) with n = {}",
        args.n1, args.n2, args.n3, args.n
    ));
    print_probability(&probability);
    print_kv(
        "1/2 - P",
        &(&ExactFraction::half() - &probability).reduce().to_string(),
    );
    print_kv("Divides", if divides { "yes" } else { "no" });
    print_kv(
        "Minimal n",
        &minimal.map_or_else(|| "none".to_string(), |n| n.to_string()),
    );

    Ok(())
}

#[derive(Parser, Debug)]
#[command(about = "Run the divisibility check over a grid of boards")]
pub struct SurveyArgs {
    /// Number of extra factors in the falling product
    #[arg(long, short = 'n')]
    pub n: i64,

    #[arg(long, default_value_t = 6)]
    pub max_n1: i64,

    #[arg(long, default_value_t = 6)]
    pub max_n2: i64,

    #[arg(long, default_value_t = 0)]
    pub max_n3: i64,

    /// Export the survey to CSV or JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonConfig,
}

pub fn execute_survey(args: SurveyArgs) -> Result<()> {
    let boards = ordered_boards(args.max_n1, args.max_n2, args.max_n3)?;

    let spinner = if args.common.progress {
        Some(create_spinner(&format!(
            "Surveying {} boards...",
            format_number(boards.len())
        ))?)
    } else {
        None
    };
    let records = divisibility_survey(args.n, &boards)?;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    print_section(&format!("Divisibility survey with n = {}", args.n));
    let mut holds = 0;
    let mut fails = 0;
    let mut degenerate = 0;
    for record in &records {
        let verdict = match record.divides {
            Some(true) => {
                holds += 1;
                "yes"
            }
            Some(false) => {
                fails += 1;
                "no"
            }
            None => {
                degenerate += 1;
                "too few cells"
            }
        };
        if args.common.verbose || record.divides == Some(false) {
            println!(
                "  ({}, {}, {})  P = {:<24} divides: {}",
                record.n1,
                record.n2,
                record.n3,
                record.probability.to_string(),
                verdict
            );
        }
    }

    println!();
    print_kv("Boards", &format_number(records.len()));
    print_kv("Divides", &format_number(holds));
    print_kv("Does not divide", &format_number(fails));
    print_kv("Too few cells", &format_number(degenerate));

    if let Some(path) = &args.export {
        write_records(path, &records)?;
        println!("\n✓ Survey exported to: {}", path.display());
    }

    Ok(())
}
