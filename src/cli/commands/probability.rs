//! Probability commands - Exact win probabilities for two- and three-row boards

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::CommonConfig,
        output::{create_spinner, format_number, print_kv, print_probability, print_section},
    },
    game::Board,
    solver::{
        Arithmetic, ThreeRowSolver, ThreeRowState, two_row_win_probability,
        two_row_win_probability_exact,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Exact win probability on a two-row board (closed form)")]
pub struct TwoRowArgs {
    /// Length of the top row
    #[arg(allow_negative_numbers = true)]
    pub n: i64,

    /// Length of the bottom row
    #[arg(allow_negative_numbers = true)]
    pub k: i64,

    /// Also draw the board
    #[arg(long)]
    pub show_board: bool,
}

pub fn execute_two_row(args: TwoRowArgs) -> Result<()> {
    let exact = two_row_win_probability_exact(args.n, args.k)?;
    let float = two_row_win_probability(args.n, args.k)?;

    print_section(&format!("Two-row board ({}, {})", args.n, args.k));
    if args.show_board {
        let board = Board::from_row_lengths(&[args.n as usize, args.k as usize])?;
        println!("\n{board}");
    }
    print_probability(&exact);
    print_kv("Float (direct)", &format!("{float:.12}"));

    Ok(())
}

#[derive(Parser, Debug)]
#[command(about = "Exact win probability on a three-row board (memoized recursion)")]
pub struct ThreeRowArgs {
    #[arg(allow_negative_numbers = true)]
    pub n1: i64,

    #[arg(allow_negative_numbers = true)]
    pub n2: i64,

    #[arg(allow_negative_numbers = true)]
    pub n3: i64,

    /// Skip reduction of intermediate sums
    #[arg(long)]
    pub unnormalized: bool,

    #[command(flatten)]
    pub common: CommonConfig,
}

pub fn execute_three_row(args: ThreeRowArgs) -> Result<()> {
    let state = ThreeRowState::new(args.n1, args.n2, args.n3)?;
    let arithmetic = if args.unnormalized {
        Arithmetic::Unnormalized
    } else {
        Arithmetic::Normalized
    };
    let solver = ThreeRowSolver::new(arithmetic);

    let spinner = if args.common.progress {
        Some(create_spinner(&format!(
            "Solving ({}, {}, {})...",
            state.a, state.b, state.c
        ))?)
    } else {
        None
    };
    let started = Instant::now();
    let solution = solver.solve(state)?;
    let elapsed = started.elapsed();
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    print_section(&format!(
        "Three-row board ({}, {}, {})",
        state.a, state.b, state.c
    ));
    print_probability(&solution.probability);
    print_kv("Arithmetic", &format!("{arithmetic:?}"));
    print_kv("Memoized states", &format_number(solution.states_visited));
    if args.common.verbose {
        print_kv("Cells", &state.total_cells().to_string());
        print_kv("Elapsed", &format!("{elapsed:.2?}"));
    }

    Ok(())
}
