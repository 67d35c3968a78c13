//! Simulation commands - Monte-Carlo play checked against the exact engines

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    cli::{
        config::CommonConfig,
        output::{format_number, print_kv, print_probability, print_section, print_subsection},
    },
    simulation::{
        JsonlObserver, ProgressObserver, SimulationConfig, SimulationPipeline, SimulationResult,
        exact_reference,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Simulate uniformly random games and compare with the exact value")]
pub struct SimulateArgs {
    #[arg(long, short = 'r', default_value_t = 2)]
    pub rows: usize,

    #[arg(long, short = 'c', default_value_t = 3)]
    pub cols: usize,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 10_000)]
    pub games: usize,

    /// Load the simulation settings from a JSON file instead
    #[arg(long, conflicts_with_all = ["rows", "cols", "games"])]
    pub config: Option<PathBuf>,

    /// Write every game as one JSON line
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Export the result summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonConfig,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            let mut config = SimulationConfig::load(path)?;
            if args.common.seed.is_some() {
                config.seed = args.common.seed;
            }
            config
        }
        None => SimulationConfig {
            games: args.games,
            rows: args.rows,
            cols: args.cols,
            seed: args.common.seed,
        },
    };
    config.validate()?;

    print_section(&format!(
        "Simulating {} games on a {}x{} board",
        format_number(config.games),
        config.rows,
        config.cols
    ));
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }

    let mut pipeline = SimulationPipeline::new(config.clone());
    if args.common.progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.log {
        pipeline = pipeline.with_observer(Box::new(JsonlObserver::new(path)?));
    }
    let result = pipeline.run()?;

    print_subsection("Simulation");
    print_result(&result);

    match exact_reference(config.rows, config.cols)? {
        Some(exact) => {
            print_subsection("Exact");
            print_probability(&exact);
            let value = exact.to_f64();
            print_kv(
                "Difference",
                &format!("{:+.6}", result.win_rate - value),
            );
            print_kv(
                "Within 95% CI",
                if result.confidence_interval.contains(value) {
                    "yes"
                } else {
                    "no"
                },
            );
        }
        None => println!("\nNo exact engine covers boards with more than three rows."),
    }

    if let Some(path) = &args.log {
        println!("\n✓ Game log written to: {}", path.display());
    }
    if let Some(path) = &args.export {
        result.save(path)?;
        println!("✓ Results exported to: {}", path.display());
    }

    Ok(())
}

fn print_result(result: &SimulationResult) {
    print_kv("Games", &format_number(result.total_games));
    print_kv("First player wins", &format_number(result.first_player_wins));
    print_kv("Win rate", &format!("{:.6}", result.win_rate));
    print_kv(
        "95% CI",
        &format!(
            "[{:.6}, {:.6}]",
            result.confidence_interval.lower, result.confidence_interval.upper
        ),
    );
    print_kv("Mean game length", &format!("{:.2}", result.mean_game_length));
}

#[derive(Parser, Debug)]
#[command(about = "Compare the two-row closed form with simulation on 2xi boards")]
pub struct CompareArgs {
    /// Largest width to compare
    #[arg(long, default_value_t = 5)]
    pub max_k: usize,

    /// Number of games per board
    #[arg(long, short = 'g', default_value_t = 10_000)]
    pub games: usize,

    #[command(flatten)]
    pub common: CommonConfig,
}

pub fn execute_compare(args: CompareArgs) -> Result<()> {
    if args.max_k == 0 {
        return Err(anyhow!("--max-k must be at least 1"));
    }

    print_section("Theory vs simulation on 2xk boards");
    println!(
        "  {:>3}  {:>12}  {:>12}  {:>10}  {:>6}",
        "k", "exact", "simulated", "diff", "in CI"
    );

    let mut outside = 0;
    for k in 1..=args.max_k {
        let exact = exact_reference(2, k)?
            .ok_or_else(|| anyhow!("no exact value for a 2x{k} board"))?
            .to_f64();
        let config = SimulationConfig {
            games: args.games,
            rows: 2,
            cols: k,
            seed: args.common.seed_for(k as u64),
        };
        let result = SimulationPipeline::new(config).run()?;
        let inside = result.confidence_interval.contains(exact);
        if !inside {
            outside += 1;
        }
        println!(
            "  {:>3}  {:>12.6}  {:>12.6}  {:>+10.6}  {:>6}",
            k,
            exact,
            result.win_rate,
            result.win_rate - exact,
            if inside { "yes" } else { "no" }
        );
    }

    println!();
    print_kv(
        "Outside 95% CI",
        &format!("{outside} of {}", args.max_k),
    );

    Ok(())
}
