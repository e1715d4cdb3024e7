//! Pair Sum Solver - CLI
//!
//! Demonstration harness for the balanced-pairing solver: solve and analyze
//! individual sequences, cross-check against brute force, and benchmark.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pair_sum_solver::{
    commands::{
        VerifyConfig, analyze_sequence, run_bench, run_verify, solve_sequence,
        solve_sequence_in_place,
    },
    output::{print_analysis_result, print_bench_result, print_solve_result, print_verify_result},
};

#[derive(Parser)]
#[command(
    name = "pair_sum_solver",
    about = "Minimize the maximum pair sum over an even-length integer array",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a sequence: show the balanced pairs and the minimized maximum
    Solve {
        /// The integers to pair up (even count)
        #[arg(required = true, allow_negative_numbers = true, num_args = 2..)]
        nums: Vec<i64>,

        /// Show verbose output with pair-sum statistics
        #[arg(short, long)]
        verbose: bool,

        /// Sort the working buffer in place instead of taking a copy
        #[arg(short = 'i', long)]
        in_place: bool,
    },

    /// Analyze how evenly a sequence's pair sums can be balanced
    Analyze {
        /// The integers to analyze (even count)
        #[arg(required = true, allow_negative_numbers = true, num_args = 2..)]
        nums: Vec<i64>,
    },

    /// Cross-check the greedy solver against brute force on random sequences
    Verify {
        /// Number of random sequences to test
        #[arg(short = 'n', long, default_value = "1000")]
        trials: usize,

        /// Largest sequence length to generate (kept small: brute force
        /// enumerates (n-1)!! pairings)
        #[arg(short = 'l', long, default_value = "10")]
        max_len: usize,

        /// Values are drawn from -max-value..=max-value
        #[arg(short = 'm', long, default_value = "100")]
        max_value: i64,
    },

    /// Benchmark solver throughput on large random sequences
    Bench {
        /// Elements per sequence (rounded down to even)
        #[arg(short, long, default_value = "1000000")]
        size: usize,

        /// Number of timed rounds
        #[arg(short, long, default_value = "10")]
        rounds: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            nums,
            verbose,
            in_place,
        } => run_solve_command(nums, verbose, in_place),
        Commands::Analyze { nums } => run_analyze_command(&nums),
        Commands::Verify {
            trials,
            max_len,
            max_value,
        } => {
            run_verify_command(trials, max_len, max_value);
            Ok(())
        }
        Commands::Bench { size, rounds } => {
            run_bench_command(size, rounds);
            Ok(())
        }
    }
}

fn run_solve_command(mut nums: Vec<i64>, verbose: bool, in_place: bool) -> Result<()> {
    let result = if in_place {
        solve_sequence_in_place(&mut nums)?
    } else {
        solve_sequence(&nums)?
    };
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(nums: &[i64]) -> Result<()> {
    let result = analyze_sequence(nums)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_verify_command(trials: usize, max_len: usize, max_value: i64) {
    println!("Verifying greedy against brute force on {trials} random sequences...");

    let mut config = VerifyConfig::new(trials);
    config.max_len = max_len;
    config.max_value = max_value;

    let result = run_verify(&config);
    print_verify_result(&result);
}

fn run_bench_command(size: usize, rounds: usize) {
    println!("Benchmarking {rounds} rounds of {size}-element sequences...");

    let result = run_bench(size, rounds);
    print_bench_result(&result);
}
