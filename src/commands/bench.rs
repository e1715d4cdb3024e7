//! Benchmark command
//!
//! Times the greedy solver on large random sequences.

use crate::solver::min_max_pair_sum;
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchResult {
    pub size: usize,
    pub rounds: usize,
    pub round_times: Vec<Duration>,
    pub fastest: Duration,
    pub slowest: Duration,
    pub average: Duration,
    pub total: Duration,
    pub elements_per_second: f64,
}

/// Benchmark the solver on `rounds` fresh random sequences of `size` elements
///
/// `size` is rounded down to an even value; a size below 2 becomes 2.
///
/// # Panics
///
/// Panics only if a round produces an odd-length sequence, which the
/// construction rules out.
#[must_use]
pub fn run_bench(size: usize, rounds: usize) -> BenchResult {
    let size = (size / 2).max(1) * 2;

    let mut rng = rand::rng();
    let mut round_times = Vec::with_capacity(rounds);
    let total_start = Instant::now();

    for _ in 0..rounds {
        let values: Vec<i64> = (0..size).map(|_| rng.random_range(-1000..=1000)).collect();

        let start = Instant::now();
        let result = min_max_pair_sum(&values).expect("even length");
        round_times.push(start.elapsed());

        // Keep the call from being optimized out
        std::hint::black_box(result);
    }

    let total = total_start.elapsed();
    let fastest = round_times.iter().copied().min().unwrap_or_default();
    let slowest = round_times.iter().copied().max().unwrap_or_default();
    let summed: Duration = round_times.iter().sum();
    let average = if rounds > 0 {
        summed / rounds as u32
    } else {
        Duration::ZERO
    };

    let solve_seconds = summed.as_secs_f64();
    let elements_per_second = if solve_seconds > 0.0 {
        (size * rounds) as f64 / solve_seconds
    } else {
        0.0
    };

    BenchResult {
        size,
        rounds,
        round_times,
        fastest,
        slowest,
        average,
        total,
        elements_per_second,
    }
}
