//! Randomized verification command
//!
//! Cross-checks the greedy solver against brute-force enumeration on random
//! small sequences. Trials are independent, so they run in parallel.

use crate::solver::{brute_force_min_max_pair_sum, min_max_pair_sum};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a verification run
pub struct VerifyConfig {
    pub trials: usize,
    /// Largest sequence length to generate; clamped to an even value >= 2.
    /// Brute force visits (n-1)!! pairings, so keep this small.
    pub max_len: usize,
    /// Values are drawn uniformly from `-max_value..=max_value`; clamped to
    /// at least 1 so the range is never empty
    pub max_value: i64,
}

impl VerifyConfig {
    #[must_use]
    pub const fn new(trials: usize) -> Self {
        Self {
            trials,
            max_len: 10,
            max_value: 100,
        }
    }
}

/// A trial where greedy and brute force disagreed
#[derive(Debug, Clone)]
pub struct Mismatch {
    pub values: Vec<i64>,
    pub greedy: i64,
    pub brute_force: i64,
}

/// Result of a verification run
pub struct VerifyResult {
    pub trials: usize,
    pub mismatches: Vec<Mismatch>,
    pub duration: Duration,
    pub trials_per_second: f64,
}

/// Run randomized trials comparing the greedy answer to brute force
///
/// # Panics
///
/// Panics if the progress bar template is malformed (it is a fixed literal).
#[must_use]
pub fn run_verify(config: &VerifyConfig) -> VerifyResult {
    let max_pairs = (config.max_len / 2).max(1);
    let max_value = config.max_value.max(1);

    let pb = ProgressBar::new(config.trials as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let mismatches: Vec<Mismatch> = (0..config.trials)
        .into_par_iter()
        .filter_map(|_| {
            let mut rng = rand::rng();
            let pairs = rng.random_range(1..=max_pairs);
            let values: Vec<i64> = (0..pairs * 2)
                .map(|_| rng.random_range(-max_value..=max_value))
                .collect();

            // Even length by construction, so both solvers accept the input
            let greedy = min_max_pair_sum(&values).expect("even length");
            let brute = brute_force_min_max_pair_sum(&values).expect("even length");

            pb.inc(1);

            (greedy != brute).then(|| Mismatch {
                values,
                greedy,
                brute_force: brute,
            })
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let seconds = duration.as_secs_f64();
    let trials_per_second = if seconds > 0.0 {
        config.trials as f64 / seconds
    } else {
        0.0
    };

    VerifyResult {
        trials: config.trials,
        mismatches,
        duration,
        trials_per_second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_finds_no_mismatches() {
        let config = VerifyConfig::new(200);
        let result = run_verify(&config);

        assert_eq!(result.trials, 200);
        assert!(
            result.mismatches.is_empty(),
            "greedy disagreed with brute force: {:?}",
            result.mismatches.first()
        );
    }

    #[test]
    fn verify_respects_small_limits() {
        let config = VerifyConfig {
            trials: 50,
            max_len: 2,
            max_value: 5,
        };
        let result = run_verify(&config);

        assert_eq!(result.trials, 50);
        assert!(result.mismatches.is_empty());
    }

    #[test]
    fn verify_clamps_nonpositive_max_value() {
        // A value range of -0..=0 or worse must not panic; values collapse
        // to the clamped range instead
        for max_value in [0, -7] {
            let config = VerifyConfig {
                trials: 20,
                max_len: 4,
                max_value,
            };
            let result = run_verify(&config);
            assert_eq!(result.trials, 20);
            assert!(result.mismatches.is_empty());
        }
    }

    #[test]
    fn verify_zero_trials_has_finite_rate() {
        let config = VerifyConfig::new(0);
        let result = run_verify(&config);

        assert_eq!(result.trials, 0);
        assert!(result.mismatches.is_empty());
        assert!(result.trials_per_second.is_finite());
    }

    #[test]
    fn verify_clamps_degenerate_max_len() {
        // max_len below 2 still generates single-pair sequences
        let config = VerifyConfig {
            trials: 10,
            max_len: 1,
            max_value: 10,
        };
        let result = run_verify(&config);
        assert!(result.mismatches.is_empty());
    }
}
