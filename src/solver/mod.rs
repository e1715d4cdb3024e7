//! Pair-sum minimization algorithms
//!
//! The greedy solver is the production path; brute force exists to
//! cross-check it on small inputs.

pub mod brute;
mod greedy;

pub use brute::brute_force_min_max_pair_sum;
pub use greedy::{min_max_pair_sum, min_max_pair_sum_in_place, optimal_pairing};
