//! Pair Sum Solver
//!
//! Minimizes the maximum pair sum over an even-length integer sequence: sort
//! ascending, pair the smallest remaining value with the largest remaining
//! value, and take the largest resulting pair sum. O(n log n), provably
//! optimal over all complete pairings.
//!
//! # Quick Start
//!
//! ```rust
//! use pair_sum_solver::solver::{min_max_pair_sum, optimal_pairing};
//!
//! let values = vec![3, 5, 2, 3];
//!
//! // The minimized maximum pair sum
//! assert_eq!(min_max_pair_sum(&values).unwrap(), 7);
//!
//! // The pairing that achieves it
//! let pairing = optimal_pairing(&values).unwrap();
//! assert_eq!(pairing.pairs(), &[(2, 5), (3, 3)]);
//! ```

// Core domain types
pub mod core;

// Pairing algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
