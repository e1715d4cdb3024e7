//! Core domain types for pair-sum minimization
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod pairing;

pub use pairing::{Pairing, PairingError};
