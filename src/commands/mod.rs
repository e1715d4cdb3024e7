//! Command implementations

pub mod analyze;
pub mod bench;
pub mod solve;
pub mod verify;

pub use analyze::{AnalysisResult, analyze_sequence};
pub use bench::{BenchResult, run_bench};
pub use solve::{SolveResult, solve_sequence, solve_sequence_in_place};
pub use verify::{VerifyConfig, VerifyResult, run_verify};
