//! Command implementations

pub mod evaluate;
pub mod play;
pub mod solve;

pub use evaluate::{EvaluateConfig, EvaluationResult, run_evaluation};
pub use play::{PlayError, PlaySummary, run_play};
pub use solve::{GuessStep, SolveConfig, SolveError, SolveResult, solve_word};
