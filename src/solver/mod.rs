//! Wordle solving algorithms
//!
//! The greedy coverage pipeline runs once per turn:
//! [`ConstraintSet`] → [`filter_candidates`] → [`FrequencyModel`] →
//! [`select_best_guess`]. The solvers wrap it behind the [`Solver`] trait.

mod constraints;
mod coverage;
mod filter;
mod frequency;
mod opening;
mod random;
mod selector;
pub mod strategy;

pub use constraints::ConstraintSet;
pub use coverage::CoverageSolver;
pub use filter::{
    FilterRules, count_candidates, filter_candidates, is_candidate, is_positional_candidate,
};
pub use frequency::FrequencyModel;
pub use opening::OpeningSolver;
pub use random::RandomSolver;
pub use selector::{coverage_score, select_best_guess};
pub use strategy::{Solver, StrategyError, StrategyType};
