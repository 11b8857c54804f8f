//! Wordle Coverage Solver
//!
//! A Wordle solver that accumulates hard constraints from feedback, filters
//! the vocabulary down to the words still possible, and greedily plays the
//! candidate whose distinct letters are most common among the survivors.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_coverage::core::Word;
//! use wordle_coverage::game::Game;
//! use wordle_coverage::solver::CoverageSolver;
//! use wordle_coverage::wordlists::WordBank;
//!
//! let bank = WordBank::embedded().unwrap();
//! let mut game = Game::new(&bank, &Word::new("crane").unwrap()).unwrap();
//!
//! game.play(&mut CoverageSolver::new(&bank)).unwrap();
//! println!("Solved in {} guesses", game.num_guesses_taken());
//! ```

// Core domain types
pub mod core;

// Game rules and the turn loop
pub mod game;

// Solving algorithms
pub mod solver;

// Batch evaluation
pub mod harness;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive console play
pub mod interactive;
