//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{EvaluationResult, SolveResult};
use crate::core::Word;
use crate::game::MAX_GUESSES;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({})",
        result.target.to_uppercase().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let row = Word::new(step.word.as_str())
            .map(|word| colored_guess(&word, &step.pattern))
            .unwrap_or_else(|_| step.word.to_uppercase());
        println!("\nTurn {}: {row} {}", i + 1, step.pattern.to_emoji());

        if verbose {
            println!(
                "  Candidates: {} → {}  ({} green, {} yellow)",
                step.candidates_before,
                step.candidates_after,
                step.pattern.count_exact(),
                step.pattern.count_present()
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of an evaluation
pub fn print_evaluation_result(result: &EvaluationResult) {
    let worst = (MAX_GUESSES + 1) as f64;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EVALUATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Games played:     {}", result.games);
    println!(
        "   Mean score:       {} [{}]",
        format!("{:.3}", result.mean_score).bright_yellow().bold(),
        create_progress_bar(result.mean_score, worst, 28).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);
    println!(
        "\n   {}",
        format!("Lower is better. A lost game scores {}.", MAX_GUESSES + 1).bright_black()
    );
}
