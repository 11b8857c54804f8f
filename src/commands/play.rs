//! Interactive play command
//!
//! Random targets, one [`ConsoleSolver`] game at a time, until the player
//! declines another round.

use crate::game::{Game, GameError};
use crate::interactive::ConsoleSolver;
use crate::wordlists::WordBank;
use colored::Colorize;
use log::info;
use rand::Rng;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayError {
    #[error("console I/O failed")]
    Io(#[from] io::Error),
    #[error("game failed")]
    Game(#[from] GameError),
}

/// Tally of an interactive session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    pub games: usize,
    pub wins: usize,
}

/// Run the play-again loop
///
/// # Errors
///
/// Returns `PlayError::Io` if the console cannot be read or written.
pub fn run_play<R, W, G>(
    bank: &WordBank,
    god_mode: bool,
    rng: &mut G,
    mut input: R,
    mut output: W,
) -> Result<PlaySummary, PlayError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(output, "{}", "Welcome to Wordle!".bright_cyan().bold())?;
    if god_mode {
        writeln!(output, "{}", "God mode: the solution will be shown.".yellow())?;
    }

    let mut summary = PlaySummary::default();

    loop {
        let mut game = Game::random(bank, rng).god_mode(god_mode);
        {
            let mut player = ConsoleSolver::new(&mut input, &mut output);
            game.play(&mut player)?;
        }

        summary.games += 1;
        if game.won() {
            summary.wins += 1;
        }
        info!("game {} finished: {:?}", summary.games, game.status());

        if !ask_again(&mut input, &mut output)? {
            break;
        }
    }

    writeln!(
        output,
        "Thanks for playing! Won {} of {} games.",
        summary.wins, summary.games
    )?;
    Ok(summary)
}

fn ask_again<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "Play again? (y/n) ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
