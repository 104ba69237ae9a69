//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a guess, or a command.

use crate::core::{Language, PuzzleStatus};
use crate::game::{SubmissionError, form_for};
use crate::output::{formatters::hint_list, print_round};
use crate::session::Session;
use crate::wordlists::WordDatabase;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// What a line of input did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Quit,
    NewRound,
    Hint(Option<char>),
    Language(Language),
    Guessed(PuzzleStatus),
    Rejected(SubmissionError),
    Unknown(String),
}

/// Apply one line of input to `session`
pub fn handle_line<R: Rng + ?Sized>(
    session: &mut Session,
    db: &WordDatabase,
    line: &str,
    rng: &mut R,
) -> Reply {
    let line = line.trim();
    let mut parts = line.split_whitespace();

    match parts.next().unwrap_or_default().to_lowercase().as_str() {
        "" => Reply::Unknown("Type a guess or a command".to_string()),
        "quit" | "q" | "exit" => Reply::Quit,
        "new" | "n" => {
            session.new_round(session.language(), db, rng);
            Reply::NewRound
        }
        "hint" | "h" => Reply::Hint(session.reveal_hint(rng)),
        "lang" | "l" => match parts.next().map(str::parse::<Language>) {
            Some(Ok(language)) => {
                session.new_round(language, db, rng);
                Reply::Language(language)
            }
            Some(Err(err)) => Reply::Unknown(err.to_string()),
            None => Reply::Unknown("Usage: lang <en|de>".to_string()),
        },
        _ => {
            let form = form_for(&session.game_state().puzzle(), line);
            match session.submit(&form, db) {
                Ok(()) => Reply::Guessed(session.game_state().puzzle().status()),
                Err(err) => Reply::Rejected(err),
            }
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng + ?Sized>(
    db: &WordDatabase,
    language: Language,
    max_age: Duration,
    rng: &mut R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Lettr - Interactive Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in six tries. After each guess:");
    println!("  - {} letter is in the right spot", "green".green().bold());
    println!("  - {} letter is elsewhere in the word", "yellow".yellow().bold());
    println!("  - {} letter is not in the word (or used up)\n", "gray".bright_black());
    println!("Commands: 'hint', 'new', 'lang <en|de>', 'quit'\n");

    let mut session = Session::new(language, db, max_age, Instant::now(), rng);
    print_round(&session);

    loop {
        let Some(line) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match handle_line(&mut session, db, &line, rng) {
            Reply::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Reply::NewRound => {
                println!("\n🔄 New round started!");
                print_round(&session);
            }
            Reply::Language(language) => {
                println!("\n🔄 New round in '{language}'!");
                print_round(&session);
            }
            Reply::Hint(Some(_)) => {
                let hints = session.game_state().letter_hints();
                println!("💡 Hints: {}\n", hint_list(&hints).bright_yellow());
            }
            Reply::Hint(None) => println!("No more hints to provide\n"),
            Reply::Rejected(err) => println!("❌ {err}\n"),
            Reply::Unknown(message) => println!("❌ {message}\n"),
            Reply::Guessed(status) => {
                print_round(&session);
                if status != PuzzleStatus::Active {
                    print_round_end(&session, status);
                }
            }
        }
    }
}

fn print_round_end(session: &Session, status: PuzzleStatus) {
    let game = session.game_state();
    let solution = game
        .revealed_solution()
        .map(|w| w.to_string().to_uppercase())
        .unwrap_or_default();

    if status == PuzzleStatus::Solved {
        let turn = game.puzzle().active_row();
        println!(
            "{}",
            format!(
                "🎉 Solved in {turn} {}!",
                if turn == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        );
    } else {
        println!(
            "{} {}",
            "❌ Out of guesses. The word was".red().bold(),
            solution.bright_yellow().bold()
        );
    }
    println!("Type 'new' for another round or 'quit' to exit.\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
