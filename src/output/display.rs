//! Display functions for command results

use super::formatters::{colored_guess, hint_list, keyboard_lines};
use crate::commands::{CheckResult, EvaluateResult, PickResult};
use crate::game::Keyboard;
use crate::session::Session;
use colored::Colorize;

/// Print the board, keyboard and hints of the current round
pub fn print_round(session: &Session) {
    let game = session.game_state();
    let puzzle = game.puzzle();

    println!("\n{}", "─".repeat(40).cyan());
    for (i, row) in puzzle.rows().iter().enumerate() {
        if row.is_filled() {
            println!("  {}. {}  {}", i + 1, colored_guess(row), row.to_emoji());
        } else {
            println!("  {}. {}", i + 1, " _ ".repeat(5).bright_black());
        }
    }
    println!("{}", "─".repeat(40).cyan());

    let keyboard = Keyboard::new(session.language(), &puzzle.letter_guesses());
    for line in keyboard_lines(&keyboard) {
        println!("  {line}");
    }

    let hints = game.letter_hints();
    if !hints.is_empty() {
        println!("\n  Hints: {}", hint_list(&hints).bright_yellow());
    }
    if game.solution_has_duplicate_letters() {
        println!("  {}", "The solution contains duplicate letters".bright_black());
    }
    println!();
}

/// Print the result of evaluating a guess
pub fn print_evaluate_result(result: &EvaluateResult) {
    println!(
        "{} {}",
        colored_guess(&result.guess),
        result.guess.to_emoji()
    );
    if result.guess.is_solved() {
        println!("{}", "Solved!".green().bold());
    } else {
        println!(
            "{} exact, {} elsewhere",
            result.guess.count_exact().to_string().green(),
            result.guess.count_vague().to_string().yellow()
        );
    }
}

/// Print whether a word is accepted
pub fn print_check_result(result: &CheckResult) {
    let word = result.word.to_string().to_uppercase();
    if result.exists {
        println!(
            "{} {} is in the {} word list",
            "✓".green().bold(),
            word.bright_white().bold(),
            result.language
        );
    } else {
        println!(
            "{} {} is not in the {} word list",
            "✗".red().bold(),
            word.bright_white().bold(),
            result.language
        );
    }
}

/// Print a picked solution word
pub fn print_pick_result(result: &PickResult) {
    println!("{}", result.word.to_string().to_uppercase().bright_yellow().bold());
    if result.avoided > 0 {
        println!(
            "{}",
            format!("({} words avoided)", result.avoided).bright_black()
        );
    }
}
