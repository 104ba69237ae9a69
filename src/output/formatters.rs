//! Formatting utilities for terminal output

use crate::core::{Match, WordGuess};
use crate::game::{KeyState, Keyboard};
use colored::{ColoredString, Colorize};

/// Color a single letter tile by its match
#[must_use]
pub fn colored_tile(letter: char, matched: Match) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match matched {
        Match::Exact => text.black().on_green().bold(),
        Match::Vague => text.black().on_yellow().bold(),
        Match::None => text.white().on_bright_black(),
    }
}

/// Format an evaluated row as colored tiles
#[must_use]
pub fn colored_guess(guess: &WordGuess) -> String {
    guess
        .letters()
        .iter()
        .map(|l| colored_tile(l.letter, l.matched).to_string())
        .collect()
}

fn colored_key(key: &KeyState) -> String {
    let letter = key.letter.to_uppercase().to_string();
    if !key.used {
        return letter;
    }
    match key.matched {
        Match::Exact => letter.green().bold().to_string(),
        Match::Vague => letter.yellow().bold().to_string(),
        Match::None => letter.bright_black().to_string(),
    }
}

/// Format each keyboard row as one line, indented like a physical keyboard
#[must_use]
pub fn keyboard_lines(keyboard: &Keyboard) -> Vec<String> {
    keyboard
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: Vec<String> = row.iter().map(colored_key).collect();
            format!("{}{}", " ".repeat(i), keys.join(" "))
        })
        .collect()
}

/// Format revealed hint letters, e.g. "A, T"
#[must_use]
pub fn hint_list(hints: &[char]) -> String {
    hints
        .iter()
        .map(|c| c.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
