//! Used-letter keyboard
//!
//! Tracks, per key, whether the letter was guessed and the best match seen.

use crate::core::{Language, LetterGuess, Match, lowercase};

const QWERTY: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];
const QWERTZ: [&str; 4] = ["qwertzuiop", "asdfghjkl", "yxcvbnm", "äöüß"];

/// State of one letter key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyState {
    pub letter: char,
    pub used: bool,
    pub matched: Match,
}

impl KeyState {
    const fn new(letter: char) -> Self {
        Self {
            letter,
            used: false,
            matched: Match::None,
        }
    }

    fn record(&mut self, guess: LetterGuess) {
        if lowercase(guess.letter) != self.letter {
            return;
        }
        self.used = true;
        self.matched = self.matched.max(guess.matched);
    }
}

/// Keyboard rows with per-key state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    rows: Vec<Vec<KeyState>>,
}

impl Keyboard {
    /// Build the layout for `language` and apply `guesses`
    #[must_use]
    pub fn new(language: Language, guesses: &[LetterGuess]) -> Self {
        let layout: &[&str] = match language {
            Language::En => &QWERTY,
            Language::De => &QWERTZ,
        };

        let mut rows: Vec<Vec<KeyState>> = layout
            .iter()
            .map(|row| row.chars().map(KeyState::new).collect())
            .collect();

        for guess in guesses {
            for key in rows.iter_mut().flatten() {
                key.record(*guess);
            }
        }

        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<KeyState>] {
        &self.rows
    }

    /// Look up a key
    #[must_use]
    pub fn key(&self, letter: char) -> Option<&KeyState> {
        let letter = lowercase(letter);
        self.rows.iter().flatten().find(|k| k.letter == letter)
    }
}
