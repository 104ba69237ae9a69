//! Bounded multi-row puzzle
//!
//! A puzzle holds up to [`MAX_ATTEMPTS`] evaluated rows. Status (active row,
//! solved, lost) is always derived from the rows, never stored.

use super::guess::{LetterGuess, WordGuess};
use super::word::Word;

/// Number of rows in a puzzle
pub const MAX_ATTEMPTS: usize = 6;

/// Derived puzzle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleStatus {
    Active,
    Solved,
    Lost,
}

/// Error returned when a row cannot be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RowError {
    #[display("puzzle is already finished")]
    Finished,
    #[display("row {row} is not the active row {active}")]
    NotActive { row: usize, active: usize },
    #[display("row {row} would be left unfilled")]
    Unfilled { row: usize },
}

/// Ordered rows of evaluated guesses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Puzzle {
    guesses: [WordGuess; MAX_ATTEMPTS],
}

impl Puzzle {
    /// Create an empty puzzle
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows, filled or not
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[WordGuess; MAX_ATTEMPTS] {
        &self.guesses
    }

    /// Index of the first unfilled row, or the row count when all are filled
    #[must_use]
    pub fn active_row(&self) -> usize {
        self.guesses
            .iter()
            .position(|row| !row.is_filled())
            .unwrap_or(MAX_ATTEMPTS)
    }

    /// True if the row before the active row exists and is all exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        match self.active_row() {
            0 => false,
            active => self.guesses[active - 1].is_solved(),
        }
    }

    /// True if every row is filled and none is solved
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.guesses
            .iter()
            .all(|row| row.is_filled() && !row.is_solved())
    }

    #[must_use]
    pub fn status(&self) -> PuzzleStatus {
        if self.is_solved() {
            PuzzleStatus::Solved
        } else if self.is_lost() {
            PuzzleStatus::Lost
        } else {
            PuzzleStatus::Active
        }
    }

    /// True once solved or lost
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status() != PuzzleStatus::Active
    }

    /// Letter guesses of every filled row, in row order
    ///
    /// Unfilled rows contribute nothing.
    #[must_use]
    pub fn letter_guesses(&self) -> Vec<LetterGuess> {
        self.guesses
            .iter()
            .filter(|row| row.is_filled())
            .flat_map(|row| row.letters().iter().copied())
            .collect()
    }

    /// Store an evaluated guess at `row`
    ///
    /// Only the active row of an unfinished puzzle may be written, and only with
    /// a filled guess; earlier rows are immutable and rows past the active one
    /// are never touched.
    ///
    /// # Errors
    /// Returns `RowError` if the puzzle is finished, `row` is not the active
    /// row, or `guess` has empty slots.
    pub fn set_row(&mut self, row: usize, guess: WordGuess) -> Result<(), RowError> {
        if self.is_finished() {
            return Err(RowError::Finished);
        }
        let active = self.active_row();
        if row != active {
            return Err(RowError::NotActive { row, active });
        }
        if !guess.is_filled() {
            return Err(RowError::Unfilled { row });
        }
        self.guesses[row] = guess;
        Ok(())
    }

    /// Evaluate `guessed` against `solution` into the active row
    ///
    /// # Errors
    /// Returns `RowError::Finished` if no row is open, or `RowError::Unfilled`
    /// if `guessed` has empty slots.
    pub fn submit(&mut self, guessed: &Word, solution: &Word) -> Result<WordGuess, RowError> {
        let guess = WordGuess::evaluate(guessed, solution);
        self.set_row(self.active_row(), guess)?;
        Ok(guess)
    }
}
