//! Core domain types for the puzzle
//!
//! Pure value types with no I/O: words, guess evaluation, the row-bounded
//! puzzle and the language tag.

mod guess;
mod language;
mod puzzle;
mod word;

pub use guess::{LetterGuess, Match, WordGuess};
pub use language::{Language, LanguageError};
pub use puzzle::{MAX_ATTEMPTS, Puzzle, PuzzleStatus, RowError};
pub use word::{WORD_LENGTH, Word, WordError};
pub(crate) use word::lowercase;
