//! Guess evaluation
//!
//! Each letter of a guess is classified against the solution:
//! - `None`: letter not in the solution (or its occurrences are used up)
//! - `Vague`: letter in the solution, at another position
//! - `Exact`: letter at this position

use super::word::{WORD_LENGTH, Word};

/// Match classification for one letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Match {
    #[default]
    None,
    Vague,
    Exact,
}

impl Match {
    /// Emoji square for this classification
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Vague => '🟨',
            Self::None => '⬜',
        }
    }
}

/// A guessed letter with its classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterGuess {
    pub letter: char,
    pub matched: Match,
}

impl LetterGuess {
    #[must_use]
    pub const fn new(letter: char, matched: Match) -> Self {
        Self { letter, matched }
    }
}

/// One evaluated row: a classification per letter position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WordGuess([LetterGuess; WORD_LENGTH]);

impl WordGuess {
    /// Wrap raw letter guesses
    #[must_use]
    pub const fn new(letters: [LetterGuess; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    /// Evaluate `guessed` against `solution`
    ///
    /// Both words are compared in lowercase.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches and remove them from the solution's letter pool
    /// 2. Second pass, left to right: mark vague matches while the pool still holds that letter
    ///
    /// So a letter is never credited more often than it occurs in the solution,
    /// exact matches always win, and among the rest the leftmost occurrence wins.
    ///
    /// # Examples
    /// ```
    /// use lettr::core::{Match, Word, WordGuess};
    ///
    /// let guess = Word::new("rotor").unwrap();
    /// let solution = Word::new("ROATE").unwrap();
    /// let result = WordGuess::evaluate(&guess, &solution);
    ///
    /// let matches: Vec<Match> = result.letters().iter().map(|l| l.matched).collect();
    /// assert_eq!(
    ///     matches,
    ///     [Match::Exact, Match::Exact, Match::Vague, Match::None, Match::None]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guessed: &Word, solution: &Word) -> Self {
        let guessed = guessed.to_lower();
        let solution = solution.to_lower();

        let mut result = guessed
            .letters()
            .map(|letter| LetterGuess::new(letter, Match::None));
        let mut available = solution.letter_counts();

        // First pass: exact position matches
        for (i, slot) in result.iter_mut().enumerate() {
            if slot.letter == solution.letter_at(i) {
                slot.matched = Match::Exact;
                if let Some(count) = available.get_mut(&slot.letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present elsewhere, budgeted by remaining occurrences
        for slot in result.iter_mut().filter(|s| s.matched != Match::Exact) {
            if let Some(count) = available.get_mut(&slot.letter)
                && *count > 0
            {
                slot.matched = Match::Vague;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// The five letter guesses in position order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterGuess; WORD_LENGTH] {
        &self.0
    }

    /// The guessed word
    #[must_use]
    pub fn word(&self) -> Word {
        Word::from_letters(self.0.map(|l| l.letter))
    }

    /// True if every position holds a real letter
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.0
            .iter()
            .all(|l| l.letter != Word::EMPTY_LETTER && l.letter != char::REPLACEMENT_CHARACTER)
    }

    /// True if every position is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|l| l.matched == Match::Exact)
    }

    /// Count the exact matches
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|l| l.matched == Match::Exact).count()
    }

    /// Count the vague matches
    #[must_use]
    pub fn count_vague(&self) -> usize {
        self.0.iter().filter(|l| l.matched == Match::Vague).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|l| l.matched.to_emoji()).collect()
    }
}
