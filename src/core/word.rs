//! Puzzle word representation
//!
//! A Word stores exactly five Unicode letters. Slots that hold no letter carry
//! the [`Word::EMPTY_LETTER`] sentinel, so a partially typed guess is still a
//! full-length value.

use derive_more::{Display, Error};
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A five-letter word
///
/// Equality and hashing are case-insensitive: `GAMER` and `gamer` are the same word.
#[derive(Debug, Clone, Copy, Default)]
pub struct Word {
    letters: [char; WORD_LENGTH],
}

/// Error type for text that cannot become a word
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordError {
    #[display("string does not match allowed word length: length={length}, expectedLength=5")]
    TooLong { length: usize },
    #[display("string is too short: length={length}, expectedLength=5")]
    TooShort { length: usize },
    #[display("character {letter:?} at position {position} is not a letter")]
    NotALetter { letter: char, position: usize },
}

impl Word {
    /// Marker for a slot without a letter
    pub const EMPTY_LETTER: char = '\0';

    /// Create a new Word from a string
    ///
    /// The text must consist of exactly five alphabetic code points (umlauts and
    /// `ß` count as one letter each). Case is preserved; use [`Word::to_lower`]
    /// for the canonical form.
    ///
    /// # Errors
    /// Returns `WordError` if the text is longer or shorter than five letters or
    /// contains a non-alphabetic character.
    ///
    /// # Examples
    /// ```
    /// use lettr::core::Word;
    ///
    /// let word = Word::new("Größe").unwrap();
    /// assert_eq!(word.to_lower().to_string(), "größe");
    ///
    /// assert!(Word::new("toolong").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let word = Self::from_code_points(text)?;
        match word.letters.iter().position(|l| !l.is_alphabetic()) {
            Some(position) => Err(WordError::NotALetter {
                letter: word.letters[position],
                position,
            }),
            None => Ok(word),
        }
    }

    /// Create a Word from any five code points
    ///
    /// Only the length is checked, so dictionary entries such as `o'day` or
    /// `x-ray` are kept verbatim.
    ///
    /// # Errors
    /// Returns `WordError` if the text is longer or shorter than five code points.
    pub fn from_code_points(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();
        let mut letters = [Self::EMPTY_LETTER; WORD_LENGTH];
        let mut length = 0;

        for letter in text.chars() {
            if length == WORD_LENGTH {
                return Err(WordError::TooLong {
                    length: text.chars().count(),
                });
            }
            letters[length] = letter;
            length += 1;
        }

        if length < WORD_LENGTH {
            return Err(WordError::TooShort { length });
        }

        Ok(Self { letters })
    }

    /// Build a word from raw slots
    ///
    /// Never fails. The Unicode replacement character is normalized to the
    /// empty sentinel, which leaves the word unfilled.
    #[must_use]
    pub fn from_letters(letters: [char; WORD_LENGTH]) -> Self {
        Self {
            letters: letters.map(|letter| {
                if letter == char::REPLACEMENT_CHARACTER {
                    Self::EMPTY_LETTER
                } else {
                    letter
                }
            }),
        }
    }

    /// Get the letters as an array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// True if every slot holds a real letter
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.letters.iter().all(|&l| l != Self::EMPTY_LETTER)
    }

    /// Check if the word contains a specific letter (exact case)
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Count occurrences of a letter (exact case)
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    /// True if any letter appears more than once
    #[must_use]
    pub fn has_duplicate_letters(&self) -> bool {
        self.letters.iter().any(|&l| self.count(l) >= 2)
    }

    /// Canonical lowercase form
    #[must_use]
    pub fn to_lower(&self) -> Self {
        Self {
            letters: self.letters.map(lowercase),
        }
    }

    /// Get the count of each letter in the word
    ///
    /// Used for guess evaluation with duplicate letters.
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

/// Single-letter lowercase mapping
///
/// Letters whose lowercase form expands to several code points keep their first one.
pub(crate) fn lowercase(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.to_lower().letters == other.to_lower().letters
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_lower().letters.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            if letter == Self::EMPTY_LETTER {
                write!(f, "_")?;
            } else {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.to_string(), "crane");
        assert_eq!(word.letters(), &['c', 'r', 'a', 'n', 'e']);
    }

    #[test]
    fn word_creation_keeps_case_until_lowered() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.to_string(), "CrAnE");
        assert_eq!(word.to_lower().to_string(), "crane");
    }

    #[test]
    fn word_creation_counts_code_points() {
        let word = Word::new("GRÜßE").unwrap();
        assert_eq!(word.letter_at(2), 'Ü');
        assert_eq!(word.letter_at(3), 'ß');
        assert_eq!(word.to_lower().to_string(), "grüße");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("notalettrword"),
            Err(WordError::TooLong { length: 13 })
        );
        assert_eq!(Word::new("shrt"), Err(WordError::TooShort { length: 4 }));
        assert_eq!(Word::new(""), Err(WordError::TooShort { length: 0 }));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
        assert_eq!(
            Word::new("o'day"),
            Err(WordError::NotALetter {
                letter: '\'',
                position: 1
            })
        );
    }

    #[test]
    fn code_points_only_check_length() {
        assert_eq!(Word::from_code_points("o'day").unwrap().to_string(), "o'day");
        assert_eq!(Word::from_code_points("cran3").unwrap().letter_at(4), '3');
        assert_eq!(
            Word::from_code_points("x-rays"),
            Err(WordError::TooLong { length: 6 })
        );
        assert_eq!(
            Word::from_code_points("x-r"),
            Err(WordError::TooShort { length: 3 })
        );
    }

    #[test]
    fn from_letters_normalizes_replacement_character() {
        let word = Word::from_letters(['a', '\u{FFFD}', 'c', 'd', 'e']);
        assert_eq!(word.letter_at(1), Word::EMPTY_LETTER);
        assert!(!word.is_filled());
        assert_eq!(word.to_string(), "a_cde");
    }

    #[test]
    fn default_word_is_empty() {
        let word = Word::default();
        assert!(!word.is_filled());
        assert!(word.letters().iter().all(|&l| l == Word::EMPTY_LETTER));
    }

    #[test]
    fn word_contains_and_count() {
        let word = Word::new("speed").unwrap();
        assert!(word.contains('e'));
        assert!(!word.contains('z'));
        assert_eq!(word.count('e'), 2);
        assert_eq!(word.count('s'), 1);
        assert_eq!(word.count('z'), 0);
    }

    #[test]
    fn word_duplicate_letters() {
        assert!(Word::new("speed").unwrap().has_duplicate_letters());
        assert!(!Word::new("crane").unwrap().has_duplicate_letters());
    }

    #[test]
    fn word_letter_counts() {
        let counts = Word::new("aaaaa").unwrap().letter_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&'a'), Some(&5));
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }

    #[test]
    fn word_hash_is_case_insensitive() {
        let mut set = rustc_hash::FxHashSet::default();
        set.insert(Word::new("gamer").unwrap());
        assert!(set.contains(&Word::new("GAMER").unwrap()));
    }
}
