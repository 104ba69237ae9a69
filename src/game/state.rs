//! Per-round game state

use crate::core::{Language, Puzzle, Word};
use crate::wordlists::WordDatabase;
use rand::Rng;
use tracing::{debug, instrument};

/// One round: hidden solution, puzzle rows and revealed hints
///
/// The solution is never handed out while the round is running; players see it
/// only through evaluations, or via [`GameState::revealed_solution`] once the
/// puzzle is finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    active_solution: Word,
    letter_hints: Vec<char>,
    puzzle: Puzzle,
}

impl GameState {
    /// Start a round with a random solution avoiding `exclude`
    #[instrument(skip(db, exclude, rng), fields(excluded = exclude.len()))]
    pub fn new_game<R: Rng + ?Sized>(
        language: Language,
        db: &WordDatabase,
        exclude: &[Word],
        rng: &mut R,
    ) -> Self {
        let solution = db.random_pick_with_fallback(language, exclude, 0, rng);
        debug!("Started new round");
        Self::with_solution(solution)
    }

    /// Start a round with a known solution
    #[must_use]
    pub fn with_solution(solution: Word) -> Self {
        Self {
            active_solution: solution.to_lower(),
            letter_hints: Vec::new(),
            puzzle: Puzzle::new(),
        }
    }

    #[must_use]
    pub const fn active_solution(&self) -> Word {
        self.active_solution
    }

    pub fn set_active_solution(&mut self, word: Word) {
        self.active_solution = word.to_lower();
    }

    /// The solution, once the round is over
    #[must_use]
    pub fn revealed_solution(&self) -> Option<Word> {
        self.puzzle.is_finished().then_some(self.active_solution)
    }

    /// Drives the "solution has duplicate letters" indicator
    #[must_use]
    pub fn solution_has_duplicate_letters(&self) -> bool {
        self.active_solution.has_duplicate_letters()
    }

    /// Letters revealed so far, in reveal order
    #[must_use]
    pub fn letter_hints(&self) -> Vec<char> {
        self.letter_hints.clone()
    }

    /// Record one more revealed letter
    ///
    /// No de-duplication here; see [`GameState::reveal_hint`] for allocation.
    pub fn add_letter_hint(&mut self, letter: char) {
        self.letter_hints.push(letter);
    }

    /// The last evaluated puzzle
    #[must_use]
    pub const fn puzzle(&self) -> Puzzle {
        self.puzzle
    }

    pub fn set_puzzle(&mut self, puzzle: Puzzle) {
        self.puzzle = puzzle;
    }

    /// Replace the puzzle, returning the updated state
    #[must_use]
    pub fn with_puzzle(mut self, puzzle: Puzzle) -> Self {
        self.puzzle = puzzle;
        self
    }
}
