//! Letter hint allocation
//!
//! A hint reveals one solution letter the player has not found yet: it was
//! not matched (exact or vague) in any filled row and was not hinted before.

use super::state::GameState;
use crate::core::Match;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

impl GameState {
    /// Letters still eligible as a hint, in solution order, without repeats
    #[must_use]
    pub fn hint_options(&self) -> Vec<char> {
        let found: Vec<char> = self
            .puzzle()
            .letter_guesses()
            .iter()
            .filter(|l| matches!(l.matched, Match::Exact | Match::Vague))
            .map(|l| l.letter)
            .collect();
        let hinted = self.letter_hints();

        let mut options: Vec<char> = Vec::new();
        for &letter in self.active_solution().letters() {
            if !found.contains(&letter) && !hinted.contains(&letter) && !options.contains(&letter) {
                options.push(letter);
            }
        }
        options
    }

    /// Reveal a random eligible letter and record it
    ///
    /// Returns `None` when there is nothing left to hint.
    pub fn reveal_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<char> {
        let pick = *self.hint_options().choose(rng)?;
        self.add_letter_hint(pick);
        debug!(hints = self.letter_hints().len(), "Revealed letter hint");
        Some(pick)
    }
}
