//! Player sessions
//!
//! A [`Session`] holds one player's language, current round and the words
//! already used as solutions. Sessions live in a [`SessionStore`] and are
//! handled by value: check one out, change it, commit it back.

mod store;

pub use store::SessionStore;

use crate::core::{Language, Word};
use crate::game::{GameState, GuessForm, SubmissionError, submit_guess};
use crate::wordlists::WordDatabase;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Unique identifier for a session
pub type SessionId = String;

/// How long an untouched session is kept
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Generate a random 128-bit id as 32 hex digits
#[must_use]
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> SessionId {
    format!("{:032x}", rng.random::<u128>())
}

/// One player's session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    expires_at: Instant,
    max_age: Duration,
    language: Language,
    game_state: GameState,
    past_words: Vec<Word>,
}

impl Session {
    /// Create a session with a fresh id and a new round
    #[instrument(skip(db, rng))]
    pub fn new<R: Rng + ?Sized>(
        language: Language,
        db: &WordDatabase,
        max_age: Duration,
        now: Instant,
        rng: &mut R,
    ) -> Self {
        let id = generate_id(rng);
        let game_state = GameState::new_game(language, db, &[], rng);
        info!(session_id = %id, "Created session");

        Self {
            id,
            expires_at: now + max_age,
            max_age,
            language,
            game_state,
            past_words: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    #[must_use]
    pub const fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn set_game_state(&mut self, game_state: GameState) {
        self.game_state = game_state;
    }

    /// Solutions of earlier rounds, oldest first
    #[must_use]
    pub fn past_words(&self) -> Vec<Word> {
        self.past_words.clone()
    }

    pub fn add_past_word(&mut self, word: Word) {
        self.past_words.push(word);
    }

    #[must_use]
    pub const fn expires_at(&self) -> Instant {
        self.expires_at
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }

    /// Push expiry out to `now` plus the max age
    pub fn touch(&mut self, now: Instant) {
        self.expires_at = now + self.max_age;
    }

    /// Start the next round in `language`
    ///
    /// The outgoing solution joins the past words, and the new solution avoids
    /// all of them.
    #[instrument(skip(self, db, rng), fields(session_id = %self.id))]
    pub fn new_round<R: Rng + ?Sized>(&mut self, language: Language, db: &WordDatabase, rng: &mut R) {
        self.add_past_word(self.game_state.active_solution());
        self.language = language;
        self.game_state = GameState::new_game(language, db, &self.past_words, rng);
        debug!(past_words = self.past_words.len(), "Started next round");
    }

    /// Submit a guess for the current round
    ///
    /// On success the round is updated; on error nothing changes.
    ///
    /// # Errors
    /// Returns the `SubmissionError` from [`submit_guess`].
    pub fn submit(&mut self, form: &GuessForm, db: &WordDatabase) -> Result<(), SubmissionError> {
        self.game_state = submit_guess(&self.game_state, form, self.language, db)?;
        Ok(())
    }

    /// Reveal a letter of the current solution
    pub fn reveal_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<char> {
        self.game_state.reveal_hint(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::submission::row_key;
    use crate::wordlists::{Collection, MemorySource, SourceLayout};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeMap;

    fn db() -> WordDatabase {
        let source = MemorySource::new()
            .with_file("all.txt", "# metadata\ncrane\nslate\n")
            .with_file(
                "common.txt",
                "# metadata\ngamer\ngames\ncried\nroate\nhello\nworld\nspice\npearl\nquack\nbrine\n",
            );
        let mut layout = SourceLayout::new();
        layout.insert(
            Language::En,
            BTreeMap::from([
                (Collection::All, vec!["all.txt".to_string()]),
                (Collection::Common, vec!["common.txt".to_string()]),
            ]),
        );
        WordDatabase::init(&source, &layout).unwrap()
    }

    fn session(seed: u64) -> Session {
        let mut rng = StdRng::seed_from_u64(seed);
        Session::new(Language::En, &db(), DEFAULT_MAX_AGE, Instant::now(), &mut rng)
    }

    #[test]
    fn generated_ids_are_hex_and_distinct() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = generate_id(&mut rng);
        let b = generate_id(&mut rng);

        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn new_session_starts_clean() {
        let s = session(2);
        assert_eq!(s.language(), Language::En);
        assert!(s.past_words().is_empty());
        assert_eq!(s.game_state().puzzle().active_row(), 0);
    }

    #[test]
    fn new_round_records_outgoing_solution_once() {
        let mut s = session(3);
        let mut rng = StdRng::seed_from_u64(4);
        let first = s.game_state().active_solution();

        s.new_round(Language::En, &db(), &mut rng);

        assert_eq!(s.past_words(), vec![first]);
        assert_ne!(s.game_state().active_solution(), first);
    }

    #[test]
    fn rounds_avoid_past_solutions() {
        let mut s = session(5);
        let mut rng = StdRng::seed_from_u64(6);

        for _ in 0..3 {
            s.new_round(Language::En, &db(), &mut rng);
            let current = s.game_state().active_solution();
            assert!(!s.past_words().contains(&current));
        }
        assert_eq!(s.past_words().len(), 3);
    }

    #[test]
    fn touch_extends_expiry() {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let mut s = Session::new(Language::En, &db(), Duration::from_secs(10), now, &mut rng);

        assert!(!s.is_expired(now));
        assert!(s.is_expired(now + Duration::from_secs(10)));

        s.touch(now + Duration::from_secs(5));
        assert!(!s.is_expired(now + Duration::from_secs(10)));
        assert_eq!(s.expires_at(), now + Duration::from_secs(15));
    }

    #[test]
    fn submit_updates_round_only_on_success() {
        let mut s = session(8);
        let mut form = GuessForm::default();
        form.insert(row_key(0), "zzzzz".chars().map(String::from).collect());

        assert!(s.submit(&form, &db()).is_err());
        assert_eq!(s.game_state().puzzle().active_row(), 0);

        form.insert(row_key(0), "crane".chars().map(String::from).collect());
        s.submit(&form, &db()).unwrap();
        assert_eq!(s.game_state().puzzle().active_row(), 1);
    }

    #[test]
    fn hints_come_from_the_solution() {
        let mut s = session(9);
        let mut rng = StdRng::seed_from_u64(10);
        let letter = s.reveal_hint(&mut rng).unwrap();

        assert!(s.game_state().active_solution().contains(letter));
        assert_eq!(s.game_state().letter_hints(), vec![letter]);
    }
}
