//! Shared session store

use super::{DEFAULT_MAX_AGE, Session, SessionId};
use crate::core::Language;
use crate::wordlists::WordDatabase;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// All live sessions, keyed by id
///
/// Cloning the store shares the same sessions. Reads hand out copies; a
/// changed session only becomes visible once committed with
/// [`SessionStore::update_or_set`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<FxHashMap<SessionId, Session>>>,
    max_age: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(max_age: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(FxHashMap::default())),
            max_age,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<SessionId, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub const fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Copy of the session with `id`, if any
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<Session> {
        let session = self.lock().get(id).cloned();
        if session.is_none() {
            debug!(session_id = id, "Session not found");
        }
        session
    }

    /// Insert or replace a session
    #[instrument(skip(self, session), fields(session_id = %session.id()))]
    pub fn update_or_set(&self, session: Session) {
        self.lock().insert(session.id().to_string(), session);
        debug!("Session stored");
    }

    /// Drop every session expired at `now`; returns how many were removed
    #[instrument(skip(self, now))]
    pub fn remove_expired(&self, now: Instant) -> usize {
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        let removed = before - sessions.len();
        if removed > 0 {
            info!(removed, remaining = sessions.len(), "Removed expired sessions");
        }
        removed
    }

    /// Find the live session for `id`, or start a new one in `language`
    ///
    /// Either way the session's expiry is refreshed and it is committed before
    /// a copy is returned.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        id: Option<&str>,
        language: Language,
        db: &WordDatabase,
        now: Instant,
        rng: &mut R,
    ) -> Session {
        let mut session = id
            .and_then(|id| self.get_by_id(id))
            .filter(|session| !session.is_expired(now))
            .unwrap_or_else(|| Session::new(language, db, self.max_age, now, rng));

        session.touch(now);
        self.update_or_set(session.clone());
        session
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_AGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{Collection, MemorySource, SourceLayout};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeMap;
    use std::thread;

    fn db() -> WordDatabase {
        let source = MemorySource::new().with_file("common.txt", "# metadata\ngamer\ngames\ncried\n");
        let mut layout = SourceLayout::new();
        layout.insert(
            Language::En,
            BTreeMap::from([(Collection::Common, vec!["common.txt".to_string()])]),
        );
        WordDatabase::init(&source, &layout).unwrap()
    }

    #[test]
    fn resolve_creates_and_then_finds() {
        let store = SessionStore::default();
        let mut rng = StdRng::seed_from_u64(1);
        let now = Instant::now();

        let created = store.resolve(None, Language::En, &db(), now, &mut rng);
        assert_eq!(store.len(), 1);

        let found = store.resolve(Some(created.id()), Language::De, &db(), now, &mut rng);
        assert_eq!(found.id(), created.id());
        assert_eq!(found.language(), Language::En);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn resolve_unknown_id_creates_new_session() {
        let store = SessionStore::default();
        let mut rng = StdRng::seed_from_u64(2);

        let session = store.resolve(Some("missing"), Language::De, &db(), Instant::now(), &mut rng);
        assert_ne!(session.id(), "missing");
        assert_eq!(session.language(), Language::De);
        assert!(store.get_by_id(session.id()).is_some());
    }

    #[test]
    fn reads_are_copies_until_committed() {
        let store = SessionStore::default();
        let mut rng = StdRng::seed_from_u64(3);
        let session = store.resolve(None, Language::En, &db(), Instant::now(), &mut rng);

        let mut copy = store.get_by_id(session.id()).unwrap();
        copy.reveal_hint(&mut rng);
        assert!(store.get_by_id(session.id()).unwrap().game_state().letter_hints().is_empty());

        store.update_or_set(copy);
        assert_eq!(store.get_by_id(session.id()).unwrap().game_state().letter_hints().len(), 1);
    }

    #[test]
    fn remove_expired_keeps_fresh_sessions() {
        let store = SessionStore::new(Duration::from_secs(60));
        let mut rng = StdRng::seed_from_u64(4);
        let start = Instant::now();

        let old = store.resolve(None, Language::En, &db(), start, &mut rng);
        let fresh = store.resolve(None, Language::En, &db(), start + Duration::from_secs(30), &mut rng);

        assert_eq!(store.remove_expired(start + Duration::from_secs(59)), 0);
        assert_eq!(store.remove_expired(start + Duration::from_secs(60)), 1);
        assert!(store.get_by_id(old.id()).is_none());
        assert!(store.get_by_id(fresh.id()).is_some());
    }

    #[test]
    fn resolve_refreshes_expiry() {
        let store = SessionStore::new(Duration::from_secs(60));
        let mut rng = StdRng::seed_from_u64(5);
        let start = Instant::now();

        let session = store.resolve(None, Language::En, &db(), start, &mut rng);
        store.resolve(Some(session.id()), Language::En, &db(), start + Duration::from_secs(50), &mut rng);

        assert_eq!(store.remove_expired(start + Duration::from_secs(100)), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clones_share_sessions_across_threads() {
        let store = SessionStore::default();
        let handles: Vec<_> = (0..4)
            .map(|seed| {
                let store = store.clone();
                thread::spawn(move || {
                    let mut rng = StdRng::seed_from_u64(seed);
                    store.resolve(None, Language::En, &db(), Instant::now(), &mut rng);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 4);
    }
}
