//! Per-language word database
//!
//! Built once at startup, then shared read-only. Each language has an `all`
//! collection (accepted guesses) and optionally a `common` collection
//! (solution candidates).

use super::error::{DatabaseError, PickError};
use super::loader::load_from_source;
use super::source::{EmbeddedSource, WordSource};
use super::{Collection, SourceLayout, default_layout};
use crate::core::{Language, Word};
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info, instrument, warn};

/// Set of words with stable indices for uniform selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordSet {
    /// Insert a word; returns false if it was already present
    pub fn insert(&mut self, word: Word) -> bool {
        let word = word.to_lower();
        if self.index.insert(word) {
            self.words.push(word);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }
}

impl FromIterator<Word> for WordSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut set = Self::default();
        for word in iter {
            set.insert(word);
        }
        set
    }
}

/// Dictionary of all languages and collections
#[derive(Debug, Clone, Default)]
pub struct WordDatabase {
    db: FxHashMap<Language, FxHashMap<Collection, WordSet>>,
}

impl WordDatabase {
    /// Maximum retries when a pick lands on an avoided word
    pub const MAX_RETRY: u8 = 10;

    /// Solution used when no word can be picked
    pub const FALLBACK_WORD: &'static str = "roate";

    /// Build the database from `layout`, reading every listed source
    ///
    /// Words of the `common` collection are also added to `all`, so every
    /// solution candidate is an accepted guess.
    ///
    /// # Errors
    ///
    /// Returns the first `DatabaseError` hit. No partially built database is returned.
    #[instrument(skip(source, layout))]
    pub fn init(source: &dyn WordSource, layout: &SourceLayout) -> Result<Self, DatabaseError> {
        let mut db: FxHashMap<Language, FxHashMap<Collection, WordSet>> = FxHashMap::default();

        for (&language, collections) in layout {
            let entry = db.entry(language).or_default();

            for (&collection, paths) in collections {
                let set = entry.entry(collection).or_default();
                for path in paths {
                    for word in load_from_source(source, path)? {
                        set.insert(word);
                    }
                }
            }

            if let Some(common) = entry.get(&Collection::Common).cloned() {
                let all = entry.entry(Collection::All).or_default();
                for word in common.iter() {
                    all.insert(*word);
                }
            }

            for (collection, set) in entry.iter() {
                info!(%language, %collection, words = set.len(), "Loaded word collection");
            }
        }

        Ok(Self { db })
    }

    /// Build the database from the dictionaries compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if an embedded source is malformed.
    pub fn from_embedded() -> Result<Self, DatabaseError> {
        Self::init(&EmbeddedSource, &default_layout())
    }

    /// Get a collection, if loaded
    #[must_use]
    pub fn collection(&self, language: Language, collection: Collection) -> Option<&WordSet> {
        self.db.get(&language)?.get(&collection)
    }

    /// True if `word` is an accepted guess in `language`
    ///
    /// Case-insensitive. Unknown languages simply yield false.
    #[must_use]
    pub fn exists(&self, language: Language, word: &Word) -> bool {
        self.collection(language, Collection::All)
            .is_some_and(|set| set.contains(word))
    }

    /// Pick a uniformly random solution word not in `avoid`
    ///
    /// Draws from `common`, or from `all` when the language has no `common`
    /// collection. A draw that hits `avoid` is retried; `retries` is the number
    /// of attempts already spent, and the pick fails once it passes
    /// [`Self::MAX_RETRY`].
    ///
    /// # Errors
    ///
    /// Returns `PickError` if retries run out, or the language or collection is
    /// unknown or empty.
    pub fn random_pick<R: Rng + ?Sized>(
        &self,
        language: Language,
        avoid: &[Word],
        retries: u8,
        rng: &mut R,
    ) -> Result<Word, PickError> {
        if retries > Self::MAX_RETRY {
            return Err(PickError::RetriesExhausted {
                attempt: retries,
                max: Self::MAX_RETRY,
            });
        }

        let collections = self
            .db
            .get(&language)
            .ok_or(PickError::UnknownLanguage { language })?;

        let (collection, set) = [Collection::Common, Collection::All]
            .into_iter()
            .find_map(|c| collections.get(&c).map(|set| (c, set)))
            .ok_or(PickError::UnknownCollection { language })?;

        if set.is_empty() {
            return Err(PickError::EmptyCollection {
                language,
                collection,
            });
        }

        for attempt in retries..=Self::MAX_RETRY {
            let rolled = rng.random_range(0..set.len());
            let Some(word) = set.get(rolled) else {
                continue;
            };

            if avoid.contains(word) {
                debug!(%language, %word, attempt, "Picked avoided word, retrying");
                continue;
            }

            return Ok(*word);
        }

        Err(PickError::RetriesExhausted {
            attempt: Self::MAX_RETRY + 1,
            max: Self::MAX_RETRY,
        })
    }

    /// Like [`Self::random_pick`], but never fails
    ///
    /// Any error yields [`Self::FALLBACK_WORD`]. The result is always lowercase.
    pub fn random_pick_with_fallback<R: Rng + ?Sized>(
        &self,
        language: Language,
        avoid: &[Word],
        retries: u8,
        rng: &mut R,
    ) -> Word {
        match self.random_pick(language, avoid, retries, rng) {
            Ok(word) => word.to_lower(),
            Err(err) => {
                warn!(%language, error = %err, "Random pick failed, using fallback word");
                fallback_word()
            }
        }
    }
}

/// The fixed fallback solution
#[must_use]
pub fn fallback_word() -> Word {
    Word::new(WordDatabase::FALLBACK_WORD)
        .map(|w| w.to_lower())
        .unwrap_or_default()
}
