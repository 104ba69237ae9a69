//! Word lists for the puzzle
//!
//! Loads per-language dictionaries from a [`WordSource`] into a read-only
//! [`WordDatabase`]. Default dictionaries are embedded into the binary.

mod database;
mod embedded;
mod error;
pub mod loader;
mod source;

pub use database::{WordDatabase, WordSet, fallback_word};
pub use embedded::{EMBEDDED_SOURCES, EMBEDDED_SOURCES_COUNT};
pub use error::{DatabaseError, PickError};
pub use source::{DirSource, EmbeddedSource, MemorySource, SourceFile, WordSource};

use crate::core::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Named word collection within a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Every accepted guess
    All,
    /// Candidates for the daily solution
    Common,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Common => write!(f, "common"),
        }
    }
}

/// Source paths per language and collection
pub type SourceLayout = BTreeMap<Language, BTreeMap<Collection, Vec<String>>>;

/// The standard dictionary layout
///
/// For each language the news corpus supplies the common words, and the
/// corpus plus the full word list make up all accepted guesses.
#[must_use]
pub fn default_layout() -> SourceLayout {
    let mut layout = SourceLayout::new();

    for (language, corpus, word_list) in [
        (
            Language::En,
            "configs/corpora-eng_news_2023_10K-export.txt",
            "configs/en-en.words.v2.txt",
        ),
        (
            Language::De,
            "configs/corpora-deu_news_2023_10K-export.txt",
            "configs/de-de.words.v2.txt",
        ),
    ] {
        layout.insert(
            language,
            BTreeMap::from([
                (
                    Collection::All,
                    vec![corpus.to_string(), word_list.to_string()],
                ),
                (Collection::Common, vec![corpus.to_string()]),
            ]),
        );
    }

    layout
}
