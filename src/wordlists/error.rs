//! Word database error types

use crate::core::{Language, WordError};
use derive_more::{Display, Error};
use std::io;

use super::Collection;

/// Failure while building the database
///
/// Every variant is fatal: a partially loaded database is never returned.
#[derive(Debug, Display, Error)]
pub enum DatabaseError {
    #[display("failed to open word source '{path}': {source}")]
    Open { path: String, source: io::Error },

    #[display("failed to read size of word source '{path}': {source}")]
    Stat { path: String, source: io::Error },

    #[display("word source '{path}' exceeds size limit: size={size}, limit={limit}")]
    TooLarge { path: String, size: u64, limit: u64 },

    #[display("failed to parse line {line_number} of '{path}' as word: '{line}': {source}")]
    Parse {
        path: String,
        line_number: usize,
        line: String,
        source: WordError,
    },

    #[display("failed reading word source '{path}': {source}")]
    Scan { path: String, source: io::Error },
}

/// Failure to pick a random solution word
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PickError {
    #[display("random pick exceeded retries: attempt={attempt}, max={max}")]
    RetriesExhausted { attempt: u8, max: u8 },

    #[display("random pick failed with unknown language: '{language}'")]
    UnknownLanguage { language: Language },

    #[display("random pick for language '{language}' found no collection")]
    UnknownCollection { language: Language },

    #[display("random pick for language '{language}' hit empty collection '{collection}'")]
    EmptyCollection {
        language: Language,
        collection: Collection,
    },
}
