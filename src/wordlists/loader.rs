//! Word source parsing
//!
//! A source is UTF-8 text: the first line is metadata and is skipped, every
//! following line must be exactly one word.

use super::error::DatabaseError;
use super::source::WordSource;
use crate::core::Word;
use std::io::{BufRead, BufReader};
use tracing::{debug, instrument};

/// Largest accepted source, in bytes (2 MiB)
pub const MAX_SOURCE_SIZE: u64 = 2 * 1024 * 1024;

/// Load all words from one source
///
/// Returns lowercased words in file order. Fails on the first bad line, so a
/// caller never sees a partial list.
///
/// # Errors
///
/// Returns `DatabaseError` if the source cannot be opened or sized, exceeds
/// [`MAX_SOURCE_SIZE`], is not valid UTF-8, or contains a line that is not a word.
///
/// # Examples
/// ```
/// use lettr::wordlists::{MemorySource, loader::load_from_source};
///
/// let source = MemorySource::new().with_file("en.txt", "# metadata\nGamer\ngames\n");
/// let words = load_from_source(&source, "en.txt").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].to_string(), "gamer");
/// ```
#[instrument(skip(source))]
pub fn load_from_source(source: &dyn WordSource, path: &str) -> Result<Vec<Word>, DatabaseError> {
    let file = source.open(path).map_err(|source| DatabaseError::Open {
        path: path.to_string(),
        source,
    })?;

    let size = file.size().map_err(|source| DatabaseError::Stat {
        path: path.to_string(),
        source,
    })?;

    if size > MAX_SOURCE_SIZE {
        return Err(DatabaseError::TooLarge {
            path: path.to_string(),
            size,
            limit: MAX_SOURCE_SIZE,
        });
    }

    let mut words = Vec::new();

    // Skip first metadata line
    for (index, line) in BufReader::new(file).lines().enumerate().skip(1) {
        let line = line.map_err(|source| DatabaseError::Scan {
            path: path.to_string(),
            source,
        })?;

        let word = Word::from_code_points(&line).map_err(|source| DatabaseError::Parse {
            path: path.to_string(),
            line_number: index + 1,
            line: line.clone(),
            source,
        })?;

        words.push(word.to_lower());
    }

    debug!(count = words.len(), "Loaded word source");
    Ok(words)
}
