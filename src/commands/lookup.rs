//! Dictionary lookups: membership check and random solution pick

use crate::core::{Language, Word};
use crate::wordlists::WordDatabase;
use anyhow::{Context, Result};
use rand::Rng;

/// Whether a word is an accepted guess
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub word: Word,
    pub language: Language,
    pub exists: bool,
}

/// A randomly picked solution
#[derive(Debug, Clone)]
pub struct PickResult {
    pub word: Word,
    pub language: Language,
    pub avoided: usize,
}

/// Check `text` against the `language` word list
///
/// # Errors
///
/// Returns an error if `text` is not a five-letter word.
pub fn check_word(db: &WordDatabase, language: Language, text: &str) -> Result<CheckResult> {
    let word = Word::new(text).with_context(|| format!("Invalid word '{text}'"))?;
    Ok(CheckResult {
        word,
        language,
        exists: db.exists(language, &word),
    })
}

/// Pick a solution for `language`, avoiding every word in `avoid`
///
/// # Errors
///
/// Returns an error if an avoided word is malformed or no word can be picked.
pub fn pick_word<R: Rng + ?Sized>(
    db: &WordDatabase,
    language: Language,
    avoid: &[String],
    rng: &mut R,
) -> Result<PickResult> {
    let avoid = avoid
        .iter()
        .map(|text| Word::new(text).with_context(|| format!("Invalid word to avoid '{text}'")))
        .collect::<Result<Vec<_>>>()?;

    let word = db
        .random_pick(language, &avoid, 0, rng)
        .with_context(|| format!("Could not pick a {language} word"))?;

    Ok(PickResult {
        word,
        language,
        avoided: avoid.len(),
    })
}
