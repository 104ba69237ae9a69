//! Evaluate a single guess against a chosen solution

use crate::core::{Word, WordGuess};
use anyhow::{Context, Result};

/// Outcome of evaluating one guess
#[derive(Debug, Clone)]
pub struct EvaluateResult {
    pub solution: Word,
    pub guess: WordGuess,
}

/// Evaluate `guess` against `solution`
///
/// Neither word has to be in a word list.
///
/// # Errors
///
/// Returns an error if either input is not a five-letter word.
pub fn evaluate_words(guess: &str, solution: &str) -> Result<EvaluateResult> {
    let guessed = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let solution = Word::new(solution).with_context(|| format!("Invalid solution '{solution}'"))?;

    Ok(EvaluateResult {
        solution,
        guess: WordGuess::evaluate(&guessed, &solution),
    })
}
