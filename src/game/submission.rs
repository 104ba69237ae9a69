//! Guess submission
//!
//! A submission is a form of rows keyed `r0`..`r5`, each a list of five
//! single-letter slots, as sent by a frontend. Rows before the active one are
//! echoed back by the client and ignored; only the active row is evaluated.

use super::state::GameState;
use crate::core::{Language, MAX_ATTEMPTS, Puzzle, WORD_LENGTH, Word};
use crate::wordlists::WordDatabase;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument, warn};

/// Submitted rows keyed `r<N>`
pub type GuessForm = FxHashMap<String, Vec<String>>;

/// Reasons a submission is rejected
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SubmissionError {
    /// The puzzle is already solved or lost
    #[display("round is over, start a new one")]
    RoundOver,
    /// The number of filled rows does not line up with the active row
    #[display("faked rows: {filled} filled rows submitted, active row is {active}")]
    FakedRows { active: usize, filled: usize },
    /// A row has the wrong number of slots or is missing
    #[display("row {row} is malformed: expected 5 slots, got {slots}")]
    MalformedRow { row: usize, slots: usize },
    /// The active row still has empty slots
    #[display("row {row} is not fully filled")]
    IncompleteRow { row: usize },
    #[display("'{word}' is not in the word list")]
    NotInWordList { word: Word },
}

/// Form key for a row index
#[must_use]
pub fn row_key(row: usize) -> String {
    format!("r{row}")
}

/// Encode the filled rows of `puzzle` plus `guess` as the next row
///
/// Produces the form a frontend would post: every earlier row echoed back,
/// `guess` split into one slot per character.
#[must_use]
pub fn form_for(puzzle: &Puzzle, guess: &str) -> GuessForm {
    let mut form: GuessForm = puzzle
        .rows()
        .iter()
        .take_while(|row| row.is_filled())
        .enumerate()
        .map(|(i, row)| {
            let slots = row.letters().iter().map(|l| l.letter.to_string()).collect();
            (row_key(i), slots)
        })
        .collect();

    form.insert(
        row_key(puzzle.active_row()),
        guess.chars().map(String::from).collect(),
    );
    form
}

/// Convert one row of slots into a word
///
/// Each slot is lowercased and its first code point kept, whatever it is.
/// Empty slots and the Unicode replacement character become
/// [`Word::EMPTY_LETTER`].
///
/// # Errors
/// Returns `SubmissionError::MalformedRow` (for `row`) if there are not
/// exactly five slots.
pub fn slice_to_word(row: usize, slots: &[String]) -> Result<Word, SubmissionError> {
    if slots.len() != WORD_LENGTH {
        return Err(SubmissionError::MalformedRow {
            row,
            slots: slots.len(),
        });
    }

    let mut letters = [Word::EMPTY_LETTER; WORD_LENGTH];
    for (letter, slot) in letters.iter_mut().zip(slots) {
        *letter = slot
            .chars()
            .flat_map(char::to_lowercase)
            .next()
            .unwrap_or(Word::EMPTY_LETTER);
    }

    Ok(Word::from_letters(letters))
}

/// Count rows `r0`, `r1`, ... that hold at least one non-empty slot
///
/// Counting stops at the first missing or blank row.
#[must_use]
pub fn count_filled_rows(form: &GuessForm) -> usize {
    (0..MAX_ATTEMPTS)
        .take_while(|&row| {
            form.get(&row_key(row))
                .is_some_and(|slots| slots.iter().any(|s| !s.trim().is_empty()))
        })
        .count()
}

/// Validate a submission and evaluate the active row
///
/// Returns the updated state; `game` itself is never modified, so a rejected
/// submission leaves the caller's state exactly as it was.
///
/// # Errors
/// Returns `SubmissionError` if the round is over, the row count is faked, the
/// active row is malformed or incomplete, or the word is not in the word list
/// for `language`.
#[instrument(skip(game, form, db))]
pub fn submit_guess(
    game: &GameState,
    form: &GuessForm,
    language: Language,
    db: &WordDatabase,
) -> Result<GameState, SubmissionError> {
    let mut puzzle = game.puzzle();
    if puzzle.is_finished() {
        debug!("Submission after round end");
        return Err(SubmissionError::RoundOver);
    }

    let active = puzzle.active_row();
    let filled = count_filled_rows(form);
    if filled.checked_sub(1) != Some(active) {
        warn!(active, filled, "Rejected faked rows");
        return Err(SubmissionError::FakedRows { active, filled });
    }

    let slots = form
        .get(&row_key(active))
        .ok_or(SubmissionError::MalformedRow {
            row: active,
            slots: 0,
        })?;
    let word = slice_to_word(active, slots)?;
    if !word.is_filled() {
        return Err(SubmissionError::IncompleteRow { row: active });
    }

    if !db.exists(language, &word) {
        debug!(%word, "Guess not in word list");
        return Err(SubmissionError::NotInWordList { word });
    }

    let guess = puzzle
        .submit(&word, &game.active_solution())
        .map_err(|_| SubmissionError::RoundOver)?;
    debug!(row = active, result = %guess.to_emoji(), "Evaluated guess");

    Ok(game.clone().with_puzzle(puzzle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Match;
    use crate::wordlists::{Collection, MemorySource, SourceLayout};
    use std::collections::BTreeMap;

    fn db() -> WordDatabase {
        let source = MemorySource::new()
            .with_file("all.txt", "# metadata\ngamer\ngames\ncrane\nslate\n")
            .with_file("common.txt", "# metadata\nroate\n");
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

    fn game() -> GameState {
        GameState::with_solution(Word::new("roate").unwrap())
    }

    fn slots(text: &str) -> Vec<String> {
        text.chars().map(String::from).collect()
    }

    fn form(rows: &[&str]) -> GuessForm {
        rows.iter()
            .enumerate()
            .map(|(i, row)| (row_key(i), slots(row)))
            .collect()
    }

    #[test]
    fn form_for_echoes_earlier_rows() {
        let state = submit_guess(&game(), &form(&["crane"]), Language::En, &db()).unwrap();
        let next = form_for(&state.puzzle(), "SLATE");

        assert_eq!(next.len(), 2);
        assert_eq!(next[&row_key(0)], slots("crane"));
        assert_eq!(next[&row_key(1)], slots("SLATE"));
        assert_eq!(count_filled_rows(&next), 2);

        let state = submit_guess(&state, &next, Language::En, &db()).unwrap();
        assert_eq!(state.puzzle().rows()[1].word().to_string(), "slate");
    }

    #[test]
    fn slice_to_word_lowercases_first_code_point() {
        let slots = vec![
            "Gx".to_string(),
            "A".to_string(),
            "m".to_string(),
            "E".to_string(),
            "r".to_string(),
        ];
        assert_eq!(slice_to_word(0, &slots).unwrap().to_string(), "gamer");
    }

    #[test]
    fn slice_to_word_maps_bad_slots_to_sentinel() {
        let slots = vec![
            String::new(),
            "\u{FFFD}".to_string(),
            "1".to_string(),
            "e".to_string(),
            "r".to_string(),
        ];
        let word = slice_to_word(0, &slots).unwrap();

        assert_eq!(word.letter_at(0), Word::EMPTY_LETTER);
        assert_eq!(word.letter_at(1), Word::EMPTY_LETTER);
        assert_eq!(word.letter_at(2), '1');
        assert!(!word.is_filled());
    }

    #[test]
    fn non_letter_slots_reach_the_word_list() {
        let slots: Vec<String> = ["o", "'", "D", "a", "y"].map(String::from).to_vec();
        assert_eq!(slice_to_word(0, &slots).unwrap().to_string(), "o'day");

        let result = submit_guess(&game(), &form(&["cran3"]), Language::En, &db());
        assert_eq!(
            result,
            Err(SubmissionError::NotInWordList {
                word: Word::from_code_points("cran3").unwrap()
            })
        );
    }

    #[test]
    fn slice_to_word_rejects_wrong_slot_count() {
        assert_eq!(
            slice_to_word(2, &slots("game")),
            Err(SubmissionError::MalformedRow { row: 2, slots: 4 })
        );
    }

    #[test]
    fn count_filled_rows_stops_at_gap() {
        let mut rows = form(&["gamer", "crane"]);
        rows.insert(row_key(3), slots("slate"));
        rows.insert(row_key(2), vec![String::new(); 5]);

        assert_eq!(count_filled_rows(&rows), 2);
        assert_eq!(count_filled_rows(&GuessForm::default()), 0);
    }

    #[test]
    fn accepted_guess_fills_active_row() {
        let before = game();
        let after = submit_guess(&before, &form(&["crane"]), Language::En, &db()).unwrap();

        assert_eq!(after.puzzle().active_row(), 1);
        let row = after.puzzle().rows()[0];
        assert_eq!(row.word().to_string(), "crane");
        assert_eq!(row.letters()[2].matched, Match::Exact);
        assert_eq!(before.puzzle().active_row(), 0);
    }

    #[test]
    fn guess_is_case_insensitive() {
        let state = submit_guess(&game(), &form(&["GAMER"]), Language::En, &db()).unwrap();
        assert_eq!(state.puzzle().rows()[0].word().to_string(), "gamer");
    }

    #[test]
    fn solving_ends_the_round() {
        let state = submit_guess(&game(), &form(&["roate"]), Language::En, &db()).unwrap();
        assert!(state.puzzle().is_solved());

        let again = submit_guess(&state, &form(&["roate", "gamer"]), Language::En, &db());
        assert_eq!(again, Err(SubmissionError::RoundOver));
    }

    #[test]
    fn earlier_rows_are_not_rewritten() {
        let state = submit_guess(&game(), &form(&["crane"]), Language::En, &db()).unwrap();
        let state = submit_guess(&state, &form(&["slate", "gamer"]), Language::En, &db()).unwrap();

        assert_eq!(state.puzzle().rows()[0].word().to_string(), "crane");
        assert_eq!(state.puzzle().rows()[1].word().to_string(), "gamer");
    }

    #[test]
    fn faked_rows_are_rejected() {
        let result = submit_guess(&game(), &form(&["crane", "gamer"]), Language::En, &db());
        assert_eq!(
            result,
            Err(SubmissionError::FakedRows {
                active: 0,
                filled: 2
            })
        );

        let result = submit_guess(&game(), &GuessForm::default(), Language::En, &db());
        assert!(matches!(result, Err(SubmissionError::FakedRows { .. })));
    }

    #[test]
    fn unknown_word_is_rejected() {
        let result = submit_guess(&game(), &form(&["hello"]), Language::En, &db());
        assert_eq!(
            result,
            Err(SubmissionError::NotInWordList {
                word: Word::new("hello").unwrap()
            })
        );
    }

    #[test]
    fn unknown_language_rejects_every_word() {
        let result = submit_guess(&game(), &form(&["gamer"]), Language::De, &db());
        assert!(matches!(result, Err(SubmissionError::NotInWordList { .. })));
    }

    #[test]
    fn partial_row_is_incomplete() {
        let mut rows = GuessForm::default();
        rows.insert(
            row_key(0),
            vec![
                "g".to_string(),
                "a".to_string(),
                String::new(),
                "e".to_string(),
                "r".to_string(),
            ],
        );

        let result = submit_guess(&game(), &rows, Language::En, &db());
        assert_eq!(result, Err(SubmissionError::IncompleteRow { row: 0 }));
    }

    #[test]
    fn short_row_is_malformed() {
        let result = submit_guess(&game(), &form(&["game"]), Language::En, &db());
        assert_eq!(
            result,
            Err(SubmissionError::MalformedRow { row: 0, slots: 4 })
        );
    }
}
