//! Game rounds: state, hints, submissions and the keyboard view

mod hint;
mod keyboard;
mod state;
pub mod submission;

pub use keyboard::{KeyState, Keyboard};
pub use state::GameState;
pub use submission::{
    GuessForm, SubmissionError, count_filled_rows, form_for, slice_to_word, submit_guess,
};
