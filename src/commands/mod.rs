//! Command implementations

pub mod evaluate;
pub mod lookup;
pub mod simple;

pub use evaluate::{EvaluateResult, evaluate_words};
pub use lookup::{CheckResult, PickResult, check_word, pick_word};
pub use simple::run_simple;
