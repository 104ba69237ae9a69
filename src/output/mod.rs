//! Terminal output formatting
//!
//! Colored boards, keyboards and command results.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_evaluate_result, print_pick_result, print_round};
