//! Lettr
//!
//! A daily five-letter word puzzle engine: guess evaluation, per-language word
//! lists, game rounds with letter hints, and player sessions.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lettr::core::{Language, Word, WordGuess};
//! use lettr::wordlists::WordDatabase;
//!
//! let db = WordDatabase::from_embedded().unwrap();
//! let guess = Word::new("crane").unwrap();
//! assert!(db.exists(Language::En, &guess));
//!
//! let result = WordGuess::evaluate(&guess, &Word::new("roate").unwrap());
//! println!("{}", result.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game rounds
pub mod game;

// Player sessions
pub mod session;

// Configuration file
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
