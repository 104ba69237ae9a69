//! Lettr - CLI
//!
//! Daily word puzzle with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lettr::{
    commands::{check_word, evaluate_words, pick_word, run_simple},
    config::Config,
    core::Language,
    interactive::{App, run_tui},
    output::{print_check_result, print_evaluate_result, print_pick_result},
    session::SessionStore,
    wordlists::WordDatabase,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lettr",
    about = "Daily five-letter word puzzle in English and German",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Language: 'en' or 'de' (default from config, else 'en')
    #[arg(short, long, global = true)]
    lang: Option<Language>,

    /// Directory to read word lists from instead of the built-in ones
    #[arg(short = 'w', long, global = true)]
    words_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Evaluate a guess against a solution
    Evaluate {
        /// The guessed word
        guess: String,

        /// The solution word
        solution: String,
    },

    /// Check whether a word is an accepted guess
    Check {
        /// Word to look up
        word: String,
    },

    /// Pick a random solution word
    Pick {
        /// Words the pick must avoid
        #[arg(short, long, num_args = 1..)]
        avoid: Vec<String>,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.words_dir {
        config.words_dir = Some(dir);
    }
    let language = cli.lang.unwrap_or(config.default_language);
    debug!(?config, %language, "Resolved configuration");

    let load_words = || -> Result<WordDatabase> {
        let db = config.word_database().context("Failed to load word lists")?;
        info!("Word database ready");
        Ok(db)
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&load_words()?, &config, language),
        Commands::Simple => {
            let mut rng = StdRng::from_rng(&mut rand::rng());
            run_simple(&load_words()?, language, config.session_max_age(), &mut rng)
        }
        Commands::Evaluate { guess, solution } => {
            print_evaluate_result(&evaluate_words(&guess, &solution)?);
            Ok(())
        }
        Commands::Check { word } => {
            print_check_result(&check_word(&load_words()?, language, &word)?);
            Ok(())
        }
        Commands::Pick { avoid } => {
            let result = pick_word(&load_words()?, language, &avoid, &mut rand::rng())?;
            print_pick_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(db: &WordDatabase, config: &Config, language: Language) -> Result<()> {
    let store = SessionStore::new(config.session_max_age());
    let app = App::new(db, store, language, StdRng::from_rng(&mut rand::rng()));
    run_tui(app)
}
