//! Configuration file
//!
//! Every key is optional; a missing file section falls back to the built-in
//! defaults, which play from the embedded dictionaries.
//!
//! ```toml
//! default_language = "de"
//! session_max_age_secs = 3600
//! words_dir = "/usr/share/lettr"
//!
//! [sources.en]
//! all = ["configs/en-en.words.v2.txt"]
//! common = ["configs/corpora-eng_news_2023_10K-export.txt"]
//! ```

use crate::core::Language;
use crate::wordlists::{DatabaseError, DirSource, EmbeddedSource, SourceLayout, WordDatabase, default_layout};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};
use tracing::{debug, info, instrument};

/// Errors while loading the configuration
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display("failed to read config file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Language for new sessions
    pub default_language: Language,
    /// Lifetime of an untouched session, in seconds
    pub session_max_age_secs: u64,
    /// Directory the source paths are relative to; embedded sources when unset
    pub words_dir: Option<PathBuf>,
    /// Source files per language and collection
    pub sources: SourceLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            session_max_age_secs: 24 * 60 * 60,
            words_dir: None,
            sources: default_layout(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from file");

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(language = %config.default_language, "Config loaded");
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the defaults
    ///
    /// # Errors
    /// Returns `ConfigError` if a given file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    #[must_use]
    pub const fn session_max_age(&self) -> Duration {
        Duration::from_secs(self.session_max_age_secs)
    }

    /// Build the word database from the configured sources
    ///
    /// # Errors
    /// Returns `DatabaseError` if any source fails to load.
    pub fn word_database(&self) -> Result<WordDatabase, DatabaseError> {
        match &self.words_dir {
            Some(dir) => WordDatabase::init(&DirSource::new(dir), &self.sources),
            None => WordDatabase::init(&EmbeddedSource, &self.sources),
        }
    }
}
