//! Supported puzzle languages

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed set of languages with a dictionary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

/// Error for an unsupported language tag
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("couldn't create new language from given value: '{tag}'")]
pub struct LanguageError {
    pub tag: String,
}

impl Language {
    /// Every supported language
    pub const ALL: [Self; 2] = [Self::En, Self::De];

    /// Two-letter tag, e.g. `"en"`
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Parse a tag, falling back to English for anything unsupported
    #[must_use]
    pub fn from_tag_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "de" => Ok(Self::De),
            other => Err(LanguageError {
                tag: other.to_string(),
            }),
        }
    }
}
