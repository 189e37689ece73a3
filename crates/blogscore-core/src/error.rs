//! Error types for blogscore-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a power-word lexicon.
///
/// Analyzers never see these: [`LexicalResource::load_or_default`] logs them
/// and falls back to the built-in word set.
///
/// [`LexicalResource::load_or_default`]: crate::lexicon::LexicalResource::load_or_default
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The lexicon file could not be read.
    #[error("failed to read lexicon {path}")]
    Read {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The lexicon file is not a JSON object of string arrays.
    #[error("malformed lexicon {path}")]
    Parse {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The lexicon parsed but contains no words.
    #[error("lexicon {path} contains no words")]
    Empty {
        /// Path that was attempted.
        path: Utf8PathBuf,
    },

    /// A word could not be compiled into a matcher.
    #[error("cannot build matcher for word {word:?}")]
    Pattern {
        /// The offending word.
        word: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// Result type alias using [`LexiconError`].
pub type LexiconResult<T> = Result<T, LexiconError>;
