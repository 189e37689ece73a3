//! Persuasive ("power") word lexicon.
//!
//! A lexicon maps a category name (e.g. `"urgency"`) to the words that belong
//! to it. Matching is case-insensitive and whole-word only. A lexicon is
//! immutable once built and is shared between analyses behind an `Arc`.
//!
//! Lexicon files are JSON objects of string arrays:
//!
//! ```json
//! { "urgency": ["now", "today"], "value": ["best", "proven"] }
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use camino::Utf8Path;
use regex::Regex;

use crate::error::{LexiconError, LexiconResult};

/// Words used when no lexicon file is configured or the file is unusable.
pub const DEFAULT_POWER_WORDS: &[(&str, &[&str])] = &[
    ("urgency", &["now", "today", "fast", "quick"]),
    ("value", &["best", "proven", "ultimate", "essential"]),
    ("curiosity", &["secret", "discover", "revealed", "truth"]),
];

static DEFAULT_LEXICON: LazyLock<LexicalResource> = LazyLock::new(|| {
    LexicalResource::from_categories(
        DEFAULT_POWER_WORDS
            .iter()
            .map(|(name, words)| (*name, words.iter().copied())),
    )
    .expect("built-in lexicon compiles")
});

#[derive(Debug, Clone)]
struct Entry {
    word: String,
    pattern: Regex,
}

/// A lexicon word found in some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconHit<'a> {
    /// Category the word belongs to.
    pub category: &'a str,
    /// The matched lexicon word (lowercase).
    pub word: &'a str,
}

/// Category → word mapping with precompiled whole-word matchers.
#[derive(Debug, Clone)]
pub struct LexicalResource {
    categories: BTreeMap<String, Vec<Entry>>,
}

impl LexicalResource {
    /// Build a lexicon from `(category, words)` pairs.
    ///
    /// Words are trimmed and lowercased; blanks and duplicates within a
    /// category are dropped.
    pub fn from_categories<C, W, I, S>(categories: C) -> LexiconResult<Self>
    where
        C: IntoIterator<Item = (W, I)>,
        W: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map: BTreeMap<String, Vec<Entry>> = BTreeMap::new();
        for (name, words) in categories {
            let entries = map.entry(name.into()).or_default();
            for word in words {
                let word = word.as_ref().trim().to_lowercase();
                if word.is_empty() || entries.iter().any(|e| e.word == word) {
                    continue;
                }
                let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&word)))
                    .map_err(|source| LexiconError::Pattern {
                        word: word.clone(),
                        source,
                    })?;
                entries.push(Entry { word, pattern });
            }
        }
        Ok(Self { categories: map })
    }

    /// Load a lexicon from a JSON file.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn load(path: &Utf8Path) -> LexiconResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: BTreeMap<String, Vec<String>> =
            serde_json::from_str(&raw).map_err(|source| LexiconError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let lexicon = Self::from_categories(parsed)?;
        if lexicon.word_count() == 0 {
            return Err(LexiconError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(
            categories = lexicon.categories.len(),
            words = lexicon.word_count(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Load `path` if given, falling back to the built-in lexicon on any error.
    pub fn load_or_default(path: Option<&Utf8Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(lexicon) => lexicon,
            Err(err) => {
                tracing::warn!(error = %err, %path, "using built-in power words");
                Self::default()
            }
        }
    }

    /// Category names, sorted.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Words in a category, or `None` if the category is unknown.
    pub fn words(&self, category: &str) -> Option<impl Iterator<Item = &str>> {
        self.categories
            .get(category)
            .map(|entries| entries.iter().map(|e| e.word.as_str()))
    }

    /// Total number of words across all categories.
    pub fn word_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Every `(category, word)` pair that occurs in `text` as a whole word.
    ///
    /// A word present several times in `text` is reported once per category.
    pub fn find_in<'a>(&'a self, text: &str) -> Vec<LexiconHit<'a>> {
        let lower = text.to_lowercase();
        self.categories
            .iter()
            .flat_map(|(category, entries)| {
                entries
                    .iter()
                    .filter(|e| e.pattern.is_match(&lower))
                    .map(move |e| LexiconHit {
                        category,
                        word: &e.word,
                    })
            })
            .collect()
    }
}

impl Default for LexicalResource {
    fn default() -> Self {
        DEFAULT_LEXICON.clone()
    }
}
