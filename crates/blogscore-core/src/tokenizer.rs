//! Sentence, word, and paragraph segmentation.
//!
//! Every analyzer goes through the [`Tokenizer`] trait. Two backends exist:
//!
//! - [`BasicTokenizer`] splits sentences on the literal `". "` and words on
//!   whitespace. It is deterministic and is the default; scores documented
//!   for this crate are computed with it. Segments are kept as-is, so `""`
//!   is one (empty) sentence and a trailing `". "` adds an empty one.
//! - [`RichTokenizer`] segments sentences on `.`, `!`, and `?` while
//!   skipping abbreviations, initials, decimals, and URLs.
//!
//! The backend is picked once, when a [`PostAnalyzer`](crate::PostAnalyzer)
//! is built, via [`TokenizerBackend::build`].

use std::fmt;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Segmentation capability shared by all analyzers.
///
/// Returned slices borrow from the input text.
pub trait Tokenizer: fmt::Debug + Send + Sync {
    /// Short backend name, used in logs.
    fn name(&self) -> &'static str;

    /// Split text into sentences, in order.
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Split text into words, in order.
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }

    /// Split text into trimmed, non-empty blocks separated by a blank line.
    fn paragraphs<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

/// Which tokenizer implementation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TokenizerBackend {
    /// Split on `". "` and whitespace (deterministic default).
    #[default]
    Basic,
    /// Punctuation-aware sentence segmentation.
    Rich,
}

impl TokenizerBackend {
    /// Returns the backend name as used in configuration files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Rich => "rich",
        }
    }

    /// Instantiate the selected tokenizer.
    pub fn build(self) -> Arc<dyn Tokenizer> {
        match self {
            Self::Basic => Arc::new(BasicTokenizer),
            Self::Rich => Arc::new(RichTokenizer),
        }
    }
}

impl fmt::Display for TokenizerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Always-available fallback: sentences end at `". "`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTokenizer;

impl Tokenizer for BasicTokenizer {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(". ").collect()
    }
}

/// Punctuation-aware sentence segmentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RichTokenizer;

impl Tokenizer for RichTokenizer {
    fn name(&self) -> &'static str {
        "rich"
    }

    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            if !is_terminator(ch) {
                continue;
            }

            // Absorb "?!", "...", and closing quotes/brackets into one run.
            let mut end = idx + ch.len_utf8();
            while let Some(&(i, c)) = chars.peek() {
                if !(is_terminator(c) || is_closer(c)) {
                    break;
                }
                end = i + c.len_utf8();
                chars.next();
            }

            if ends_sentence(text, idx, end, ch) {
                push_trimmed(&mut sentences, &text[start..end]);
                start = end;
            }
        }

        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }
}

/// Lowercased abbreviations that never end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "cf",
    "al", "inc", "ltd", "co", "corp", "dept", "est", "approx", "fig", "no", "vol", "pp", "ed",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

const fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}

/// Decide whether the terminator run `text[term_at..run_end]` closes a sentence.
fn ends_sentence(text: &str, term_at: usize, run_end: usize, first: char) -> bool {
    let rest = &text[run_end..];
    let after_space = rest.trim_start();
    let Some(next) = after_space.chars().next() else {
        return true;
    };

    // "3.14", "example.com", "v1.2.3"
    if after_space.len() == rest.len() {
        return false;
    }

    if first != '.' {
        return true;
    }

    let before = word_before(&text[..term_at]);
    if is_abbreviation(before) || is_initial(before) {
        return false;
    }

    !next.is_lowercase()
}

/// Trailing run of alphanumerics and dots, e.g. `"e.g"` for `"see e.g"`.
fn word_before(prefix: &str) -> &str {
    prefix
        .rsplit(|c: char| !(c.is_alphanumeric() || c == '.'))
        .next()
        .unwrap_or("")
}

fn is_abbreviation(word: &str) -> bool {
    let lower = word.trim_matches('.').to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

/// Single capitals separated by dots: "J", "J.K", "U.S".
fn is_initial(word: &str) -> bool {
    let mut parts = word.split('.').filter(|p| !p.is_empty()).peekable();
    parts.peek().is_some()
        && parts.all(|p| {
            let mut cs = p.chars();
            matches!((cs.next(), cs.next()), (Some(c), None) if c.is_uppercase())
        })
}
