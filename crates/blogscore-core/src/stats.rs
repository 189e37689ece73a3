//! Raw content counts.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tokenizer::Tokenizer;

/// Average silent reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 265;

static EMPHASIS_AND_HEADINGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#*`]").expect("valid regex"));

/// Word, sentence, and paragraph counts for a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContentStats {
    /// Whitespace-delimited words after stripping `#`, `*`, and backticks.
    pub word_count: usize,
    /// Estimated reading time, never less than one minute.
    pub reading_time_minutes: usize,
    /// Characters in the unmodified content.
    pub character_count: usize,
    /// Sentences in the stripped content.
    pub sentence_count: usize,
    /// Blank-line separated blocks in the unmodified content.
    pub paragraph_count: usize,
}

/// Count words, sentences, and paragraphs in `content`.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn compute_stats(content: &str, tokenizer: &dyn Tokenizer) -> ContentStats {
    let clean = EMPHASIS_AND_HEADINGS.replace_all(content, "");
    let word_count = tokenizer.words(&clean).len();

    let stats = ContentStats {
        word_count,
        reading_time_minutes: (word_count / WORDS_PER_MINUTE).max(1),
        character_count: content.chars().count(),
        sentence_count: tokenizer.sentences(&clean).len(),
        paragraph_count: tokenizer.paragraphs(content).len(),
    };
    tracing::debug!(?stats, "stats computed");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::BasicTokenizer;

    fn stats(content: &str) -> ContentStats {
        compute_stats(content, &BasicTokenizer)
    }

    #[test]
    fn empty_content() {
        let s = stats("");
        assert_eq!(s.word_count, 0);
        assert_eq!(s.reading_time_minutes, 1);
        assert_eq!(s.character_count, 0);
        // No ". " to split on still leaves one segment
        assert_eq!(s.sentence_count, 1);
        assert_eq!(s.paragraph_count, 0);
    }

    #[test]
    fn word_count_ignores_bare_markers() {
        // "#" alone and "**" alone vanish; brackets are kept
        let s = stats("# Title\n\nSome **bold** and `code` here [link].\n\n* item");
        assert_eq!(s.word_count, 8);
    }

    #[test]
    fn character_count_uses_raw_content() {
        let s = stats("## Café");
        assert_eq!(s.character_count, 7);
    }

    #[test]
    fn sentences_and_paragraphs() {
        let s = stats("# Title\n\nPara one. Para two. Para three.\n\n## Sub\n\nMore text here.");
        assert_eq!(s.paragraph_count, 4);
        assert_eq!(s.sentence_count, 3);
        assert_eq!(s.word_count, 11);
    }

    #[test]
    fn reading_time_uses_integer_division() {
        assert_eq!(stats(&"word ".repeat(264)).reading_time_minutes, 1);
        assert_eq!(stats(&"word ".repeat(530)).reading_time_minutes, 2);
        assert_eq!(stats(&"word ".repeat(794)).reading_time_minutes, 2);
    }
}
