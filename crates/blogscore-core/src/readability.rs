//! Readability scoring.
//!
//! - Flesch Reading Ease: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`,
//!   clamped to 0–100. Higher = easier.
//! - Flesch-Kincaid Grade: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`,
//!   floored at 0.
//!
//! Syllables are estimated per whitespace token by counting vowel groups, so
//! scores are approximate. Passive voice is flagged by the pattern
//! `was|were|been|being` followed by a word ending in `-ed`.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tokenizer::Tokenizer;

/// Markdown control characters removed before scoring.
static MARKDOWN_CONTROL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#*`\[\]]").expect("valid regex"));

static NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").expect("valid regex"));

static PASSIVE_VOICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:was|were|been|being)\s+\w+ed\b").expect("valid regex")
});

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch-Kincaid grade level (≥ 0, 1 decimal).
    pub grade_level: f64,
    /// Flesch Reading Ease (0–100, 1 decimal).
    pub reading_ease: f64,
    /// Average words per sentence (1 decimal).
    pub avg_sentence_length: f64,
    /// Passive constructions per 100 sentences (1 decimal).
    pub passive_voice_pct: f64,
    /// `100 - reading_ease`, taken before the ease is rounded and then
    /// rounded to a whole number.
    pub complexity_score: f64,
}

/// Compute readability metrics for `content`.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn analyze_readability(content: &str, tokenizer: &dyn Tokenizer) -> ReadabilityReport {
    let stripped = MARKDOWN_CONTROL.replace_all(content, "");
    let clean = NEWLINES.replace_all(&stripped, " ");

    let sentence_count = tokenizer.sentences(&clean).len();
    let words = tokenizer.words(&clean);
    let word_count = words.len();
    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

    let (reading_ease, grade_level, avg_sentence_length) = if word_count > 0 && sentence_count > 0
    {
        let words_per_sentence = word_count as f64 / sentence_count as f64;
        let syllables_per_word = syllable_count as f64 / word_count as f64;
        let ease = 1.015f64.mul_add(-words_per_sentence, 206.835) - 84.6 * syllables_per_word;
        let grade = 0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59;
        (ease.clamp(0.0, 100.0), grade.max(0.0), words_per_sentence)
    } else {
        (0.0, 0.0, 0.0)
    };

    let passive_count = PASSIVE_VOICE.find_iter(&clean).count();
    let passive_voice_pct = if sentence_count > 0 {
        passive_count as f64 / sentence_count as f64 * 100.0
    } else {
        0.0
    };

    let complexity_score = (100.0 - reading_ease).round_ties_even();
    let reading_ease = round1(reading_ease);

    tracing::debug!(
        word_count,
        sentence_count,
        syllable_count,
        passive_count,
        reading_ease,
        "readability scored"
    );

    ReadabilityReport {
        grade_level: round1(grade_level),
        reading_ease,
        avg_sentence_length: round1(avg_sentence_length),
        passive_voice_pct: round1(passive_voice_pct),
        complexity_score,
    }
}

/// Estimate syllables in a single token.
///
/// Counts runs of `aeiouy`, subtracts one for a trailing `e`, and never
/// returns less than 1. Punctuation is left in place, so `"make."` does not
/// get the silent-e adjustment.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut groups: usize = 0;
    let mut prev_vowel = false;
    for ch in word.chars() {
        let vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }
    if word.ends_with('e') {
        groups = groups.saturating_sub(1);
    }
    groups.max(1)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::BasicTokenizer;

    fn analyze(content: &str) -> ReadabilityReport {
        analyze_readability(content, &BasicTokenizer)
    }

    #[test]
    fn syllable_heuristic() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("reading"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("make."), 2);
        assert_eq!(count_syllables("xyz"), 1);
        assert_eq!(count_syllables("---"), 1);
    }

    #[test]
    fn empty_content_scores_zero() {
        let report = analyze("");
        assert_eq!(report.reading_ease, 0.0);
        assert_eq!(report.grade_level, 0.0);
        assert_eq!(report.avg_sentence_length, 0.0);
        assert_eq!(report.passive_voice_pct, 0.0);
        assert_eq!(report.complexity_score, 100.0);
    }

    #[test]
    fn simple_prose_is_easy() {
        // 11 words, 2 sentences, one syllable each
        let report = analyze("The cat sat on the mat. The dog ran so fast.");
        assert_eq!(report.avg_sentence_length, 5.5);
        // 206.835 - 5.5825 - 84.6 = 116.65 -> clamped
        assert_eq!(report.reading_ease, 100.0);
        assert_eq!(report.complexity_score, 0.0);
        // 2.145 + 11.8 - 15.59 = -1.645 -> floored
        assert_eq!(report.grade_level, 0.0);
    }

    #[test]
    fn dense_prose_has_high_grade() {
        let text = "The implementation of the comprehensive organizational restructuring \
                    initiative necessitated the establishment of interdepartmental \
                    communication protocols that facilitated the dissemination of \
                    procedural documentation.";
        let report = analyze(text);
        assert!(report.grade_level > 12.0, "grade {}", report.grade_level);
        assert_eq!(report.reading_ease, 0.0);
        assert_eq!(report.complexity_score, 100.0);
    }

    #[test]
    fn markdown_control_characters_are_ignored() {
        let plain = analyze("Title here. Some **bold** text. A [link] too.");
        let marked = analyze("# Title here. Some bold text. A link too.");
        assert_eq!(plain, marked);
    }

    #[test]
    fn newlines_join_lines_before_splitting() {
        // Without collapsing, "one.\ntwo" would not split on ". "
        let report = analyze("Line one.\nLine two.\n\nLine three.");
        assert_eq!(report.avg_sentence_length, 2.0);
    }

    #[test]
    fn passive_voice_percentage() {
        let text = "The code was reviewed. The team celebrated. The bug was fixed. Tests were added";
        let report = analyze(text);
        // 3 matches over 4 sentences
        assert_eq!(report.passive_voice_pct, 75.0);
    }

    #[test]
    fn passive_voice_is_case_insensitive_and_needs_ed() {
        let report = analyze("It WAS DECIDED early. It was written later");
        assert_eq!(report.passive_voice_pct, 50.0);
    }

    #[test]
    fn complexity_is_inverse_of_ease() {
        let report = analyze("Careful planning helps teams ship working software quickly.");
        assert_eq!(report.reading_ease, 50.7);
        // 100 - 50.665, not 100 - 50.7
        assert_eq!(report.complexity_score, 49.0);
    }

    #[test]
    fn complexity_is_a_whole_number() {
        let report = analyze("Writing takes practice. Editors help writers improve.");
        assert_eq!(report.reading_ease, 9.9);
        assert_eq!(report.complexity_score, 90.0);
    }

    #[test]
    fn halves_round_to_even() {
        // 9 words over 4 sentences is 2.25
        let report = analyze("a b. c d. e f. g h i");
        assert_eq!(report.avg_sentence_length, 2.2);
    }

    #[test]
    fn trailing_period_space_counts_an_empty_sentence() {
        // The newline becomes a space, leaving an empty segment after ". "
        let report = analyze("The cat sat on the mat.\n");
        assert_eq!(report.avg_sentence_length, 3.0);
    }
}
