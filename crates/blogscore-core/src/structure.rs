//! Heading hierarchy, paragraph length, and list usage.
//!
//! Starts from a base score of 70:
//! - exactly one H1: +10; none: −10; several: −5
//! - 3–5 sentences per paragraph on average: +10
//! - at least one list item: +10

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tokenizer::Tokenizer;

static H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#\s+").expect("valid regex"));
static H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^##\s+").expect("valid regex"));
static H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^###\s+").expect("valid regex"));
static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[-*+]\s+").expect("valid regex"));
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\.\s+").expect("valid regex"));

const BASE_SCORE: i32 = 70;

/// Result of structure analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StructureReport {
    /// Structure score (0–100).
    pub score: u32,
    /// Number of `#` headings.
    pub h1_count: usize,
    /// Number of `##` headings.
    pub h2_count: usize,
    /// Number of `###` headings.
    pub h3_count: usize,
    /// Average sentences per paragraph (1 decimal).
    pub avg_paragraph_length: f64,
    /// Number of bulleted and numbered list items.
    pub list_count: usize,
    /// Human-readable structural problems.
    pub warnings: Vec<String>,
}

/// Analyze the markdown structure of `content`.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn analyze_structure(content: &str, tokenizer: &dyn Tokenizer) -> StructureReport {
    let mut score = BASE_SCORE;
    let mut warnings = Vec::new();

    let h1_count = H1.find_iter(content).count();
    let h2_count = H2.find_iter(content).count();
    let h3_count = H3.find_iter(content).count();

    match h1_count {
        1 => score += 10,
        0 => {
            warnings.push("Missing H1 heading".to_string());
            score -= 10;
        }
        n => {
            warnings.push(format!("Multiple H1 headings ({n})"));
            score -= 5;
        }
    }

    let paragraphs = tokenizer.paragraphs(content).len();
    let sentences = tokenizer.sentences(content).len();
    let avg_paragraph_length = if paragraphs > 0 {
        sentences as f64 / paragraphs as f64
    } else {
        0.0
    };

    if (3.0..=5.0).contains(&avg_paragraph_length) {
        score += 10;
    } else if avg_paragraph_length > 8.0 {
        warnings.push(format!(
            "Paragraphs too long (avg {avg_paragraph_length:.1} sentences)"
        ));
    }

    let list_count =
        BULLET_ITEM.find_iter(content).count() + ORDERED_ITEM.find_iter(content).count();
    if list_count > 0 {
        score += 10;
    }

    tracing::debug!(score, h1_count, paragraphs, sentences, list_count, "structure scored");

    StructureReport {
        score: score.clamp(0, 100).unsigned_abs(),
        h1_count,
        h2_count,
        h3_count,
        avg_paragraph_length: round1(avg_paragraph_length),
        list_count,
        warnings,
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::BasicTokenizer;

    fn analyze(content: &str) -> StructureReport {
        analyze_structure(content, &BasicTokenizer)
    }

    #[test]
    fn heading_levels_are_counted_separately() {
        let content = "# Title\n\nPara one. Para two. Para three.\n\n## Sub\n\nMore text here.";
        let report = analyze(content);
        assert_eq!(report.h1_count, 1);
        assert_eq!(report.h2_count, 1);
        assert_eq!(report.h3_count, 0);

        let report = analyze("# A\n## B\n### C\n#### D");
        assert_eq!(report.h1_count, 1);
        assert_eq!(report.h2_count, 1);
        assert_eq!(report.h3_count, 1);
    }

    #[test]
    fn missing_h1_warns_and_deducts() {
        let report = analyze("Just a paragraph.");
        assert_eq!(report.h1_count, 0);
        assert_eq!(report.warnings, vec!["Missing H1 heading"]);
        assert_eq!(report.score, 60);
    }

    #[test]
    fn multiple_h1_warns_with_count() {
        let content = "# A\n\n# B\n\n# C\n\n# D\n\n# E";
        let report = analyze(content);
        assert_eq!(report.h1_count, 5);
        assert!(report.warnings.contains(&"Multiple H1 headings (5)".to_string()));
        assert!(report.score <= 100);
    }

    #[test]
    fn hash_without_space_is_not_a_heading() {
        let report = analyze("#hashtag\n\n##nope");
        assert_eq!(report.h1_count, 0);
        assert_eq!(report.h2_count, 0);
    }

    #[test]
    fn paragraph_average_and_lists() {
        let content = "# Title\n\nOne. Two. Three. Four.\n\n- item a\n- item b\n\n1. first\n2. second";
        let report = analyze(content);
        assert_eq!(report.list_count, 4);
        // "1. first" splits too: 6 sentences over 4 paragraphs, no paragraph bonus
        assert_eq!(report.avg_paragraph_length, 1.5);
        assert_eq!(report.score, 90);

        let report = analyze("# Title\n\nOne. Two. Three. Four. Five. Six. Seven. Eight.\n\n* list item");
        // "# Title\n\nOne" .. "Eight.\n\n* list item" = 8 sentences / 3 paragraphs
        assert_eq!(report.avg_paragraph_length, 2.7);

        let report = analyze("# T. A. B. C. D. E. F. G. H. I. J");
        // 11 sentences in one paragraph
        assert_eq!(report.avg_paragraph_length, 11.0);
        assert_eq!(report.warnings, vec!["Paragraphs too long (avg 11.0 sentences)"]);
        assert_eq!(report.score, 80);
    }

    #[test]
    fn paragraph_average_halves_round_to_even() {
        // 5 sentences over 4 paragraphs is 1.25
        let report = analyze("A. B. C. D. E\n\nF\n\nG\n\nH");
        assert_eq!(report.avg_paragraph_length, 1.2);
    }

    #[test]
    fn three_to_five_sentences_earns_bonus() {
        let report = analyze("# Intro. First point. Second point. Last point.");
        assert_eq!(report.avg_paragraph_length, 4.0);
        assert_eq!(report.score, 90);
    }

    #[test]
    fn indented_list_markers_count() {
        let report = analyze("  - nested\n\t* tabbed\n   3. ordered");
        assert_eq!(report.list_count, 3);
    }

    #[test]
    fn empty_content_is_scored_not_rejected() {
        let report = analyze("");
        assert_eq!(report.avg_paragraph_length, 0.0);
        assert_eq!(report.list_count, 0);
        assert_eq!(report.score, 60);
    }
}
