//! Keyword density, prominence, and generated SEO snippets.

use std::collections::BTreeMap;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tokenizer::Tokenizer;

/// Number of leading words checked for keyword prominence.
const PROMINENCE_WINDOW: usize = 100;
const META_DESCRIPTION_MAX: usize = 160;
const META_DESCRIPTION_CUT: usize = 157;
const TITLE_TAG_MAX: usize = 60;
const SLUG_WORDS: usize = 5;

/// Result of SEO analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SeoReport {
    /// SEO score (0–100).
    pub score: u32,
    /// Keyword → density as a percentage of total words (2 decimals).
    pub keyword_density: BTreeMap<String, f64>,
    /// Whether any keyword appears in the first 100 words.
    pub keyword_prominence: bool,
    /// Suggested meta description (at most 160 characters).
    pub meta_description: String,
    /// Suggested title tag (at most 60 characters).
    pub title_tag: String,
    /// Suggested URL slug.
    pub url_slug: String,
}

/// Analyze keyword usage in `content` and derive meta snippets.
#[tracing::instrument(skip_all, fields(content_len = content.len(), keywords = keywords.len()))]
pub fn analyze_seo<S: AsRef<str>>(
    content: &str,
    keywords: &[S],
    tokenizer: &dyn Tokenizer,
) -> SeoReport {
    let lower = content.to_lowercase();
    let word_count = tokenizer.words(content).len();
    let matchers: Vec<Option<Regex>> = keywords
        .iter()
        .map(|k| keyword_matcher(k.as_ref()))
        .collect();

    let mut score: u32 = 0;
    let mut keyword_density = BTreeMap::new();
    for (keyword, matcher) in keywords.iter().zip(&matchers) {
        let occurrences = matcher.as_ref().map_or(0, |re| re.find_iter(&lower).count());
        let density = if word_count > 0 {
            occurrences as f64 / word_count as f64 * 100.0
        } else {
            0.0
        };
        score += density_points(density);
        keyword_density.insert(keyword.as_ref().to_string(), round2(density));
    }

    let opening = tokenizer
        .words(&lower)
        .into_iter()
        .take(PROMINENCE_WINDOW)
        .collect::<Vec<_>>()
        .join(" ");
    let keyword_prominence = matchers.iter().flatten().any(|re| re.is_match(&opening));
    if keyword_prominence {
        score += 20;
    }

    let primary = keywords.first().map_or("", |k| k.as_ref());
    let meta_description = meta_description(tokenizer.sentences(content).first().copied());
    let title_tag: String = format!("{primary} - Complete Guide")
        .chars()
        .take(TITLE_TAG_MAX)
        .collect();
    let url_slug = tokenizer
        .words(&primary.to_lowercase())
        .into_iter()
        .take(SLUG_WORDS)
        .collect::<Vec<_>>()
        .join("-");

    tracing::debug!(score, word_count, keyword_prominence, "seo scored");

    SeoReport {
        score: score.min(100),
        keyword_density,
        keyword_prominence,
        meta_description,
        title_tag,
        url_slug,
    }
}

/// Whole-word matcher for a lowercased keyword. Blank keywords never match.
fn keyword_matcher(keyword: &str) -> Option<Regex> {
    let keyword = keyword.to_lowercase();
    if keyword.trim().is_empty() {
        return None;
    }
    match Regex::new(&format!(r"\b{}\b", regex::escape(&keyword))) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::warn!(error = %err, %keyword, "keyword cannot be matched");
            None
        }
    }
}

/// 1–2% is ideal, 0.5–3% acceptable.
fn density_points(density: f64) -> u32 {
    if (1.0..=2.0).contains(&density) {
        30
    } else if (0.5..=3.0).contains(&density) {
        20
    } else {
        10
    }
}

fn meta_description(first_sentence: Option<&str>) -> String {
    let Some(sentence) = first_sentence else {
        return String::new();
    };
    if sentence.chars().count() > META_DESCRIPTION_MAX {
        let mut cut: String = sentence.chars().take(META_DESCRIPTION_CUT).collect();
        cut.push_str("...");
        cut
    } else {
        sentence.to_string()
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::BasicTokenizer;

    fn analyze(content: &str, keywords: &[&str]) -> SeoReport {
        analyze_seo(content, keywords, &BasicTokenizer)
    }

    #[test]
    fn empty_content_has_zero_density() {
        let report = analyze("", &["rust", "async"]);
        assert_eq!(report.keyword_density["rust"], 0.0);
        assert_eq!(report.keyword_density["async"], 0.0);
        assert!(!report.keyword_prominence);
        assert_eq!(report.meta_description, "");
        // 10 per out-of-range keyword
        assert_eq!(report.score, 20);
    }

    #[test]
    fn no_keywords() {
        let report = analyze("Some content here. More content.", &[]);
        assert_eq!(report.score, 0);
        assert!(report.keyword_density.is_empty());
        assert!(!report.keyword_prominence);
        assert_eq!(report.title_tag, " - Complete Guide");
        assert_eq!(report.url_slug, "");
    }

    #[test]
    fn density_counts_whole_words_case_insensitively() {
        // 1 "rust" in 50 words = 2.00%; "rusty" and "trust" do not count
        let mut content = String::from("Rust rusty trust");
        for _ in 0..47 {
            content.push_str(" filler");
        }
        let report = analyze(&content, &["rust"]);
        assert_eq!(report.keyword_density["rust"], 2.0);
        assert!(report.keyword_prominence);
        assert_eq!(report.score, 50);
    }

    #[test]
    fn density_rounds_to_two_decimals() {
        let report = analyze("seo one two", &["seo"]);
        assert_eq!(report.keyword_density["seo"], 33.33);
    }

    #[test]
    fn density_halves_round_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn density_is_computed_against_heading_words_too() {
        let content = "# Title\n\nPara one. Para two. Para three.\n\n## Sub\n\nMore text here.";
        let report = analyze(content, &["title"]);
        // 13 whitespace tokens, one "title"
        assert_eq!(report.keyword_density["title"], 7.69);
    }

    #[test]
    fn prominence_only_looks_at_first_hundred_words() {
        let mut content = "word ".repeat(100);
        content.push_str("keyword");
        let report = analyze(&content, &["keyword"]);
        assert!(!report.keyword_prominence);
    }

    #[test]
    fn acceptable_density_scores_twenty() {
        // 1 in 40 = 2.5%
        let mut content = String::from("guide");
        content.push_str(&" filler".repeat(39));
        let report = analyze(&content, &["guide"]);
        assert_eq!(report.keyword_density["guide"], 2.5);
        assert_eq!(report.score, 40);
    }

    #[test]
    fn score_caps_at_one_hundred() {
        let mut content = String::from("alpha beta gamma delta");
        content.push_str(&" filler".repeat(96));
        let report = analyze(&content, &["alpha", "beta", "gamma", "delta"]);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn meta_description_is_first_sentence() {
        let report = analyze("First sentence here. Second one.", &["x"]);
        assert_eq!(report.meta_description, "First sentence here");
    }

    #[test]
    fn long_meta_description_is_truncated() {
        let content = "a".repeat(200);
        let report = analyze(&content, &["x"]);
        assert_eq!(report.meta_description.chars().count(), 160);
        assert!(report.meta_description.ends_with("..."));
    }

    #[test]
    fn title_and_slug_use_primary_keyword() {
        let report = analyze("text", &["Rust Async Error Handling Patterns In Practice"]);
        assert_eq!(report.url_slug, "rust-async-error-handling-patterns");
        assert_eq!(report.title_tag.chars().count(), 60);
        assert!(report.title_tag.starts_with("Rust Async Error Handling Patterns In Practice - Co"));
    }

    #[test]
    fn blank_keyword_never_matches() {
        let report = analyze("some words", &["  "]);
        assert_eq!(report.keyword_density["  "], 0.0);
        assert!(!report.keyword_prominence);
    }
}
