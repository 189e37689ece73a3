//! Headline scoring.
//!
//! Points are awarded for:
//!
//! | Signal | Points |
//! |---|---|
//! | 50–60 characters | 30 |
//! | 40–70 characters | 20 |
//! | any other length | 10 |
//! | power words | 15 each, max 40 |
//! | contains a number | 15 |
//! | phrased as a question | 10 |
//!
//! The total is capped at 100.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lexicon::LexicalResource;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

const MAX_SUGGESTIONS: usize = 3;

/// Result of headline analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HeadlineReport {
    /// Headline score (0–100).
    pub score: u32,
    /// Length in characters.
    pub character_count: usize,
    /// Distinct power words found.
    pub power_words: BTreeSet<String>,
    /// Emotional impact (0–100), 20 points per power word.
    pub emotional_impact: u32,
    /// Up to three rewritten headlines.
    pub suggestions: Vec<String>,
}

/// Score a headline against the given power-word lexicon.
#[tracing::instrument(skip_all, fields(headline_len = headline.len()))]
pub fn analyze_headline(headline: &str, lexicon: &LexicalResource) -> HeadlineReport {
    let character_count = headline.chars().count();

    let mut score = match character_count {
        50..=60 => 30,
        40..=70 => 20,
        _ => 10,
    };

    let hits = lexicon.find_in(headline);
    let hit_count = u32::try_from(hits.len()).unwrap_or(u32::MAX);
    score += hit_count.saturating_mul(15).min(40);

    let has_number = DIGITS.is_match(headline);
    if has_number {
        score += 15;
    }
    if headline.contains('?') {
        score += 10;
    }

    let emotional_impact = hit_count.saturating_mul(20).min(100);

    let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);
    if character_count < 50 {
        suggestions.push(format!("{headline} - Complete Guide"));
    }
    if hits.is_empty() {
        suggestions.push(format!("The Ultimate Guide to {headline}"));
    }
    if !has_number {
        suggestions.push(format!("10 Essential Tips: {headline}"));
    }
    suggestions.truncate(MAX_SUGGESTIONS);

    let power_words: BTreeSet<String> = hits.iter().map(|h| h.word.to_string()).collect();

    tracing::debug!(score, character_count, power_words = power_words.len(), "headline scored");

    HeadlineReport {
        score: score.min(100),
        character_count,
        power_words,
        emotional_impact,
        suggestions,
    }
}
