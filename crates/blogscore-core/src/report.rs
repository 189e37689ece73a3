//! Aggregate report, overall score weighting, and recommendations.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::headline::HeadlineReport;
use crate::readability::ReadabilityReport;
use crate::seo::SeoReport;
use crate::stats::ContentStats;
use crate::structure::StructureReport;

const HEADLINE_WEIGHT: f64 = 0.2;
const SEO_WEIGHT: f64 = 0.3;
const STRUCTURE_WEIGHT: f64 = 0.2;
const SIMPLICITY_WEIGHT: f64 = 0.3;

/// Headline score below which a rewrite is recommended.
pub const HEADLINE_THRESHOLD: u32 = 70;
/// Grade level above which content is considered too complex.
pub const MAX_GRADE_LEVEL: f64 = 12.0;
/// Word count below which content is considered too short.
pub const MIN_WORD_COUNT: usize = 300;

/// How urgently a recommendation should be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Fix before publishing.
    High,
    /// Worth fixing.
    Medium,
    /// Nice to have.
    Low,
}

impl Priority {
    /// Lowercase label, as serialized.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single actionable suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    /// Urgency.
    pub priority: Priority,
    /// What is wrong.
    pub issue: String,
    /// What to do about it.
    pub fix: String,
}

impl Recommendation {
    fn new(priority: Priority, issue: impl Into<String>, fix: impl Into<String>) -> Self {
        Self {
            priority,
            issue: issue.into(),
            fix: fix.into(),
        }
    }
}

/// Complete analysis of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Weighted overall score (0–100).
    pub overall_score: u32,
    /// Headline analysis.
    pub headline: HeadlineReport,
    /// Keyword and meta analysis.
    pub seo: SeoReport,
    /// Heading, paragraph, and list analysis.
    pub structure: StructureReport,
    /// Readability formulas.
    pub readability: ReadabilityReport,
    /// Raw counts.
    pub stats: ContentStats,
    /// Recommendations, in rule order.
    pub recommendations: Vec<Recommendation>,
}

impl AnalysisReport {
    /// Assemble a report, computing the overall score and recommendations.
    pub fn new(
        headline: HeadlineReport,
        seo: SeoReport,
        structure: StructureReport,
        readability: ReadabilityReport,
        stats: ContentStats,
    ) -> Self {
        let overall_score = overall_score(&headline, &seo, &structure, &readability);
        let recommendations = recommendations(&headline, &seo, &structure, &readability, &stats);
        Self {
            overall_score,
            headline,
            seo,
            structure,
            readability,
            stats,
            recommendations,
        }
    }
}

/// Weighted sum: headline 20%, SEO 30%, structure 20%, simplicity 30%.
///
/// Simplicity is `100 - complexity_score`.
pub fn overall_score(
    headline: &HeadlineReport,
    seo: &SeoReport,
    structure: &StructureReport,
    readability: &ReadabilityReport,
) -> u32 {
    let simplicity = 100.0 - readability.complexity_score;
    let weighted = f64::from(headline.score) * HEADLINE_WEIGHT
        + f64::from(seo.score) * SEO_WEIGHT
        + f64::from(structure.score) * STRUCTURE_WEIGHT
        + simplicity * SIMPLICITY_WEIGHT;
    // Inputs are all within 0..=100, so the cast cannot truncate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = weighted.round_ties_even().clamp(0.0, 100.0) as u32;
    score
}

/// Recommendations in fixed rule order; each rule fires at most once.
pub fn recommendations(
    headline: &HeadlineReport,
    seo: &SeoReport,
    structure: &StructureReport,
    readability: &ReadabilityReport,
    stats: &ContentStats,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if headline.score < HEADLINE_THRESHOLD {
        let fix = headline.suggestions.first().map_or_else(
            || "Add power words and numbers".to_string(),
            |s| format!("Try: {s}"),
        );
        recs.push(Recommendation::new(
            Priority::High,
            "Headline needs improvement",
            fix,
        ));
    }

    if !seo.keyword_prominence {
        recs.push(Recommendation::new(
            Priority::High,
            "Keywords not in first 100 words",
            "Include primary keyword in introduction",
        ));
    }

    if structure.h1_count != 1 {
        recs.push(Recommendation::new(
            Priority::Medium,
            format!("H1 count is {}", structure.h1_count),
            "Use exactly one H1 heading",
        ));
    }

    if readability.grade_level > MAX_GRADE_LEVEL {
        recs.push(Recommendation::new(
            Priority::Medium,
            "Content is too complex",
            "Simplify sentences and use shorter words",
        ));
    }

    if stats.word_count < MIN_WORD_COUNT {
        recs.push(Recommendation::new(
            Priority::Low,
            "Content is too short",
            "Aim for at least 1000 words for SEO",
        ));
    }

    recs
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;

    fn headline(score: u32, suggestions: &[&str]) -> HeadlineReport {
        HeadlineReport {
            score,
            character_count: 0,
            power_words: BTreeSet::new(),
            emotional_impact: 0,
            suggestions: suggestions.iter().map(ToString::to_string).collect(),
        }
    }

    fn seo(score: u32, keyword_prominence: bool) -> SeoReport {
        SeoReport {
            score,
            keyword_density: BTreeMap::new(),
            keyword_prominence,
            meta_description: String::new(),
            title_tag: String::new(),
            url_slug: String::new(),
        }
    }

    fn structure(score: u32, h1_count: usize) -> StructureReport {
        StructureReport {
            score,
            h1_count,
            h2_count: 0,
            h3_count: 0,
            avg_paragraph_length: 0.0,
            list_count: 0,
            warnings: Vec::new(),
        }
    }

    fn readability(grade_level: f64, complexity_score: f64) -> ReadabilityReport {
        ReadabilityReport {
            grade_level,
            reading_ease: 100.0 - complexity_score,
            avg_sentence_length: 0.0,
            passive_voice_pct: 0.0,
            complexity_score,
        }
    }

    fn stats(word_count: usize) -> ContentStats {
        ContentStats {
            word_count,
            reading_time_minutes: 1,
            character_count: 0,
            sentence_count: 0,
            paragraph_count: 0,
        }
    }

    #[test]
    fn overall_score_weights() {
        // 80*.2 + 60*.3 + 90*.2 + (100-40)*.3 = 16 + 18 + 18 + 18
        let score = overall_score(
            &headline(80, &[]),
            &seo(60, true),
            &structure(90, 1),
            &readability(8.0, 40.0),
        );
        assert_eq!(score, 70);
    }

    #[test]
    fn overall_score_rounds_to_nearest() {
        // 65*.2 + 30*.3 + 60*.2 + 50.5*.3 = 13 + 9 + 12 + 15.15 = 49.15
        let score = overall_score(
            &headline(65, &[]),
            &seo(30, false),
            &structure(60, 0),
            &readability(8.0, 49.5),
        );
        assert_eq!(score, 49);
    }

    #[test]
    fn overall_score_halves_round_to_even() {
        // 0 + 35*.3 + 60*.2 + 40*.3 = 10.5 + 12 + 12 = 34.5
        let score = overall_score(
            &headline(0, &[]),
            &seo(35, false),
            &structure(60, 0),
            &readability(8.0, 60.0),
        );
        assert_eq!(score, 34);
    }

    #[test]
    fn overall_score_bounds() {
        let top = overall_score(
            &headline(100, &[]),
            &seo(100, true),
            &structure(100, 1),
            &readability(0.0, 0.0),
        );
        assert_eq!(top, 100);
        let bottom = overall_score(
            &headline(0, &[]),
            &seo(0, false),
            &structure(0, 0),
            &readability(20.0, 100.0),
        );
        assert_eq!(bottom, 0);
    }

    #[test]
    fn all_rules_fire_in_order() {
        let recs = recommendations(
            &headline(40, &["Better - Complete Guide", "other"]),
            &seo(10, false),
            &structure(60, 3),
            &readability(14.2, 90.0),
            &stats(120),
        );
        let issues: Vec<_> = recs.iter().map(|r| r.issue.as_str()).collect();
        assert_eq!(
            issues,
            vec![
                "Headline needs improvement",
                "Keywords not in first 100 words",
                "H1 count is 3",
                "Content is too complex",
                "Content is too short",
            ]
        );
        let priorities: Vec<_> = recs.iter().map(|r| r.priority).collect();
        assert_eq!(
            priorities,
            vec![
                Priority::High,
                Priority::High,
                Priority::Medium,
                Priority::Medium,
                Priority::Low,
            ]
        );
        assert_eq!(recs[0].fix, "Try: Better - Complete Guide");
    }

    #[test]
    fn no_rules_fire_for_good_post() {
        let recs = recommendations(
            &headline(85, &[]),
            &seo(70, true),
            &structure(90, 1),
            &readability(12.0, 40.0),
            &stats(300),
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn weak_headline_without_suggestions_gets_generic_fix() {
        let recs = recommendations(
            &headline(50, &[]),
            &seo(70, true),
            &structure(90, 1),
            &readability(8.0, 40.0),
            &stats(1000),
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].fix, "Add power words and numbers");
    }

    #[test]
    fn missing_h1_reports_zero() {
        let recs = recommendations(
            &headline(90, &[]),
            &seo(70, true),
            &structure(60, 0),
            &readability(8.0, 40.0),
            &stats(1000),
        );
        assert_eq!(recs[0].issue, "H1 count is 0");
        assert_eq!(recs[0].priority, Priority::Medium);
    }

    #[test]
    fn priority_serializes_lowercase() {
        let json = serde_json::to_string(&Priority::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        assert_eq!(Priority::High.to_string(), "high");
    }

    #[test]
    fn report_new_fills_derived_fields() {
        let report = AnalysisReport::new(
            headline(80, &[]),
            seo(60, true),
            structure(90, 1),
            readability(8.0, 40.0),
            stats(1000),
        );
        assert_eq!(report.overall_score, 70);
        assert!(report.recommendations.is_empty());
    }
}
