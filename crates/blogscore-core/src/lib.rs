//! Core scoring engine for blogscore.
//!
//! Scores a blog post on four axes and combines them into one weighted
//! number with a list of recommendations:
//!
//! - [`headline`] - length, power words, numbers, question form
//! - [`seo`] - keyword density and prominence, meta description, title, slug
//! - [`structure`] - heading hierarchy, paragraph length, lists
//! - [`readability`] - Flesch Reading Ease, Flesch-Kincaid grade, passive voice
//! - [`stats`] - word, sentence, and paragraph counts
//! - [`report`] - overall score and recommendations
//! - [`meta_tags`] - Open Graph, Twitter Card, and Schema.org tags
//!
//! Every analysis is a total function: empty content, empty headlines, and
//! empty keyword lists produce zero-valued metrics rather than errors.
//!
//! # Quick Start
//!
//! ```
//! use blogscore_core::PostAnalyzer;
//!
//! let analyzer = PostAnalyzer::new();
//! let content = "# Ship It\n\nWrite short posts. Publish often. Repeat.";
//! let report = analyzer.analyze_full(content, "Ship It", &["posts"]);
//! assert!(report.overall_score <= 100);
//! assert_eq!(report.structure.h1_count, 1);
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod config;
pub mod error;
pub mod headline;
pub mod lexicon;
pub mod markdown;
pub mod meta_tags;
pub mod readability;
pub mod report;
pub mod seo;
pub mod stats;
pub mod structure;
pub mod tokenizer;

pub use analyzer::PostAnalyzer;
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult, LexiconError, LexiconResult};
pub use headline::HeadlineReport;
pub use lexicon::LexicalResource;
pub use meta_tags::MetaTags;
pub use readability::ReadabilityReport;
pub use report::{AnalysisReport, Priority, Recommendation};
pub use seo::SeoReport;
pub use stats::ContentStats;
pub use structure::StructureReport;
pub use tokenizer::{BasicTokenizer, RichTokenizer, Tokenizer, TokenizerBackend};
