//! The analysis entry point.
//!
//! [`PostAnalyzer`] bundles the two resources every analyzer needs, a
//! tokenizer and a power-word lexicon, and exposes each analysis as a method.
//! Both resources are chosen at construction and never change afterwards, so
//! an analyzer can be cloned cheaply and shared across threads.

use std::sync::Arc;

use crate::config::Config;
use crate::headline::{self, HeadlineReport};
use crate::lexicon::LexicalResource;
use crate::meta_tags::{self, MetaTags};
use crate::readability::{self, ReadabilityReport};
use crate::report::AnalysisReport;
use crate::seo::{self, SeoReport};
use crate::stats::{self, ContentStats};
use crate::structure::{self, StructureReport};
use crate::tokenizer::{Tokenizer, TokenizerBackend};

/// Blog post analyzer.
///
/// ```
/// use blogscore_core::PostAnalyzer;
///
/// let analyzer = PostAnalyzer::new();
/// let report = analyzer.analyze_headline("Save Money Fast: 7 Secret Tips?");
/// assert_eq!(report.score, 65);
/// ```
#[derive(Debug, Clone)]
pub struct PostAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    lexicon: Arc<LexicalResource>,
}

impl Default for PostAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PostAnalyzer {
    /// Basic tokenizer and built-in power words.
    pub fn new() -> Self {
        Self {
            tokenizer: TokenizerBackend::Basic.build(),
            lexicon: Arc::new(LexicalResource::default()),
        }
    }

    /// Build from configuration: tokenizer backend and optional lexicon file.
    ///
    /// An unreadable lexicon file falls back to the built-in words.
    #[tracing::instrument(skip_all, fields(tokenizer = %config.tokenizer))]
    pub fn from_config(config: &Config) -> Self {
        let lexicon = LexicalResource::load_or_default(config.power_words.as_deref());
        Self::new()
            .with_backend(config.tokenizer)
            .with_lexicon(lexicon)
    }

    /// Replace the tokenizer with a custom implementation.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Replace the tokenizer with a built-in backend.
    pub fn with_backend(self, backend: TokenizerBackend) -> Self {
        self.with_tokenizer(backend.build())
    }

    /// Replace the power-word lexicon.
    pub fn with_lexicon(mut self, lexicon: LexicalResource) -> Self {
        self.lexicon = Arc::new(lexicon);
        self
    }

    /// The tokenizer in use.
    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    /// The lexicon in use.
    pub fn lexicon(&self) -> &LexicalResource {
        &self.lexicon
    }

    /// Score a headline.
    pub fn analyze_headline(&self, headline: &str) -> HeadlineReport {
        headline::analyze_headline(headline, &self.lexicon)
    }

    /// Score keyword usage and derive meta snippets.
    pub fn analyze_seo<S: AsRef<str>>(&self, content: &str, keywords: &[S]) -> SeoReport {
        seo::analyze_seo(content, keywords, self.tokenizer())
    }

    /// Score headings, paragraphs, and lists.
    pub fn analyze_structure(&self, content: &str) -> StructureReport {
        structure::analyze_structure(content, self.tokenizer())
    }

    /// Compute readability formulas.
    pub fn analyze_readability(&self, content: &str) -> ReadabilityReport {
        readability::analyze_readability(content, self.tokenizer())
    }

    /// Count words, sentences, and paragraphs.
    pub fn compute_stats(&self, content: &str) -> ContentStats {
        stats::compute_stats(content, self.tokenizer())
    }

    /// Run every analyzer and combine the results.
    #[tracing::instrument(
        skip_all,
        fields(content_len = content.len(), keywords = keywords.len(), tokenizer = self.tokenizer.name())
    )]
    pub fn analyze_full<S: AsRef<str>>(
        &self,
        content: &str,
        headline: &str,
        keywords: &[S],
    ) -> AnalysisReport {
        let report = AnalysisReport::new(
            self.analyze_headline(headline),
            self.analyze_seo(content, keywords),
            self.analyze_structure(content),
            self.analyze_readability(content),
            self.compute_stats(content),
        );
        tracing::debug!(
            overall_score = report.overall_score,
            recommendations = report.recommendations.len(),
            "analysis complete"
        );
        report
    }

    /// Open Graph, Twitter Card, and Schema.org tags.
    pub fn generate_meta_tags<S: AsRef<str>>(
        &self,
        title: &str,
        description: &str,
        keywords: &[S],
    ) -> MetaTags {
        meta_tags::generate_meta_tags(title, description, keywords)
    }
}
