//! MCP (Model Context Protocol) server.
//!
//! Exposes the same analyzers as the CLI over stdio so editors and
//! assistants can score drafts in place. Every tool delegates to
//! [`PostAnalyzer`] and returns pretty-printed JSON.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use blogscore_core::PostAnalyzer;
use blogscore_core::markdown::extract_title;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_post` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzePostParams {
    /// Post body, markdown or plain text.
    pub content: String,
    /// Headline to score. Defaults to the first H1 of the content.
    pub headline: Option<String>,
    /// Target SEO keywords. Defaults to the configured keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Parameters for the `analyze_headline` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeHeadlineParams {
    /// Headline text.
    pub headline: String,
}

/// Parameters for tools that take only a body of text.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ContentParams {
    /// Post body, markdown or plain text.
    pub content: String,
}

/// Parameters for the `generate_meta_tags` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct MetaTagsParams {
    /// Page title.
    pub title: String,
    /// Page description.
    pub description: String,
    /// Keywords for the `keywords` Schema.org property.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// MCP server wrapping a configured [`PostAnalyzer`].
#[derive(Clone)]
pub struct BlogScoreServer {
    analyzer: PostAnalyzer,
    keywords: Vec<String>,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for BlogScoreServer {
    fn default() -> Self {
        Self::new(PostAnalyzer::default(), Vec::new(), None)
    }
}

#[tool_router]
impl BlogScoreServer {
    /// Create a server that rejects content larger than `max_input_bytes`.
    ///
    /// `keywords` are used by `analyze_post` when a call names none.
    pub fn new(
        analyzer: PostAnalyzer,
        keywords: Vec<String>,
        max_input_bytes: Option<usize>,
    ) -> Self {
        Self {
            analyzer,
            keywords,
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, content: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if content.len() > max => Err(McpError::internal_error(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    content.len()
                ),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "tokenizer": self.analyzer.tokenizer().name(),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Full post analysis.
    #[tool(
        description = "Analyze a blog post: headline, SEO, structure, readability, and stats. Returns an overall score (0-100) with prioritized recommendations."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", content_len = params.content.len()))]
    fn analyze_post(
        &self,
        Parameters(params): Parameters<AnalyzePostParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_post",
            keywords = params.keywords.len(),
            "executing MCP tool"
        );
        self.check_size(&params.content)?;

        let headline = params
            .headline
            .or_else(|| extract_title(&params.content))
            .unwrap_or_else(|| "Untitled".to_string());
        let keywords: &[String] = if params.keywords.is_empty() {
            &self.keywords
        } else {
            &params.keywords
        };
        let report = self.analyzer.analyze_full(&params.content, &headline, keywords);

        tracing::info!(
            tool = "analyze_post",
            overall_score = report.overall_score,
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Headline scoring.
    #[tool(
        description = "Score a headline (0-100): length, power words, numbers, and questions. Returns suggestions for improvement."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_headline(
        &self,
        Parameters(params): Parameters<AnalyzeHeadlineParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_headline", headline = %params.headline, "executing MCP tool");
        self.check_size(&params.headline)?;

        let report = self.analyzer.analyze_headline(&params.headline);

        tracing::info!(
            tool = "analyze_headline",
            score = report.score,
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Readability metrics.
    #[tool(
        description = "Check readability: Flesch reading ease, Flesch-Kincaid grade level, average sentence length, and passive voice percentage."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_readability(
        &self,
        Parameters(params): Parameters<ContentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_readability", "executing MCP tool");
        self.check_size(&params.content)?;

        let report = self.analyzer.analyze_readability(&params.content);

        tracing::info!(
            tool = "check_readability",
            grade = report.grade_level,
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Word, sentence, and paragraph counts.
    #[tool(
        description = "Count words, characters, sentences, and paragraphs, and estimate reading time."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn content_stats(
        &self,
        Parameters(params): Parameters<ContentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "content_stats", "executing MCP tool");
        self.check_size(&params.content)?;

        let stats = self.analyzer.compute_stats(&params.content);

        tracing::info!(
            tool = "content_stats",
            words = stats.word_count,
            "MCP tool completed"
        );
        json_result(&stats)
    }

    /// Social and structured-data tags.
    #[tool(description = "Generate Open Graph, Twitter Card, and Schema.org meta tags.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn generate_meta_tags(
        &self,
        Parameters(params): Parameters<MetaTagsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "generate_meta_tags", title = %params.title, "executing MCP tool");

        let tags =
            self.analyzer
                .generate_meta_tags(&params.title, &params.description, &params.keywords);

        tracing::info!(tool = "generate_meta_tags", "MCP tool completed");
        json_result(&tags)
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_handler]
impl ServerHandler for BlogScoreServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_post for a full report, or the narrower tools for headlines, readability, stats, and meta tags.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
