//! Analyze command: full post analysis.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use blogscore_core::markdown::extract_title;
use blogscore_core::{AnalysisReport, Config, PostAnalyzer};

use super::{parse_keywords, read_input_file};
use crate::render;

/// Headline used when none is given and the post has no H1.
const UNTITLED: &str = "Untitled";

/// Report format for `analyze`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal summary.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Standalone HTML page.
    Html,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Post to analyze (markdown or plain text).
    pub file: Utf8PathBuf,

    /// Headline to score. Defaults to the post's first H1.
    #[arg(long)]
    pub headline: Option<String>,

    /// Target keywords, comma-separated. Defaults to `keywords` from config.
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Report format (`--json` implies json).
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Write the report to this file. HTML reports default to
    /// `analysis_report.html`.
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,

    /// Fail when the overall score is below this (0–100).
    #[arg(long)]
    pub min_score: Option<u32>,
}

/// Analyze a post and print or save the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    analyzer: &PostAnalyzer,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, format = ?args.format, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let headline = args
        .headline
        .or_else(|| extract_title(&content))
        .unwrap_or_else(|| UNTITLED.to_string());
    let keywords = args
        .keywords
        .as_deref()
        .map_or_else(|| config.keywords.clone(), parse_keywords);
    debug!(%headline, ?keywords, "analysis inputs resolved");

    let report = analyzer.analyze_full(&content, &headline, &keywords);

    let format = if global_json {
        OutputFormat::Json
    } else {
        args.format
    };
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            emit(&json, args.output.as_deref())?;
        }
        OutputFormat::Html => {
            let path = args
                .output
                .unwrap_or_else(|| Utf8PathBuf::from(render::DEFAULT_HTML_REPORT));
            write_report(&path, &render::html_report(&report, &headline))?;
            println!("{} {}", "Report saved to".green(), path);
        }
        OutputFormat::Text => {
            emit(&render::text_report(&report, args.file.as_str()), args.output.as_deref())?;
        }
    }

    check_min_score(&args.file, &report, args.min_score.or(config.min_score))
}

fn emit(text: &str, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => write_report(path, text),
        None => {
            println!("{}", text.trim_end());
            Ok(())
        }
    }
}

fn write_report(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    std::fs::write(path.as_std_path(), text).with_context(|| format!("failed to write {path}"))?;
    debug!(%path, bytes = text.len(), "report written");
    Ok(())
}

fn check_min_score(file: &Utf8Path, report: &AnalysisReport, min: Option<u32>) -> anyhow::Result<()> {
    if let Some(min) = min
        && report.overall_score < min
    {
        bail!(
            "{file} scores {} (min: {min}). Address the recommendations and re-run.",
            report.overall_score,
        );
    }
    Ok(())
}
