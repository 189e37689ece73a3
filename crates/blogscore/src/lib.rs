//! Library interface for the `blogscore` CLI.
//!
//! Exposes the argument parser and command implementations so that `xtask`
//! can generate man pages and completions, and so tests can drive commands
//! directly. The binary entry point is in `main.rs`.
//!
//! - [`Cli`] - the root argument parser (clap derive)
//! - [`Commands`] - available subcommands
//! - [`commands`] - command implementations
//! - [`render`] - text and HTML report rendering

pub mod commands;
pub mod render;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Set the global owo-colors override. Call once at startup.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, blogscore_core=trace)
    BLOGSCORE_LOG_PATH     Explicit log file path
    BLOGSCORE_LOG_DIR      Log directory
    BLOGSCORE_TOKENIZER    Sentence tokenizer (basic, rich)
    BLOGSCORE_MIN_SCORE    Minimum overall score for `analyze`
";

/// Command-line interface definition for blogscore.
#[derive(Parser)]
#[command(name = "blogscore")]
#[command(about = "Score blog posts for headline, SEO, structure, and readability", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the full analysis on a post
    Analyze(commands::analyze::AnalyzeArgs),

    /// Score a headline on its own
    Headline(commands::headline::HeadlineArgs),

    /// Readability metrics (Flesch Reading Ease, grade level, passive voice)
    Readability(commands::readability::ReadabilityArgs),

    /// Word, sentence, and paragraph counts
    Stats(commands::stats::StatsArgs),

    /// Generate Open Graph, Twitter Card, and Schema.org tags
    Meta(commands::meta::MetaArgs),

    /// Show package information and effective configuration
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation.
pub fn command() -> clap::Command {
    Cli::command()
}
