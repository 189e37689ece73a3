//! Meta command: social and structured-data tags.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use blogscore_core::PostAnalyzer;

use super::parse_keywords;

/// Arguments for the `meta` subcommand.
#[derive(Args, Debug)]
pub struct MetaArgs {
    /// Page title.
    #[arg(long)]
    pub title: String,

    /// Page description.
    #[arg(long)]
    pub description: String,

    /// Keywords, comma-separated.
    #[arg(short, long, default_value = "")]
    pub keywords: String,
}

/// Print Open Graph, Twitter Card, and Schema.org tags.
#[instrument(name = "cmd_meta", skip_all)]
pub fn cmd_meta(args: MetaArgs, global_json: bool, analyzer: &PostAnalyzer) -> anyhow::Result<()> {
    debug!(title = %args.title, "executing meta command");

    let keywords = parse_keywords(&args.keywords);
    let tags = analyzer.generate_meta_tags(&args.title, &args.description, &keywords);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    for (name, group) in tags.groups() {
        println!("{}", name.cyan());
        for (key, value) in group {
            println!("  {key}: {value}");
        }
    }

    Ok(())
}
