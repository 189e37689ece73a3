//! Headline command: score a headline without a post.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use blogscore_core::PostAnalyzer;

use crate::render::colored_score;

/// Arguments for the `headline` subcommand.
#[derive(Args, Debug)]
pub struct HeadlineArgs {
    /// Headline text.
    pub text: String,
}

/// Score a headline and list rewrite suggestions.
#[instrument(name = "cmd_headline", skip_all, fields(len = args.text.len()))]
pub fn cmd_headline(
    args: HeadlineArgs,
    global_json: bool,
    analyzer: &PostAnalyzer,
) -> anyhow::Result<()> {
    debug!(headline = %args.text, "executing headline command");

    let report = analyzer.analyze_headline(&args.text);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}/100 ({} chars, emotional impact {})",
        "Headline:".cyan(),
        colored_score(report.score),
        report.character_count,
        report.emotional_impact,
    );
    if !report.power_words.is_empty() {
        let words: Vec<&str> = report.power_words.iter().map(String::as_str).collect();
        println!("  power words: {}", words.join(", "));
    }
    for suggestion in &report.suggestions {
        println!("  try: {suggestion}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_json_output_succeed() {
        let analyzer = PostAnalyzer::new();
        for json in [false, true] {
            let args = HeadlineArgs {
                text: "Save Money Fast: 7 Secret Tips?".to_string(),
            };
            assert!(cmd_headline(args, json, &analyzer).is_ok());
        }
    }
}
