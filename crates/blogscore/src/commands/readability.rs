//! Readability command: Flesch scores and passive voice for a file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use blogscore_core::PostAnalyzer;

use super::read_input_file;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

/// Print readability metrics for a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    analyzer: &PostAnalyzer,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = analyzer.analyze_readability(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!("  {} {:.1}", "Reading ease:".cyan(), report.reading_ease);
    println!("  {} {:.1}", "Grade level:".cyan(), report.grade_level);
    println!(
        "  {} {:.1} words",
        "Sentence length:".cyan(),
        report.avg_sentence_length
    );
    println!("  {} {:.1}%", "Passive voice:".cyan(), report.passive_voice_pct);
    println!("  {} {:.0}", "Complexity:".cyan(), report.complexity_score);

    Ok(())
}
