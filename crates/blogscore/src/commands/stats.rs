//! Stats command: raw counts for a file.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use blogscore_core::PostAnalyzer;

use super::read_input_file;

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to count.
    pub file: Utf8PathBuf,
}

/// Print word, sentence, and paragraph counts.
#[instrument(name = "cmd_stats", skip_all, fields(file = %args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    analyzer: &PostAnalyzer,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing stats command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let stats = analyzer.compute_stats(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!(
            "{} words, {} sentences, {} paragraphs, {} characters, ~{} min read",
            stats.word_count,
            stats.sentence_count,
            stats.paragraph_count,
            stats.character_count,
            stats.reading_time_minutes,
        );
    }

    Ok(())
}
