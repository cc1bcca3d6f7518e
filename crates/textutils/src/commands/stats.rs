//! Stats command — word, character, sentence and paragraph counts.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout};
use tracing::{debug, instrument};

use textutils_core::TextMetrics;

use super::read_input;

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    /// File to analyze (reads stdin when omitted or `-`).
    pub file: Option<Utf8PathBuf>,

    /// Reading speed in words per minute.
    #[arg(long, value_name = "WORDS")]
    pub wpm: Option<u32>,
}

/// Print statistics for a file or stdin.
#[instrument(name = "cmd_stats", skip_all, fields(file = ?args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    config_wpm: u32,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, wpm = ?args.wpm, "executing stats command");

    let content = read_input(args.file.as_deref(), max_input_bytes)?;
    let wpm = args.wpm.unwrap_or(config_wpm);
    let metrics = TextMetrics::with_reading_speed(&content, wpm);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    if let Some(ref file) = args.file {
        println!("{}", file.if_supports_color(Stdout, |t| t.bold()));
    }
    for (label, value) in summary_lines(&metrics) {
        println!("{}: {value}", label.if_supports_color(Stdout, |t| t.dimmed()));
    }

    Ok(())
}

/// Labelled values in display order.
fn summary_lines(metrics: &TextMetrics) -> [(&'static str, String); 6] {
    [
        ("Words", metrics.word_count.to_string()),
        ("Characters", metrics.char_count.to_string()),
        ("Characters (no spaces)", metrics.char_count_no_spaces.to_string()),
        ("Sentences", metrics.sentence_count.to_string()),
        ("Paragraphs", metrics.paragraph_count.to_string()),
        ("Reading time", metrics.reading_time_label()),
    ]
}
