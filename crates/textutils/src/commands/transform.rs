//! Transform command — apply buffer transforms and print the result.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use textutils_core::{TextMetrics, Transform};

use super::read_input;

/// Arguments for the `transform` subcommand.
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Transforms to apply, left to right.
    #[arg(required = true, value_enum)]
    pub transforms: Vec<Transform>,

    /// File to read (reads stdin when omitted or `-`).
    #[arg(short, long)]
    pub file: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct TransformOutput<'a> {
    transforms: &'a [Transform],
    text: String,
    metrics: TextMetrics,
}

/// Apply each transform in turn, feeding the result into the next.
pub fn apply_all(text: &str, transforms: &[Transform]) -> String {
    transforms
        .iter()
        .fold(text.to_string(), |buffer, t| t.apply(&buffer))
}

/// Transform a file or stdin and print the new text.
#[instrument(name = "cmd_transform", skip_all, fields(file = ?args.file))]
pub fn cmd_transform(
    args: TransformArgs,
    global_json: bool,
    config_wpm: u32,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(transforms = ?args.transforms, "executing transform command");

    let content = read_input(args.file.as_deref(), max_input_bytes)?;
    let text = apply_all(&content, &args.transforms);

    if global_json {
        let output = TransformOutput {
            transforms: &args.transforms,
            metrics: TextMetrics::with_reading_speed(&text, config_wpm),
            text,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if text.is_empty() || text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms_apply_left_to_right() {
        let out = apply_all("a  b   c", &[Transform::CollapseSpaces, Transform::Upper]);
        assert_eq!(out, "A B C");
    }

    #[test]
    fn clear_then_anything_stays_empty() {
        assert_eq!(apply_all("text", &[Transform::Clear, Transform::Upper]), "");
    }

    #[test]
    fn no_transforms_is_identity() {
        assert_eq!(apply_all("same", &[]), "same");
    }
}
