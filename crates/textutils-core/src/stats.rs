//! Text statistics.
//!
//! Derives word, character, sentence and paragraph counts plus an estimated
//! reading time from a text buffer. Every function here is total: any
//! string, including the empty string, is valid input.
//!
//! Sentences and paragraphs are plain punctuation and blank-line splits;
//! abbreviations and decimals are not special-cased.
//!
//! Whitespace means Unicode `White_Space` plus U+FEFF, so a stray byte
//! order mark separates words the same way a space does.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Average reading speed used for [`reading_time_minutes`].
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Runs of sentence terminators (`.`, `!`, `?`).
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// A blank line: newline, optional whitespace, newline.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[\s\x{FEFF}]*\n").expect("valid regex"));

/// Statistics derived from a single text buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextMetrics {
    /// Number of whitespace-separated words.
    pub word_count: usize,
    /// Number of characters, whitespace included.
    pub char_count: usize,
    /// Number of non-whitespace characters.
    pub char_count_no_spaces: usize,
    /// Number of non-empty segments between `.`, `!` and `?` runs.
    pub sentence_count: usize,
    /// Number of non-empty blocks separated by blank lines.
    pub paragraph_count: usize,
    /// Estimated reading time in minutes, rounded to two decimals.
    pub reading_time_minutes: f64,
}

impl TextMetrics {
    /// Compute all metrics for `text` at the default reading speed.
    pub fn from_text(text: &str) -> Self {
        Self::with_reading_speed(text, DEFAULT_WORDS_PER_MINUTE)
    }

    /// Compute all metrics for `text` at `words_per_minute`.
    #[tracing::instrument(skip(text), fields(text_len = text.len()))]
    pub fn with_reading_speed(text: &str, words_per_minute: u32) -> Self {
        let word_count = word_count(text);
        let metrics = Self {
            word_count,
            char_count: char_count(text),
            char_count_no_spaces: char_count_no_spaces(text),
            sentence_count: sentence_count(text),
            paragraph_count: paragraph_count(text),
            reading_time_minutes: minutes_for(word_count, words_per_minute),
        };
        tracing::trace!(
            words = metrics.word_count,
            sentences = metrics.sentence_count,
            paragraphs = metrics.paragraph_count,
            "computed text metrics"
        );
        metrics
    }

    /// Reading time formatted the way it is shown to users, e.g. `0.04 min`.
    pub fn reading_time_label(&self) -> String {
        format!("{:.2} min", self.reading_time_minutes)
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            word_count: 0,
            char_count: 0,
            char_count_no_spaces: 0,
            sentence_count: 0,
            paragraph_count: 0,
            reading_time_minutes: 0.0,
        }
    }
}

fn is_text_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn is_blank(segment: &str) -> bool {
    segment.trim_matches(is_text_space).is_empty()
}

/// Count words by splitting the trimmed text on whitespace runs.
pub fn word_count(text: &str) -> usize {
    text.split(is_text_space).filter(|w| !w.is_empty()).count()
}

/// Count every character, whitespace included.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Count characters that are not whitespace.
pub fn char_count_no_spaces(text: &str) -> usize {
    text.chars().filter(|&c| !is_text_space(c)).count()
}

/// Count non-empty segments between runs of `.`, `!` and `?`.
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_BREAK
        .split(text)
        .filter(|s| !is_blank(s))
        .count()
}

/// Count non-empty blocks separated by blank lines.
pub fn paragraph_count(text: &str) -> usize {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !is_blank(p))
        .count()
}

/// Estimated reading time at 200 words per minute, rounded to two decimals.
pub fn reading_time_minutes(text: &str) -> f64 {
    reading_time_at(text, DEFAULT_WORDS_PER_MINUTE)
}

/// Estimated reading time at `words_per_minute`, rounded to two decimals.
///
/// A speed of zero is treated as one word per minute.
pub fn reading_time_at(text: &str, words_per_minute: u32) -> f64 {
    minutes_for(word_count(text), words_per_minute)
}

fn minutes_for(words: usize, words_per_minute: u32) -> f64 {
    let wpm = f64::from(words_per_minute.max(1));
    round_to_hundredths(words as f64 / wpm)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
