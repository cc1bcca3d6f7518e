//! Headless editor session.
//!
//! Holds the state a text-utility front end keeps between events: the
//! buffer, the light/dark theme flag, and the transient "copied" flag.
//! Every action is a plain method call that runs a pure computation from
//! [`crate::stats`] or [`crate::transform`] and assigns the result.
//!
//! Time is passed in explicitly as an [`Instant`] so the copy flag can be
//! checked without timers or callbacks.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::{Config, DEFAULT_COPY_FEEDBACK_MS};
use crate::error::ClipboardError;
use crate::stats::{DEFAULT_WORDS_PER_MINUTE, TextMetrics};
use crate::transform::Transform;

/// Shown by [`Session::preview`] when the buffer is empty.
pub const EMPTY_PREVIEW: &str = "Nothing to preview. Enter some text above.";

/// Destination for copied text, usually the host platform's clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Colour theme of the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Editor state for one text buffer.
#[derive(Debug, Clone)]
pub struct Session {
    buffer: String,
    theme: Theme,
    words_per_minute: u32,
    copy_feedback: Duration,
    copied_until: Option<Instant>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_COPY_FEEDBACK_MS))
    }
}

impl Session {
    /// Create an empty session whose copy flag stays up for `copy_feedback`.
    pub const fn new(copy_feedback: Duration) -> Self {
        Self {
            buffer: String::new(),
            theme: Theme::Light,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            copy_feedback,
            copied_until: None,
        }
    }

    /// Create an empty session using the configured copy-feedback window
    /// and reading speed.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.copy_feedback()).with_reading_speed(config.reading_speed())
    }

    /// Use `words_per_minute` for reading-time estimates.
    #[must_use]
    pub fn with_reading_speed(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    /// Replace the buffer.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// The current buffer.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Whether the buffer is empty. Actions are disabled while it is.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Metrics for the current buffer, computed fresh.
    pub fn metrics(&self) -> TextMetrics {
        TextMetrics::with_reading_speed(&self.buffer, self.words_per_minute)
    }

    /// The buffer, or a placeholder when it is empty.
    pub fn preview(&self) -> &str {
        if self.buffer.is_empty() {
            EMPTY_PREVIEW
        } else {
            &self.buffer
        }
    }

    /// Apply `transform` to the buffer.
    ///
    /// Returns `false` without touching anything when the buffer is empty.
    pub fn apply(&mut self, transform: Transform) -> bool {
        if self.is_empty() {
            tracing::debug!(%transform, "transform skipped on empty buffer");
            return false;
        }
        self.buffer = transform.apply(&self.buffer);
        tracing::debug!(%transform, len = self.buffer.len(), "transform applied");
        true
    }

    /// The current theme.
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch between light and dark, returning the new theme.
    pub const fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Copy the buffer to `clipboard`.
    ///
    /// Returns `Ok(false)` when the buffer is empty. On success the copy
    /// flag is raised until `now + copy_feedback`; a later copy restarts
    /// that window. A failed write leaves the flag as it was.
    pub fn copy_to<C: Clipboard + ?Sized>(
        &mut self,
        clipboard: &mut C,
        now: Instant,
    ) -> Result<bool, ClipboardError> {
        if self.is_empty() {
            return Ok(false);
        }
        if let Err(err) = clipboard.write_text(&self.buffer) {
            tracing::error!(error = %err, "failed to copy text");
            return Err(err);
        }
        self.copied_until = Some(now + self.copy_feedback);
        tracing::debug!(len = self.buffer.len(), "text copied");
        Ok(true)
    }

    /// Whether the "copied" flag is still showing at `now`.
    pub fn copy_succeeded(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
        writes: usize,
    }

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.contents = Some(text.to_string());
            self.writes += 1;
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Write("permission denied".to_string()))
        }
    }

    #[test]
    fn new_session_is_empty() {
        let session = Session::default();
        assert!(session.is_empty());
        assert_eq!(session.metrics(), TextMetrics::default());
        assert_eq!(session.preview(), EMPTY_PREVIEW);
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn set_text_updates_metrics_and_preview() {
        let mut session = Session::default();
        session.set_text("Hello world. Bye!");
        assert_eq!(session.preview(), "Hello world. Bye!");
        let m = session.metrics();
        assert_eq!(m.word_count, 3);
        assert_eq!(m.sentence_count, 2);
    }

    #[test]
    fn transforms_feed_back_into_buffer() {
        let mut session = Session::default();
        session.set_text("a  b   C");
        assert!(session.apply(Transform::CollapseSpaces));
        assert!(session.apply(Transform::Upper));
        assert_eq!(session.text(), "A B C");
        assert!(session.apply(Transform::Clear));
        assert!(session.is_empty());
    }

    #[test]
    fn transforms_disabled_on_empty_buffer() {
        let mut session = Session::default();
        assert!(!session.apply(Transform::Upper));
        assert!(session.is_empty());
    }

    #[test]
    fn theme_toggles() {
        let mut session = Session::default();
        assert_eq!(session.toggle_theme(), Theme::Dark);
        assert_eq!(session.toggle_theme(), Theme::Light);
    }

    #[test]
    fn copy_flag_expires_after_feedback_window() {
        let mut session = Session::default();
        let mut clipboard = MemoryClipboard::default();
        session.set_text("copy me");

        let start = Instant::now();
        assert!(!session.copy_succeeded(start));
        assert!(session.copy_to(&mut clipboard, start).unwrap());
        assert_eq!(clipboard.contents.as_deref(), Some("copy me"));

        assert!(session.copy_succeeded(start + Duration::from_millis(1999)));
        assert!(!session.copy_succeeded(start + Duration::from_secs(2)));
    }

    #[test]
    fn second_copy_restarts_window() {
        let mut session = Session::new(Duration::from_secs(2));
        let mut clipboard = MemoryClipboard::default();
        session.set_text("again");

        let start = Instant::now();
        session.copy_to(&mut clipboard, start).unwrap();
        session
            .copy_to(&mut clipboard, start + Duration::from_millis(1500))
            .unwrap();

        assert_eq!(clipboard.writes, 2);
        assert!(session.copy_succeeded(start + Duration::from_millis(3000)));
        assert!(!session.copy_succeeded(start + Duration::from_millis(3500)));
    }

    #[test]
    fn copy_disabled_on_empty_buffer() {
        let mut session = Session::default();
        let mut clipboard = MemoryClipboard::default();
        let now = Instant::now();
        assert!(!session.copy_to(&mut clipboard, now).unwrap());
        assert_eq!(clipboard.writes, 0);
        assert!(!session.copy_succeeded(now));
    }

    #[test]
    fn failed_copy_leaves_flag_down() {
        let mut session = Session::default();
        session.set_text("secret");
        let now = Instant::now();
        let result = session.copy_to(&mut BrokenClipboard, now);
        assert!(result.is_err());
        assert!(!session.copy_succeeded(now));
    }

    #[test]
    fn from_config_applies_feedback_window_and_speed() {
        let config = Config {
            copy_feedback_ms: Some(500),
            words_per_minute: Some(100),
            ..Config::default()
        };
        let mut session = Session::from_config(&config);
        let mut clipboard = MemoryClipboard::default();
        session.set_text("word ".repeat(50));

        let start = Instant::now();
        assert!(session.copy_to(&mut clipboard, start).unwrap());
        assert!(session.copy_succeeded(start + Duration::from_millis(499)));
        assert!(!session.copy_succeeded(start + Duration::from_millis(500)));
        assert!((session.metrics().reading_time_minutes - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn reading_speed_is_configurable() {
        let mut session = Session::default().with_reading_speed(100);
        session.set_text("word ".repeat(150));
        assert!((session.metrics().reading_time_minutes - 1.5).abs() < f64::EPSILON);
    }
}
