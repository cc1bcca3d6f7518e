//! Core library for textutils.
//!
//! Word counting, text statistics and simple buffer transforms, plus the
//! configuration layer shared by the `textutils` CLI and MCP server.
//!
//! # Modules
//!
//! - [`stats`] - Word, character, sentence and paragraph counts, reading time
//! - [`transform`] - Case conversion, whitespace cleanup and other buffer transforms
//! - [`session`] - Headless editor state (buffer, theme, copy feedback)
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textutils_core::{TextMetrics, Transform};
//!
//! let text = "Hello world. This is TextUtils!\n\nSecond paragraph.";
//! let metrics = TextMetrics::from_text(text);
//! assert_eq!(metrics.word_count, 7);
//! assert_eq!(metrics.paragraph_count, 2);
//!
//! assert_eq!(Transform::CollapseSpaces.apply("a  b   c"), "a b c");
//! ```
#![deny(unsafe_code)]

pub mod config;

pub mod error;

pub mod session;

pub mod stats;

pub mod transform;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};

pub use error::{ClipboardError, ConfigError, ConfigResult, TransformError};

pub use session::{Clipboard, Session, Theme};

pub use stats::TextMetrics;

pub use transform::Transform;
