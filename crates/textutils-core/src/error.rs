//! Error types for textutils-core.
//!
//! Statistics and transforms are total functions and never fail. The
//! errors here cover the edges around them: configuration, transform
//! lookup by name, and the clipboard seam used by [`crate::session`].

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when resolving a transform.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// An unknown transform name was provided.
    #[error("unknown transform: {name}. Use: {available}")]
    Unknown {
        /// The transform name that was requested.
        name: String,
        /// Comma-separated list of available transform names.
        available: String,
    },
}

/// Errors reported by a [`Clipboard`](crate::session::Clipboard) backend.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The host clipboard rejected the write.
    #[error("failed to write to clipboard: {0}")]
    Write(String),
}
