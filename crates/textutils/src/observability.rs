//! Logging setup.
//!
//! Human-readable events go to stderr; when a log location is available,
//! every event is also written as JSON lines to a file through a
//! non-blocking `tracing-appender` writer.
//!
//! Log location, highest precedence first:
//! 1. `TEXTUTILS_LOG_PATH` (exact file, never rotated)
//! 2. `TEXTUTILS_LOG_DIR` (daily-rotated `textutils.<date>.jsonl`)
//! 3. `log_dir` from configuration
//! 4. `<user data dir>/logs`

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const ENV_LOG_PATH: &str = "TEXTUTILS_LOG_PATH";
const ENV_LOG_DIR: &str = "TEXTUTILS_LOG_DIR";
const LOG_FILE_PREFIX: &str = "textutils";
const LOG_FILE_SUFFIX: &str = "jsonl";

/// Where file logs should be written.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Exact log file (from `TEXTUTILS_LOG_PATH`).
    pub log_path: Option<PathBuf>,
    /// Directory for rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve log locations from the environment, then `config_log_dir`,
    /// then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = non_empty_env(ENV_LOG_PATH).map(PathBuf::from);
        let log_dir = non_empty_env(ENV_LOG_DIR)
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                textutils_core::config::user_data_dir()
                    .map(|dir| dir.join("logs").into_std_path_buf())
            });
        Self { log_path, log_dir }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Build the global event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` means errors only, `-v` debug,
/// `-vv` trace, and the configured level applies when neither flag is given.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Level shown on stderr. The log file still receives everything the
/// global filter lets through.
pub const fn console_level(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// Returns the file writer's guard; keep it alive until exit so buffered
/// lines are flushed. File logging is skipped when no location can be
/// created.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
    console_level: LevelFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let appender = file_appender(config);
    let (file_layer, guard) = match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_current_span(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_level);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn file_appender(config: &ObservabilityConfig) -> Option<RollingFileAppender> {
    if let Some(ref path) = config.log_path {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        return RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_name)
            .build(dir)
            .ok();
    }

    let dir = config.log_dir.as_ref()?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(dir)
        .ok()
}
