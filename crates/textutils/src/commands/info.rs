//! Info command implementation

use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;
use textutils_core::Transform;
use textutils_core::config::{Config, ConfigSources};
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    words_per_minute: u32,
    copy_feedback_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            words_per_minute: config.reading_speed(),
            copy_feedback_ms: config.copy_feedback().as_millis(),
            max_input_bytes: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
    transforms: Vec<&'static str>,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
        transforms: Transform::ALL.iter().map(Transform::as_str).collect(),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!(
        "{} {}",
        package.name.if_supports_color(Stdout, |t| t.bold()),
        package.version.if_supports_color(Stdout, |t| t.green())
    );
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    print_field("License", package.license);
    print_field("Repository", package.repository);

    println!();
    println!(
        "{}",
        "Configuration".if_supports_color(Stdout, |t| t.underline())
    );
    let cfg = &full_info.config;
    match cfg.config_file {
        Some(ref path) => print_field("Config file", path),
        None => print_field("Config file", "none loaded"),
    }
    print_field("Log level", &cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        print_field("Log directory", dir);
    }
    print_field("Reading speed", &format!("{} wpm", cfg.words_per_minute));
    print_field("Copy feedback", &format!("{} ms", cfg.copy_feedback_ms));
    match cfg.max_input_bytes {
        Some(max) => print_field("Input limit", &format!("{max} bytes")),
        None => print_field("Input limit", "disabled"),
    }

    println!();
    println!(
        "{}",
        "Transforms".if_supports_color(Stdout, |t| t.underline())
    );
    println!("{}", full_info.transforms.join(", "));

    Ok(())
}

fn print_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("{}: {value}", label.if_supports_color(Stdout, |t| t.dimmed()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_info_text_succeeds() {
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), false, &Config::default(), &sources).is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), true, &Config::default(), &sources).is_ok());
    }

    #[test]
    fn test_config_info_defaults() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.words_per_minute, 200);
        assert_eq!(info.copy_feedback_ms, 2000);
        assert_eq!(info.max_input_bytes, Some(textutils_core::DEFAULT_MAX_INPUT_BYTES));
    }
}
