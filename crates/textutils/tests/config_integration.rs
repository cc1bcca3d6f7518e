//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("TEXTUTILS_WORDS_PER_MINUTE")
        .env_remove("TEXTUTILS_LOG_DIR")
        .env("TEXTUTILS_LOG_PATH", std::env::temp_dir().join("textutils-config-test.jsonl"));
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert_eq!(json["config"]["words_per_minute"], 200);
    assert_eq!(json["config"]["copy_feedback_ms"], 2000);
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textutils.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".textutils.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join("textutils.toml"), "words_per_minute = 250\n").unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["words_per_minute"], 250);
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textutils.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("textutils.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "error",
        "regular file should override dotfile"
    );
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("textutils.yaml"),
        "words_per_minute: 180\ncopy_feedback_ms: 1500\n",
    )
    .unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["words_per_minute"], 180);
    assert_eq!(json["config"]["copy_feedback_ms"], 1500);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("textutils.json"),
        r#"{"log_level": "warn", "disable_input_limit": true}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "warn");
    assert!(json["config"]["max_input_bytes"].is_null());
}

#[test]
fn invalid_config_fails_with_message() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("textutils.toml"), "words_per_minute = \"fast\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn explicit_config_flag_overrides_discovery() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("textutils.toml"), "words_per_minute = 150\n").unwrap();
    let explicit = tmp.path().join("explicit.toml");
    fs::write(&explicit, "words_per_minute = 300\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["words_per_minute"], 300);
    assert!(
        json["config"]["config_file"]
            .as_str()
            .unwrap()
            .ends_with("explicit.toml")
    );
}

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("textutils.toml"), "words_per_minute = 150\n").unwrap();

    let output = cmd()
        .env("TEXTUTILS_WORDS_PER_MINUTE", "400")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["words_per_minute"], 400);
}

#[test]
fn configured_reading_speed_used_by_stats() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("textutils.toml"), "words_per_minute = 100\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "stats", "--json"])
        .write_stdin("word ".repeat(50))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"reading_time_minutes\": 0.5"));
}
