use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use riftwatch::error::{ConfigError, Error};
use riftwatch::infrastructure::config::settings::Config;
use tempfile::TempDir;

fn write_temp_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("riftwatch.toml");
    fs::write(&path, contents).expect("write temp config");
    (dir, path)
}

#[test]
fn config_loads_every_section() {
    let toml = r#"
database = "/var/lib/riftwatch/state.db"

[logging]
level = "debug"
format = "json"

[riot]
region = "europe"

[riot.http]
retry_max_attempts = 3
retry_backoff_ms = 250
retry_backoff_max_ms = 4000

[watch]
interval_secs = 120
max_concurrency = 2
request_spacing_ms = 200

[analysis]
midline = 4800
threshold = 9800
early_game_frames = 15

[notifications]
log = false
outbox_path = "outbox.jsonl"
"#;

    let (_dir, path) = write_temp_config(toml);
    let config = Config::load(&path).expect("valid config");

    assert_eq!(config.database, "/var/lib/riftwatch/state.db");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.riot.base_url(), "https://europe.api.riotgames.com");
    assert_eq!(config.riot.http.retry_max_attempts, 3);
    assert_eq!(config.watch.interval(), Duration::from_secs(120));
    assert_eq!(config.watch.max_concurrency, 2);
    assert_eq!(config.watch.request_spacing(), Duration::from_millis(200));
    assert_eq!(config.analysis.bounds().midline, 4800);
    assert_eq!(config.analysis.bounds().threshold, 9800);
    assert_eq!(config.analysis.early_game_frames, 15);
    assert!(!config.notifications.log);
    assert_eq!(
        config.notifications.outbox_path,
        Some(PathBuf::from("outbox.jsonl"))
    );
}

#[test]
fn shipped_template_is_valid() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config.toml.example");
    let config = Config::load(&path).expect("template loads");

    assert_eq!(config.watch.interval_secs, 60);
    assert_eq!(config.analysis.threshold, 10_000);
    assert!(config.notifications.log);
}

#[test]
fn short_interval_is_accepted_for_later_clamping() {
    let (_dir, path) = write_temp_config("[watch]\ninterval_secs = 3\n");
    let config = Config::load(&path).expect("short interval is not an error");
    assert_eq!(config.watch.interval_secs, 3);
}

#[test]
fn config_rejects_threshold_below_midline() {
    let (_dir, path) = write_temp_config("[analysis]\nmidline = 6000\nthreshold = 5000\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "analysis.threshold",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid threshold error, got {err}"),
        Ok(config) => panic!(
            "Expected threshold below midline to be rejected, got {}",
            config.analysis.threshold
        ),
    }
}

#[test]
fn config_rejects_zero_frames() {
    let (_dir, path) = write_temp_config("[analysis]\nearly_game_frames = 0\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "analysis.early_game_frames",
            ..
        })) => {}
        other => panic!("Expected invalid frame count, got {other:?}"),
    }
}

#[test]
fn config_rejects_invalid_base_url() {
    let (_dir, path) = write_temp_config("[riot]\nbase_url = \"not a url\"\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "riot.base_url",
            ..
        })) => {}
        other => panic!("Expected invalid base url, got {other:?}"),
    }
}

#[test]
fn config_rejects_zero_attempts() {
    let (_dir, path) = write_temp_config("[riot.http]\nretry_max_attempts = 0\n");

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("riot.http.retry_max_attempts"));
}

#[test]
fn config_rejects_blank_context() {
    let (_dir, path) = write_temp_config("[roster]\ncontext = \"  \"\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::MissingField {
            field: "roster.context",
        })) => {}
        other => panic!("Expected missing context, got {other:?}"),
    }
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn unknown_region_is_a_parse_error() {
    let (_dir, path) = write_temp_config("[riot]\nregion = \"moon\"\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}
