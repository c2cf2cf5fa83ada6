use super::*;

use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temp path unique per call.
fn temp_path(suffix: &str) -> std::path::PathBuf {
    let id = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "__msgsplit_config_test_{}_{}__{suffix}",
        std::process::id(),
        id
    ))
}

#[test]
fn test_split_config_default() {
    let cfg = SplitConfig::default();
    assert_eq!(cfg.limit, 4096);
    assert_eq!(cfg.newline_window, 200);
    assert_eq!(cfg.space_window, 100);
    assert_eq!(cfg.fence_buffer, 500);
}

#[test]
fn test_split_config_from_toml() {
    let toml_str = r#"
        limit = 2000
        fence_buffer = 250
    "#;
    let cfg: SplitConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.limit, 2000);
    assert_eq!(cfg.fence_buffer, 250);
    assert_eq!(cfg.newline_window, 200, "missing fields fall back to defaults");
    assert_eq!(cfg.space_window, 100);
}

#[test]
fn test_full_config_from_toml() {
    let toml_str = r#"
        platform = "discord"

        [general]
        log_level = "debug"

        [split]
        limit = 1000
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.platform, Some(Platform::Discord));
    assert_eq!(cfg.general.log_level, "debug");
    assert_eq!(cfg.split.limit, 1000);
    assert_eq!(cfg.effective_limit(), 2000, "platform preset wins");
}

#[test]
fn test_whatsapp_platform_toml_name() {
    let cfg: Config = toml::from_str("platform = \"whatsapp\"").unwrap();
    assert_eq!(cfg.platform, Some(Platform::WhatsApp));
    assert_eq!(cfg.effective_limit(), 4096);

    let out = toml::to_string(&cfg).unwrap();
    assert!(
        out.contains("platform = \"whatsapp\""),
        "WhatsApp should serialize lowercase: {out}"
    );
}

#[test]
fn test_effective_limit_without_platform() {
    let cfg = Config {
        split: SplitConfig::with_limit(123),
        ..Default::default()
    };
    assert_eq!(cfg.effective_limit(), 123);
    assert_eq!(cfg.effective_split().fence_buffer, 500);
}

#[test]
fn test_validate_rejects_zero_limit() {
    let err = SplitConfig::with_limit(0).validate().unwrap_err();
    assert!(matches!(err, SplitError::ZeroLimit));
    assert!(SplitConfig::with_limit(1).validate().is_ok());
}

#[test]
fn test_platform_from_str() {
    assert_eq!("Telegram".parse::<Platform>(), Ok(Platform::Telegram));
    assert_eq!(" whatsapp ".parse::<Platform>(), Ok(Platform::WhatsApp));
    assert!("irc".parse::<Platform>().is_err());
    assert_eq!(Platform::Slack.to_string(), "slack");
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/__msgsplit_missing__.toml").unwrap();
    assert!(cfg.platform.is_none());
    assert_eq!(cfg.split, SplitConfig::default());
    assert_eq!(cfg.general.log_level, "info");
}

#[test]
fn test_load_rejects_zero_limit() {
    let tmp = temp_path(".toml");
    std::fs::write(&tmp, "[split]\nlimit = 0\n").unwrap();

    let result = load(tmp.to_str().unwrap());
    assert!(matches!(result, Err(SplitError::ZeroLimit)));

    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_load_reports_parse_errors() {
    let tmp = temp_path(".toml");
    std::fs::write(&tmp, "[split\nlimit = ").unwrap();

    match load(tmp.to_str().unwrap()) {
        Err(SplitError::Config(msg)) => assert!(msg.contains("failed to parse config")),
        other => panic!("expected config error, got {other:?}"),
    }

    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_config_serializes_to_toml() {
    let cfg = Config {
        platform: Some(Platform::Telegram),
        ..Default::default()
    };
    let out = toml::to_string_pretty(&cfg).unwrap();
    assert!(out.contains("platform = \"telegram\""));
    assert!(out.contains("[split]"));
    assert!(out.contains("fence_buffer = 500"));
}

#[test]
fn test_load_unreadable_path_is_io_error() {
    // The path exists but is a directory, so reading it fails.
    let dir = temp_path("_dir");
    std::fs::create_dir_all(&dir).unwrap();

    let result = load(dir.to_str().unwrap());
    assert!(matches!(result, Err(SplitError::Io(_))), "got {result:?}");

    let _ = std::fs::remove_dir_all(&dir);
}
