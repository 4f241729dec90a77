use std::io::Write;

use super::*;
use crate::application::cli;

#[test]
fn test_has_defaults_for_every_key() {
    for key in ConfigKey::iter() {
        assert!(!Config::default(key).is_empty(), "no default for {key}");
    }
    assert_eq!(Config::default(ConfigKey::Executor), "shell-service");
    assert_eq!(Config::default(ConfigKey::LogLevel), "info");
    assert_eq!(
        Config::default(ConfigKey::ShellServiceUrl),
        "http://localhost:3917"
    );
}

#[test]
fn test_serializes_a_commented_default_config() {
    let serialized = Config::serialize_default(cli::build());
    assert!(serialized.contains("shell-service-url = \"http://localhost:3917\""));
    assert!(serialized.contains("log-level = \"info\""));
    assert!(!serialized.contains("config-file"));
}

// The config store is process-global, so the load scenarios run inside a
// single test to keep them from racing each other.
#[tokio::test]
async fn test_load_precedence_and_validation() {
    Config::set(ConfigKey::LogLevel, "debug");
    assert_eq!(Config::get(ConfigKey::LogLevel), "debug");

    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(config_file, "shell-service-url = \"http://localhost:9999\"").unwrap();
    writeln!(config_file, "log-level = \"warn\"").unwrap();
    config_file.flush().unwrap();

    let file_arg = config_file.path().to_string_lossy().to_string();
    let matches = cli::build().get_matches_from(vec![
        "attest-term",
        "--config-file",
        &file_arg,
        "--log-level",
        "trace",
    ]);

    Config::load(cli::build(), vec![&matches]).await.unwrap();

    // File overrides the default, flags override the file.
    assert_eq!(
        Config::get(ConfigKey::ShellServiceUrl),
        "http://localhost:9999"
    );
    assert_eq!(Config::get(ConfigKey::LogLevel), "trace");
    assert_eq!(Config::get(ConfigKey::Executor), "shell-service");

    // Values outside the declared possible values are rejected.
    let mut invalid_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(invalid_file, "executor = \"teleporter\"").unwrap();
    invalid_file.flush().unwrap();

    let invalid_arg = invalid_file.path().to_string_lossy().to_string();
    let matches =
        cli::build().get_matches_from(vec!["attest-term", "--config-file", &invalid_arg]);
    let result = Config::load(cli::build(), vec![&matches]).await;
    assert!(result.is_err());
}
