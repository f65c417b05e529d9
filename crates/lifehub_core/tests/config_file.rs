use lifehub_core::{load_config, ConfigError, TemperatureUnit};
use std::io::Write;

#[test]
fn load_config_reads_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "user_name = \"Sam\"\nlocation = \"Oslo\"\ntemperature_unit = \"fahrenheit\"\nlog_level = \"warn\""
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.user_name.as_deref(), Some("Sam"));
    assert_eq!(config.location, "Oslo");
    assert_eq!(config.temperature_unit, TemperatureUnit::Fahrenheit);
    assert_eq!(config.log_level.as_deref(), Some("warn"));
    assert!(config.log_dir.is_none());
}

#[test]
fn load_config_rejects_relative_log_dir() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_dir = \"logs\"").unwrap();

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("absolute"));
}

#[test]
fn load_config_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
