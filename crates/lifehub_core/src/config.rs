//! Dashboard configuration file.
//!
//! # Responsibility
//! - Parse the optional TOML configuration into `DashboardConfig`.
//! - Reject values that would only fail later (relative log dir, bad level).
//!
//! # Invariants
//! - Every key is optional; missing keys take `DashboardConfig::default()`.
//! - Unknown keys are rejected so typos surface immediately.

use crate::logging::normalize_level;
use crate::model::weather::TemperatureUnit;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOCATION: &str = "San Francisco";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Name used in the greeting.
    pub user_name: Option<String>,
    /// Location passed to the weather service.
    pub location: String,
    pub temperature_unit: TemperatureUnit,
    /// `trace|debug|info|warn|error`; defaults to the build-mode level.
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files. Logging is off when unset.
    pub log_dir: Option<PathBuf>,
    /// SQLite file used to restore and save dashboard state.
    pub state_db: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            user_name: None,
            location: DEFAULT_LOCATION.to_string(),
            temperature_unit: TemperatureUnit::default(),
            log_level: None,
            log_dir: None,
            state_db: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

/// Reads and validates a TOML config file.
pub fn load_config(path: impl AsRef<Path>) -> Result<DashboardConfig, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text)
}

/// Parses and validates TOML config text.
pub fn parse_config(text: &str) -> Result<DashboardConfig, ConfigError> {
    let config: DashboardConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.location.trim().is_empty() {
            return Err(ConfigError::Invalid("location cannot be empty".to_string()));
        }
        if let Some(level) = &self.log_level {
            normalize_level(level).map_err(ConfigError::Invalid)?;
        }
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "log_dir must be an absolute path, got `{}`",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_config, ConfigError, DashboardConfig, DEFAULT_LOCATION};
    use crate::model::weather::TemperatureUnit;

    #[test]
    fn empty_text_yields_defaults() {
        let config = parse_config("").expect("empty config should parse");
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.location, DEFAULT_LOCATION);
    }

    #[test]
    fn parses_all_keys() {
        let config = parse_config(
            r#"
user_name = "Ada"
location = "Lisbon"
temperature_unit = "fahrenheit"
log_level = "WARNING"
log_dir = "/var/log/lifehub"
state_db = "state.sqlite"
"#,
        )
        .expect("full config should parse");
        assert_eq!(config.user_name.as_deref(), Some("Ada"));
        assert_eq!(config.location, "Lisbon");
        assert_eq!(config.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(config.log_level.as_deref(), Some("WARNING"));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        assert!(matches!(
            parse_config("colour = \"blue\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            parse_config("log_level = \"loud\""),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            parse_config("location = \"  \""),
            Err(ConfigError::Invalid(_))
        ));
    }
}
