//! Configuration management for idfmt
//!
//! This module handles loading, validation, and management of
//! idfmt configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::{ConfigError, ConfigErrorCode, ConfigErrorDetails, ConfigResult};

/// Largest accepted `formatter.group_size`
pub const MAX_GROUP_SIZE: usize = 32;

/// Accepted values for `logging.level`
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

// ==================== Configuration Types ====================

/// Identifier display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Characters per group, counted from the right
    #[serde(default = "default_group_size")]
    pub group_size: usize,
    /// Text inserted between groups
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Treat a numeric zero as "no identifier"
    #[serde(default = "default_true")]
    pub zero_is_absent: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            group_size: default_group_size(),
            separator: default_separator(),
            zero_is_absent: true,
        }
    }
}

fn default_group_size() -> usize {
    4
}

fn default_separator() -> String {
    "-".to_string()
}

fn default_true() -> bool {
    true
}

/// Snowflake layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnowflakeConfig {
    /// Generator epoch in Unix milliseconds
    #[serde(default = "default_epoch_ms")]
    pub epoch_ms: u64,
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self {
            epoch_ms: default_epoch_ms(),
        }
    }
}

fn default_epoch_ms() -> u64 {
    // 2024-01-01T00:00:00Z
    1_704_067_200_000
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: off, error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Identifier display settings
    #[serde(default)]
    pub formatter: FormatterConfig,
    /// Snowflake decoding settings
    #[serde(default)]
    pub snowflake: SnowflakeConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            });
        }

        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_yaml_str(&content)?;
        log::debug!(target: "idfmt::config", "Config loaded from {}", path.display());

        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        // An empty document means "all defaults"
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| ConfigError::InvalidYaml {
                message: e.to_string(),
            })?
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        let group_size = self.formatter.group_size;
        if group_size == 0 || group_size > MAX_GROUP_SIZE {
            return Err(ConfigError::InvalidValue {
                field: "formatter.group_size".to_string(),
                reason: format!("Group size must be between 1 and {}", MAX_GROUP_SIZE),
            });
        }

        if self.formatter.separator.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "formatter.separator".to_string(),
                reason: "Separator must not be empty".to_string(),
            });
        }

        if self.formatter.separator.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                field: "formatter.separator".to_string(),
                reason: "Separator must not contain digits".to_string(),
            });
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("Log level must be one of: {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.formatter.group_size, 4);
        assert_eq!(config.formatter.separator, "-");
        assert!(config.formatter.zero_is_absent);
        assert_eq!(config.snowflake.epoch_ms, 1_704_067_200_000);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bundled_template_matches_defaults() {
        let config = Config::from_yaml_str(Config::generate_default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Config::from_yaml_str("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml_str("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config = Config::from_yaml_str("formatter:\n  separator: \" \"\n").unwrap();
        assert_eq!(config.formatter.separator, " ");
        assert_eq!(config.formatter.group_size, 4);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_zero_group_size_rejected() {
        let err = Config::from_yaml_str("formatter:\n  group_size: 0\n").unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::InvalidValue);
        assert!(err.to_string().contains("formatter.group_size"));
    }

    #[test]
    fn test_digit_separator_rejected() {
        let err = Config::from_yaml_str("formatter:\n  separator: \"0\"\n").unwrap_err();
        assert!(err.to_string().contains("formatter.separator"));

        let err = Config::from_yaml_str("formatter:\n  separator: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let err = Config::from_yaml_str("logging:\n  level: loud\n").unwrap_err();
        assert!(err.to_string().contains("logging.level"));
        assert!(Config::from_yaml_str("logging:\n  level: DEBUG\n").is_ok());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = Config::from_yaml_str("formatter: [unclosed").unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::InvalidYaml);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(PathBuf::from("/nonexistent/idfmt/config.yaml")).unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::FileNotFound);
    }
}
