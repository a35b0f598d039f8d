//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub mock: MockConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Mock data generation configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MockConfig {
    /// Fixed seed for reproducible data; random per session when unset
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "default_workshop_count")]
    pub workshop_count: usize,

    #[serde(default = "default_sales_count")]
    pub sales_count: usize,

    #[serde(default = "default_revenue_months")]
    pub revenue_months: usize,
}

fn default_workshop_count() -> usize {
    8
}

fn default_sales_count() -> usize {
    8
}

fn default_revenue_months() -> usize {
    12
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            seed: None,
            workshop_count: default_workshop_count(),
            sales_count: default_sales_count(),
            revenue_months: default_revenue_months(),
        }
    }
}

/// Stat card animation configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AnimationConfig {
    #[serde(default = "default_count_up_ms")]
    pub count_up_ms: u64,

    #[serde(default = "default_entrance_ms")]
    pub entrance_ms: u64,
}

fn default_count_up_ms() -> u64 {
    2000
}

fn default_entrance_ms() -> u64 {
    500
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            count_up_ms: default_count_up_ms(),
            entrance_ms: default_entrance_ms(),
        }
    }
}

impl AnimationConfig {
    pub fn count_up(&self) -> Duration {
        Duration::from_millis(self.count_up_ms)
    }

    pub fn entrance(&self) -> Duration {
        Duration::from_millis(self.entrance_ms)
    }
}

/// Workshop form configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FormConfig {
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,

    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u64,
}

fn default_submit_delay() -> u64 {
    1000
}

fn default_toast_duration() -> u64 {
    3000
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay(),
            toast_duration_ms: default_toast_duration(),
        }
    }
}

impl FormConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("craftsense").join("config.toml")),
            Some(PathBuf::from("./craftsense.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(seed) = lookup("CRAFTSENSE_SEED") {
            match seed.parse() {
                Ok(s) => self.mock.seed = Some(s),
                Err(_) => tracing::warn!(value = %seed, "Ignoring invalid CRAFTSENSE_SEED"),
            }
        }

        if let Some(delay) = lookup("CRAFTSENSE_SUBMIT_DELAY_MS") {
            match delay.parse() {
                Ok(d) => self.form.submit_delay_ms = d,
                Err(_) => {
                    tracing::warn!(value = %delay, "Ignoring invalid CRAFTSENSE_SUBMIT_DELAY_MS")
                }
            }
        }

        if let Some(level) = lookup("CRAFTSENSE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CRAFTSENSE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# CraftSense Configuration
#
# Environment variables override these settings:
# - CRAFTSENSE_SEED
# - CRAFTSENSE_SUBMIT_DELAY_MS
# - CRAFTSENSE_LOG_LEVEL
# - CRAFTSENSE_LOG_FORMAT

[mock]
# Fixed seed for reproducible data (omit for fresh data every session)
# seed = 42

# Number of generated workshops
workshop_count = 8

# Number of generated product sales rows
sales_count = 8

# Months of revenue history, ending with the current month
revenue_months = 12

[animation]
# Stat card count-up duration (ms)
count_up_ms = 2000

# Card entrance fade duration (ms)
entrance_ms = 500

[form]
# Simulated workshop submission delay (ms)
submit_delay_ms = 1000

# How long the success toast stays visible (ms)
toast_duration_ms = 3000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::parse(
            r#"
            [mock]
            seed = 7
            workshop_count = 3

            [form]
            submit_delay_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.mock.seed, Some(7));
        assert_eq!(config.mock.workshop_count, 3);
        assert_eq!(config.mock.revenue_months, 12);
        assert_eq!(config.form.submit_delay(), Duration::from_millis(250));
        assert_eq!(config.form.toast_duration(), Duration::from_secs(3));
        assert_eq!(config.animation.count_up(), Duration::from_secs(2));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("craftsense.toml");
        std::fs::write(&path, "[logging]\nformat = \"json\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[mock\nseed = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("CRAFTSENSE_SEED", "99"),
            ("CRAFTSENSE_SUBMIT_DELAY_MS", "10"),
            ("CRAFTSENSE_LOG_LEVEL", "debug"),
            ("CRAFTSENSE_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.mock.seed, Some(99));
        assert_eq!(config.form.submit_delay_ms, 10);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "CRAFTSENSE_SEED").then(|| "abc".to_string()));
        assert_eq!(config.mock.seed, None);
    }
}
