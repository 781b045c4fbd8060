//! Configuration management for certnotify
//!
//! This module defines the main `Config` struct and its sub-structs. It uses
//! the `figment` crate to load configuration from a `certnotify.toml` file and
//! merge it with environment variables and command-line overrides.

use anyhow::{bail, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::Cli;

/// The file read when no `--config` path is given. A missing file is not an error.
pub const DEFAULT_CONFIG_PATH: &str = "certnotify.toml";

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Configuration for Slack notifications.
    #[serde(default)]
    pub slack: SlackConfig,
}

/// Configuration for Slack notifications.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SlackConfig {
    /// The Slack incoming webhook URL.
    pub webhook_url: String,
    /// The display name notifications are posted under.
    pub username: String,
    /// URL of the icon shown next to notifications.
    pub icon_url: String,
}

impl Config {
    /// Loads the application configuration by layering sources: defaults, the
    /// TOML file, environment variables and CLI arguments.
    ///
    /// An explicitly requested config file must exist.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                path.clone()
            }
            None => PathBuf::from(DEFAULT_CONFIG_PATH),
        };

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            // e.g. CERTNOTIFY_SLACK__WEBHOOK_URL=https://hooks.slack.com/...
            .merge(Env::prefixed("CERTNOTIFY_").split("__"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            slack: SlackConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert!(config.slack.webhook_url.is_empty());
        assert!(config.slack.username.is_empty());
        assert!(config.slack.icon_url.is_empty());
    }

    #[test]
    fn test_missing_explicit_config_file_is_an_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/certnotify.toml")),
            ..Default::default()
        };

        let err = Config::load(&cli).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
