//! Validated configuration built from the TOML file.
//!
//! All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::slack::Slack;

use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated client configuration.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] for a file or [`ValidatedConfig::from_toml`]
/// for an already parsed [`TomlConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Incoming webhook URL, not checked until a message is sent
    pub webhook_url: String,

    pub author_link: String,

    pub author_name: String,

    pub app_name: String,

    pub emoji: String,

    /// Request timeout
    pub timeout: Duration,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The webhook URL embeds a secret token; only report whether it is set.
        write!(
            f,
            "Config {{ webhook_url: {}, author: {:?}, app_name: {:?}, emoji: {:?}, timeout: {}s }}",
            if self.webhook_url.is_empty() {
                "unset"
            } else {
                "set"
            },
            self.author_name,
            self.app_name,
            self.emoji,
            self.timeout.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(&TomlConfig::load(path)?)
    }

    /// Validates a parsed configuration, filling defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDuration`] if `timeout` is zero.
    pub fn from_toml(toml: &TomlConfig) -> Result<Self, ConfigError> {
        let section = &toml.slack;
        let seconds = section.timeout.unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Self {
            webhook_url: section.webhook_url.clone().unwrap_or_default(),
            author_link: section.author_link.clone().unwrap_or_default(),
            author_name: section.author_name.clone().unwrap_or_default(),
            app_name: section.app_name.clone().unwrap_or_default(),
            emoji: section.emoji.clone().unwrap_or_default(),
            timeout: Duration::from_secs(seconds),
        })
    }

    /// Builds the production client described by this configuration.
    #[must_use]
    pub fn into_slack(self) -> Slack {
        Slack::new(
            self.webhook_url,
            self.author_link,
            self.author_name,
            self.app_name,
            self.emoji,
        )
        .with_timeout(self.timeout)
    }
}

/// Writes the commented configuration template to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
