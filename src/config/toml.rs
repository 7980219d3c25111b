//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Slack client section
    #[serde(default)]
    pub slack: SlackSection,
}

/// Slack client section.
///
/// Every key is optional; missing strings default to empty, which the
/// client treats as "not set".
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlackSection {
    /// Incoming webhook URL
    pub webhook_url: Option<String>,

    /// Link attached to the author name
    pub author_link: Option<String>,

    /// Author shown above the attachment
    pub author_name: Option<String>,

    /// Display name overriding the webhook's default
    pub app_name: Option<String>,

    /// Emoji shortcode used as the avatar
    pub emoji: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Slack webhook client configuration

[slack]
# Incoming webhook URL
# webhook_url = "https://hooks.slack.com/services/T0000/B0000/XXXXXXXX"

# Author line of the attachment (empty = omitted)
# author_link = "http://monitor/page/"
# author_name = "monitor"

# Display name and avatar emoji (empty = webhook defaults)
# app_name = "app name"
# emoji = ":ghost:"

# Request timeout in seconds (default: 30)
timeout = 30
"#
    .to_string()
}
