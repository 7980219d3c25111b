//! Configuration layer.
//!
//! This module provides:
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`]) that builds a
//!   [`Slack`](crate::slack::Slack) client
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! Keys missing from the file fall back to built-in defaults: empty strings
//! for the presentation fields and a 30-second timeout.

pub mod defaults;
mod error;
mod toml;
mod validated;


pub use error::ConfigError;
pub use toml::{SlackSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
