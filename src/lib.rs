//! Slack incoming-webhook client.
//!
//! Builds a single-attachment message (color, title, text, fields) through a
//! fluent builder and posts it to a webhook, checking the response status.
//!
//! ```no_run
//! use slack_webhook::slack::{Field, Slack};
//!
//! let slack = Slack::new(
//!     "https://hooks.slack.com/services/T0000/B0000/XXXXXXXX",
//!     "http://monitor/page/",
//!     "monitor",
//!     "app name",
//!     ":ghost:",
//! );
//!
//! slack
//!     .new_message()
//!     .with_color("#439FE0")
//!     .with_subject("test subject")
//!     .with_text("not important")
//!     .with_fields(vec![Field::short("t1", "v1"), Field::short("t2", "v2")])
//!     .send_blocking()?;
//! # Ok::<(), slack_webhook::slack::SendError>(())
//! ```

pub mod config;
pub mod slack;
pub mod time;
