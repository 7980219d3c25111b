//! Client configuration shared by every message it produces.

use std::time::Duration;

use crate::config::defaults;

use super::{Message, ReqwestClient, TracingLogger};

/// Webhook client holding the destination and presentation defaults.
///
/// Immutable once built. Messages borrow it, so one `Slack` can feed any
/// number of drafts, from any number of threads when `H` and `L` allow it.
///
/// # Type Parameters
///
/// - `H`: HTTP transport (defaults to [`ReqwestClient`])
/// - `L`: payload logger (defaults to [`TracingLogger`])
///
/// # Example
///
/// ```no_run
/// use slack_webhook::slack::{Field, Slack};
///
/// let slack = Slack::new(
///     "https://hooks.slack.com/services/T000/B000/XXXX",
///     "http://monitor/page/",
///     "monitor",
///     "app name",
///     ":ghost:",
/// );
///
/// slack
///     .new_message()
///     .with_color("#439FE0")
///     .with_subject("disk usage")
///     .with_text("/var is 91% full")
///     .with_fields(vec![Field::short("host", "db-1")])
///     .send_blocking()?;
/// # Ok::<(), slack_webhook::slack::SendError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Slack<H = ReqwestClient, L = TracingLogger> {
    webhook_url: String,
    author_link: String,
    author_name: String,
    app_name: String,
    emoji: String,
    timeout: Duration,
    client: H,
    logger: L,
}

impl Slack {
    /// Creates a client with the production transport and logger.
    ///
    /// No argument is validated; an unusable webhook URL only surfaces when
    /// a message is sent.
    #[must_use]
    pub fn new(
        webhook_url: impl Into<String>,
        author_link: impl Into<String>,
        author_name: impl Into<String>,
        app_name: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            author_link: author_link.into(),
            author_name: author_name.into(),
            app_name: app_name.into(),
            emoji: emoji.into(),
            timeout: defaults::timeout(),
            client: ReqwestClient::new(),
            logger: TracingLogger,
        }
    }
}

impl<H, L> Slack<H, L> {
    /// Replaces the HTTP transport.
    #[must_use]
    pub fn with_client<H2>(self, client: H2) -> Slack<H2, L> {
        Slack {
            webhook_url: self.webhook_url,
            author_link: self.author_link,
            author_name: self.author_name,
            app_name: self.app_name,
            emoji: self.emoji,
            timeout: self.timeout,
            client,
            logger: self.logger,
        }
    }

    /// Replaces the payload logger.
    #[must_use]
    pub fn with_logger<L2>(self, logger: L2) -> Slack<H, L2> {
        Slack {
            webhook_url: self.webhook_url,
            author_link: self.author_link,
            author_name: self.author_name,
            app_name: self.app_name,
            emoji: self.emoji,
            timeout: self.timeout,
            client: self.client,
            logger,
        }
    }

    /// Sets the end-to-end request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    #[must_use]
    pub fn author_link(&self) -> &str {
        &self.author_link
    }

    #[must_use]
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Display name sent as `username`; empty means the webhook's own.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Emoji sent as `icon_emoji`; empty means the webhook's own.
    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) const fn client(&self) -> &H {
        &self.client
    }

    pub(crate) const fn logger(&self) -> &L {
        &self.logger
    }

    /// Starts an empty message addressed through this client.
    #[must_use]
    pub const fn new_message(&self) -> Message<'_, H, L> {
        Message::new(self)
    }
}
