//! Per-message builder and the send operation.

use std::time::SystemTime;

use http::header::{CONTENT_TYPE, HeaderValue};

use crate::config::defaults;
use crate::time::{Clock, unix_seconds};

use super::payload::{Attachment, Field, Payload, WARNING, normalize_color};
use super::{HttpClient, HttpError, HttpRequest, PayloadLogger, SendError, Slack};

/// Text used by [`Message::with_defaults`] when the body is empty.
pub const DEFAULT_TEXT: &str = "no text";

/// Subject used by [`Message::with_defaults`] when the subject is empty.
pub const DEFAULT_SUBJECT: &str = "no subject";

/// A message being composed for one [`Slack`] client.
///
/// Created by [`Slack::new_message`]. Setters consume and return the draft
/// so calls chain; [`send`](Self::send) borrows it, so the same draft can be
/// sent again and every call re-encodes its current state.
#[derive(Debug)]
pub struct Message<'a, H, L> {
    slack: &'a Slack<H, L>,
    subject: String,
    color: String,
    text: String,
    timestamp: Option<i64>,
    fields: Vec<Field>,
}

// Manual impl: cloning a draft never needs to clone the client it borrows.
impl<H, L> Clone for Message<'_, H, L> {
    fn clone(&self) -> Self {
        Self {
            slack: self.slack,
            subject: self.subject.clone(),
            color: self.color.clone(),
            text: self.text.clone(),
            timestamp: self.timestamp,
            fields: self.fields.clone(),
        }
    }
}

impl<'a, H, L> Message<'a, H, L> {
    pub(crate) const fn new(slack: &'a Slack<H, L>) -> Self {
        Self {
            slack,
            subject: String::new(),
            color: String::new(),
            text: String::new(),
            timestamp: None,
            fields: Vec::new(),
        }
    }

    /// Sets the attachment color.
    ///
    /// Hex colors such as `#439FE0` are kept; any other value is replaced by
    /// `warning`. See [`normalize_color`].
    #[must_use]
    pub fn with_color(mut self, color: &str) -> Self {
        self.color = normalize_color(color);
        self
    }

    /// Sets the subject, used as both attachment title and fallback text.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the attachment body.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Replaces all fields. Order is preserved on the wire.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Records the message time as Unix seconds.
    #[must_use]
    pub fn with_timestamp(mut self, time: SystemTime) -> Self {
        self.timestamp = Some(unix_seconds(time));
        self
    }

    /// Fills whatever is still unset: `warning` color, [`DEFAULT_TEXT`],
    /// [`DEFAULT_SUBJECT`] and the clock's current time.
    ///
    /// Opt-in only; [`send`](Self::send) never applies defaults itself.
    #[must_use]
    pub fn with_defaults(mut self, clock: &impl Clock) -> Self {
        if self.color.is_empty() {
            self.color = WARNING.to_string();
        }
        if self.text.is_empty() {
            self.text = DEFAULT_TEXT.to_string();
        }
        if self.subject.is_empty() {
            self.subject = DEFAULT_SUBJECT.to_string();
        }
        if self.timestamp.is_none() {
            self.timestamp = Some(unix_seconds(clock.now()));
        }
        self
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Unix seconds set by [`with_timestamp`](Self::with_timestamp) or
    /// [`with_defaults`](Self::with_defaults). Not transmitted.
    #[must_use]
    pub const fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    /// Assembles the wire payload from this draft and its client.
    #[must_use]
    pub fn payload(&self) -> Payload {
        let attachment = Attachment {
            fallback: self.subject.clone(),
            text: self.text.clone(),
            color: self.color.clone(),
            author_link: self.slack.author_link().to_string(),
            author_name: self.slack.author_name().to_string(),
            title: self.subject.clone(),
            fields: self.fields.clone(),
            ..Attachment::default()
        };

        Payload {
            username: non_empty(self.slack.app_name()),
            icon_emoji: non_empty(self.slack.emoji()),
            attachments: vec![attachment],
        }
    }

    /// Encodes the wire payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Serialize`] if encoding fails.
    pub fn to_json(&self) -> Result<Vec<u8>, SendError> {
        Ok(self.payload().to_json()?)
    }

    fn build_request(&self, body: Vec<u8>) -> Result<HttpRequest, HttpError> {
        let webhook_url = self.slack.webhook_url();
        let url = url::Url::parse(webhook_url)
            .map_err(|e| HttpError::InvalidUrl(format!("'{webhook_url}': {e}")))?;

        Ok(HttpRequest::post(url)
            .with_header(
                CONTENT_TYPE,
                HeaderValue::from_static(defaults::CONTENT_TYPE),
            )
            .with_body(body)
            .with_timeout(self.slack.timeout()))
    }
}

impl<H: HttpClient, L: PayloadLogger> Message<'_, H, L> {
    /// Posts the message to the webhook.
    ///
    /// One request per call, no retries.
    ///
    /// # Errors
    ///
    /// - [`SendError::Serialize`] if the payload cannot be encoded
    /// - [`SendError::Http`] if the URL is unusable or the transport fails;
    ///   in the URL case nothing is sent
    /// - [`SendError::Rejected`] if the status is outside `200..=299`
    pub async fn send(&self) -> Result<(), SendError> {
        let body = self.to_json()?;
        self.slack
            .logger()
            .log_payload(self.slack.webhook_url(), &body);

        let request = self.build_request(body)?;
        let response = self.slack.client().request(request).await?;

        if response.is_success() {
            tracing::debug!(status = %response.status, "Slack accepted message");
            return Ok(());
        }

        let body = response.body_text().into_owned();
        tracing::warn!(status = %response.status, body = %body, "Slack rejected message");
        Err(SendError::Rejected {
            status: response.status,
            body,
        })
    }

    /// Posts the message, blocking the calling thread until the round trip
    /// completes or times out.
    ///
    /// Drives [`send`](Self::send) on a private single-threaded runtime.
    /// When the caller is already inside a tokio runtime, that private
    /// runtime runs on a scoped helper thread, since a runtime cannot be
    /// nested in the calling one.
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send), plus [`SendError::Runtime`] if the
    /// runtime cannot be started.
    pub fn send_blocking(&self) -> Result<(), SendError> {
        if tokio::runtime::Handle::try_current().is_err() {
            return self.block_on_send();
        }

        std::thread::scope(|scope| {
            scope
                .spawn(|| self.block_on_send())
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
        })
    }

    fn block_on_send(&self) -> Result<(), SendError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(SendError::Runtime)?;

        runtime.block_on(self.send())
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
