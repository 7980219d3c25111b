//! Wire representation of an incoming-webhook message.
//!
//! Every optional key is omitted when empty, so the encoded JSON only
//! carries what the message actually sets.

use serde::Serialize;

/// Semantic color: green bar.
pub const GOOD: &str = "good";

/// Semantic color: yellow bar. Also the fallback for unrecognised input.
pub const WARNING: &str = "warning";

/// Semantic color: red bar.
pub const DANGER: &str = "danger";

/// Normalises a requested attachment color.
///
/// A 7-byte string starting with `#` (e.g. `#439FE0`) is kept verbatim.
/// Anything else, semantic names included, becomes [`WARNING`]. The
/// characters after `#` are not checked.
///
/// ```
/// use slack_webhook::slack::normalize_color;
///
/// assert_eq!(normalize_color("#439FE0"), "#439FE0");
/// assert_eq!(normalize_color("danger"), "warning");
/// ```
#[must_use]
pub fn normalize_color(value: &str) -> String {
    if value.len() == 7 && value.starts_with('#') {
        value.to_string()
    } else {
        WARNING.to_string()
    }
}

/// A labelled key/value pair rendered inside an attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Field label
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Field content
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// Render side by side with other short fields
    #[serde(skip_serializing_if = "is_false")]
    pub short: bool,
}

impl Field {
    /// Creates a full-width field.
    #[must_use]
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: false,
        }
    }

    /// Creates a compact field.
    #[must_use]
    pub fn short(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            short: true,
            ..Self::new(title, value)
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(flag: &bool) -> bool {
    !*flag
}

/// The richly formatted part of a message.
///
/// Only the first block of fields is populated by
/// [`Message`](super::Message); the rest exist so callers assembling a
/// [`Payload`] by hand can use them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Plain-text summary for clients that cannot render attachments
    pub fallback: String,
    pub text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub author_link: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub author_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub thumb_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub footer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub footer_icon: String,
    /// Unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pretext: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub author_icon: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title_link: String,
}

/// Body POSTed to the webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Payload {
    /// Display name overriding the webhook's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Emoji shortcode used as the avatar, e.g. `:ghost:`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    pub attachments: Vec<Attachment>,
}

impl Payload {
    /// Encodes the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the payload cannot be encoded.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
