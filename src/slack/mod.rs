//! Slack incoming-webhook client.
//!
//! This module provides:
//! - The client holding webhook URL and presentation defaults ([`Slack`])
//! - The fluent per-message builder ([`Message`])
//! - The wire payload ([`Payload`], [`Attachment`], [`Field`])
//! - The transport abstraction ([`HttpClient`]) and its reqwest
//!   implementation ([`ReqwestClient`])
//! - The injectable payload logger ([`PayloadLogger`])

mod client;
mod error;
mod http;
mod logger;
mod message;
mod payload;
mod service;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod http_tests;
#[cfg(test)]
mod service_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, SendError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use logger::{NoopLogger, PayloadLogger, TracingLogger};
pub use message::{DEFAULT_SUBJECT, DEFAULT_TEXT, Message};
pub use payload::{Attachment, DANGER, Field, GOOD, Payload, WARNING, normalize_color};
pub use service::Slack;
