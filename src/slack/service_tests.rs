//! Tests for the `Slack` client holder.

use super::{NoopLogger, PayloadLogger, ReqwestClient, Slack, TracingLogger};
use std::time::Duration;

fn test_slack() -> Slack {
    Slack::new(
        "https://hooks.slack.com/services/T0000/B0000/XXXXXXXX",
        "http://monitor/page/",
        "test",
        "app name",
        ":ghost:",
    )
}

#[test]
fn new_keeps_arguments_verbatim() {
    let slack = test_slack();

    assert_eq!(
        slack.webhook_url(),
        "https://hooks.slack.com/services/T0000/B0000/XXXXXXXX"
    );
    assert_eq!(slack.author_link(), "http://monitor/page/");
    assert_eq!(slack.author_name(), "test");
    assert_eq!(slack.app_name(), "app name");
    assert_eq!(slack.emoji(), ":ghost:");
}

#[test]
fn new_uses_thirty_second_timeout() {
    assert_eq!(test_slack().timeout(), Duration::from_secs(30));
}

#[test]
fn new_accepts_empty_values() {
    let slack = Slack::new("", "", "", "", "");

    assert_eq!(slack.webhook_url(), "");
    assert_eq!(slack.app_name(), "");
}

#[test]
fn with_timeout_overrides_default() {
    let slack = test_slack().with_timeout(Duration::from_secs(3));

    assert_eq!(slack.timeout(), Duration::from_secs(3));
}

#[test]
fn swapping_collaborators_keeps_configuration() {
    let slack = test_slack()
        .with_client(ReqwestClient::default())
        .with_logger(NoopLogger)
        .with_timeout(Duration::from_secs(9));

    assert_eq!(slack.author_name(), "test");
    assert_eq!(slack.emoji(), ":ghost:");
    assert_eq!(slack.timeout(), Duration::from_secs(9));
}

#[test]
fn messages_share_one_client() {
    let slack = test_slack();
    let first = slack.new_message().with_subject("first");
    let second = slack.new_message().with_subject("second");

    assert_eq!(first.payload().attachments[0].author_name, "test");
    assert_eq!(second.payload().attachments[0].author_name, "test");
    assert_ne!(first.subject(), second.subject());
}

#[test]
fn client_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Slack>();
    assert_send_sync::<Slack<ReqwestClient, NoopLogger>>();
}

#[test]
fn loggers_accept_any_payload() {
    TracingLogger.log_payload("https://example.com", br#"{"attachments":[]}"#);
    NoopLogger.log_payload("https://example.com", &[0xFF]);
}
