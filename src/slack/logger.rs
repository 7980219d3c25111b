//! Observation hook for outgoing payloads.

/// Receives every encoded payload right before it is sent.
///
/// The default [`TracingLogger`] writes it to the `tracing` facade; swap it
/// through [`Slack::with_logger`](super::Slack::with_logger) to capture or
/// silence payloads.
pub trait PayloadLogger: Send + Sync {
    /// Called with the exact bytes about to be POSTed to `webhook_url`.
    fn log_payload(&self, webhook_url: &str, payload: &[u8]);
}

/// Logs payloads at `debug` level through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl PayloadLogger for TracingLogger {
    fn log_payload(&self, webhook_url: &str, payload: &[u8]) {
        tracing::debug!(
            url = webhook_url,
            payload = %String::from_utf8_lossy(payload),
            "Sending Slack payload"
        );
    }
}

/// Discards payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl PayloadLogger for NoopLogger {
    fn log_payload(&self, _webhook_url: &str, _payload: &[u8]) {}
}
