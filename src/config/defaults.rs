//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default end-to-end timeout for a webhook request, in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Content type of every webhook request body.
pub const CONTENT_TYPE: &str = "application/json";

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
