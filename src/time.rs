//! Time abstraction for testability.
//!
//! [`Message::with_defaults`](crate::slack::Message::with_defaults) stamps
//! unset timestamps through a [`Clock`], so tests can pin the time.

use std::time::SystemTime;

/// Source of the current time.
///
/// # Example
///
/// ```
/// use slack_webhook::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(now >= std::time::SystemTime::UNIX_EPOCH);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// Clock backed by [`SystemTime::now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Converts a point in time to whole Unix seconds.
///
/// Times before the epoch yield negative values; out-of-range values
/// saturate.
#[must_use]
pub fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        // Floor, so a fraction of a second before the epoch is -1.
        Err(before) => {
            let before = before.duration();
            let whole = before.as_secs() + u64::from(before.subsec_nanos() > 0);
            i64::try_from(whole).map_or(i64::MIN, |s| -s)
        }
    }
}
