//! Wall-clock time source for interval gating.

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch on the wall clock.
///
/// This is the time source behind [`IntervalGate::try_acquire`](crate::IntervalGate::try_acquire).
/// It is deliberately the adjustable system clock rather than a monotonic
/// one: interval gating follows whatever the host considers "now", including
/// NTP adjustments. A clock set before the epoch maps to a negative value
/// rather than an error.
pub fn unix_millis() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(since_epoch) => i64::try_from(since_epoch.as_millis()).unwrap_or(i64::MAX),
        Err(before_epoch) => {
            let ms = i64::try_from(before_epoch.duration().as_millis()).unwrap_or(i64::MAX);
            ms.wrapping_neg()
        }
    }
}
