use std::{
    sync::atomic::{AtomicI64, Ordering},
    time::Duration,
};

use crate::clock::unix_millis;

/// Per-call-site throttle admitting at most one pass per millisecond window.
///
/// The gate holds a single shared timestamp, `last_fired` (milliseconds since
/// the Unix epoch, initially 0). A call passes when the configured interval
/// has elapsed since `last_fired` *and* this thread wins the atomic update of
/// `last_fired` to now.
///
/// # Algorithm
///
/// 1. **Escape hatch:** a non-positive interval means "throttling disabled";
///    every call passes without touching shared state.
/// 2. **Window check:** acquire-load `last_fired`; if `now − last_fired` is
///    inside the interval, return `false` without attempting an update.
/// 3. **Commit:** a single compare-and-swap of `last_fired` from the value
///    just read to `now`. Success makes this thread the window's unique
///    winner (`true`); failure means another thread raced ahead (`false`).
///    There is no retry loop — losing the race is treated the same as being
///    inside the window.
///
/// # Thread Safety
///
/// - Safe for concurrent use from any number of threads without external
///   synchronization
/// - Non-blocking and bounded-time: at most one atomic load plus at most one
///   compare-and-swap per call; no locks, no allocation, no spinning
/// - Exactly one thread wins per successful update
///
/// # Semantics & Limitations
///
/// **Best-effort rate, not exact:**
/// - Under a race at a window boundary, a losing thread's failed attempt can
///   overlap a fresh window start, so two successful windows may occasionally
///   be separated by slightly less than the interval
/// - This is expected behavior, not a bug
///
/// **Wall-clock time:**
/// - `try_acquire` reads the adjustable system clock, so an NTP step can
///   stretch or shrink one window
/// - Callers with their own clock discipline can supply `now` explicitly via
///   [`try_acquire_at`](Self::try_acquire_at)
///
/// **One gate per call site:**
/// - A gate is meant to be created once (typically as a `static`) and live
///   for the process; constructing a fresh gate per call, or sharing one gate
///   across unrelated call sites, silently degrades the throttling semantics
/// - The interval is fixed at construction; there is no reconfiguration
///
/// # Examples
///
/// ```rust
/// use loggate::IntervalGate;
///
/// // One gate, one call site, at most one pass every 10 seconds.
/// static SLOW_PATH: IntervalGate = IntervalGate::new(10_000);
///
/// fn on_slow_request(elapsed_ms: u64) {
///     if SLOW_PATH.try_acquire() {
///         tracing::warn!(elapsed_ms, "request exceeded latency budget");
///     }
/// }
/// ```
///
/// Deterministic use with an explicit clock:
///
/// ```rust
/// use loggate::IntervalGate;
///
/// let gate = IntervalGate::new(1_000);
/// assert!(gate.try_acquire_at(5_000));
/// assert!(!gate.try_acquire_at(5_500)); // inside the window
/// assert!(gate.try_acquire_at(6_000)); // window elapsed
/// ```
pub struct IntervalGate {
    interval_ms: i64,
    last_fired: AtomicI64,
}

impl IntervalGate {
    /// Create a gate that admits at most one pass per `interval_ms`.
    ///
    /// `const`, so the gate can be a `static` bound to one call site. A
    /// non-positive interval disables throttling entirely (every call
    /// passes); this is an accepted configuration value, not an error.
    pub const fn new(interval_ms: i64) -> Self {
        Self {
            interval_ms,
            last_fired: AtomicI64::new(0),
        }
    }

    /// Create a gate from a [`Duration`], saturating to `i64::MAX` ms.
    pub fn from_duration(interval: Duration) -> Self {
        Self::new(i64::try_from(interval.as_millis()).unwrap_or(i64::MAX))
    }

    /// The configured window, in milliseconds.
    pub fn interval_ms(&self) -> i64 {
        self.interval_ms
    }

    /// Attempt to pass the gate at the current wall-clock time.
    ///
    /// Returns `true` when this call is the window's unique winner and the
    /// caller should proceed to produce its log record; `false` when the
    /// window has not elapsed or another thread won the race. Never blocks.
    pub fn try_acquire(&self) -> bool {
        self.try_acquire_at(unix_millis())
    }

    /// Attempt to pass the gate at an explicit timestamp.
    ///
    /// `now_ms` is milliseconds since the Unix epoch. Total over all inputs:
    /// a `now_ms` earlier than the last successful pass simply reads as
    /// inside the window and is suppressed.
    pub fn try_acquire_at(&self, now_ms: i64) -> bool {
        if self.interval_ms <= 0 {
            return true;
        }

        let prev = self.last_fired.load(Ordering::Acquire);
        if now_ms.saturating_sub(prev) < self.interval_ms {
            return false;
        }

        self.last_fired
            .compare_exchange(prev, now_ms, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
    } // end method try_acquire_at
} // end of impl
