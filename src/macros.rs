//! Call-site macros that bind a hidden `static` gate per textual invocation
//! and forward the record to [`tracing`].
//!
//! The gates themselves never call into the logging facility; these macros
//! are the thin layer that does, so gating stays decoupled from message
//! formatting and sink selection.

/// Emit a [`tracing`] event at most once per `interval_ms` per call site.
///
/// Each textual invocation owns its own [`IntervalGate`](crate::IntervalGate)
/// in a hidden `static`, so two invocations in different places throttle
/// independently. A non-positive interval emits on every call.
///
/// ```rust
/// use tracing::Level;
///
/// for _ in 0..1000 {
///     loggate::log_every_ms!(Level::WARN, 10_000, "queue is still backed up");
/// }
/// ```
#[macro_export]
macro_rules! log_every_ms {
    ($lvl:expr, $interval_ms:expr, $($arg:tt)+) => {{
        static GATE: $crate::IntervalGate = $crate::IntervalGate::new($interval_ms);
        if GATE.try_acquire() {
            $crate::__private::tracing::event!($lvl, $($arg)+);
        }
    }};
}

/// Emit a [`tracing`] event exactly once per call site per process.
///
/// Each textual invocation owns its own [`OnceGate`](crate::OnceGate) in a
/// hidden `static`.
///
/// ```rust
/// use tracing::Level;
///
/// loggate::log_once!(Level::INFO, "subsystem initialized");
/// ```
#[macro_export]
macro_rules! log_once {
    ($lvl:expr, $($arg:tt)+) => {{
        static GATE: $crate::OnceGate = $crate::OnceGate::new();
        if GATE.try_acquire() {
            $crate::__private::tracing::event!($lvl, $($arg)+);
        }
    }};
}
