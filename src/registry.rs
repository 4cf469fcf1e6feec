use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::{IntervalGate, OnceGate};

/// Lazily-initialized gate storage for call sites identified by name.
///
/// A `static` gate covers call sites known at compile time. When a call site
/// is identified by a runtime value instead (a job name, a peer address), the
/// registry keeps one gate per name, created on first use and held for the
/// process lifetime.
///
/// # Semantics
///
/// **Sticky intervals:**
/// - The first call for a name creates the gate and fixes its interval
/// - Later calls for the same name ignore the interval argument
/// - Rationale: one state per call site; racing callers that disagree on the
///   interval must not observe a reconfigured gate
///
/// **Independence:**
/// - Distinct names never share state; acquiring one gate has no effect on
///   any other
///
/// # Examples
///
/// ```rust
/// use loggate::GateRegistry;
///
/// let registry = GateRegistry::new();
///
/// let gate = registry.every_ms("sync.retry", 5_000);
/// if gate.try_acquire() {
///     tracing::warn!("sync still retrying");
/// }
///
/// if registry.once("sync.first_failure").try_acquire() {
///     tracing::error!("sync failed for the first time");
/// }
/// ```
pub struct GateRegistry {
    every: DashMap<String, Arc<IntervalGate>>,
    once: DashMap<String, Arc<OnceGate>>,
}

impl GateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            every: DashMap::new(),
            once: DashMap::new(),
        }
    }

    /// Process-wide shared registry.
    pub fn global() -> &'static GateRegistry {
        static GLOBAL: OnceLock<GateRegistry> = OnceLock::new();
        GLOBAL.get_or_init(GateRegistry::new)
    }

    /// Interval gate for `name`, created with `interval_ms` on first use.
    ///
    /// The interval is sticky: only the first call for a given name sets it.
    pub fn every_ms(&self, name: &str, interval_ms: i64) -> Arc<IntervalGate> {
        if let Some(gate) = self.every.get(name) {
            return Arc::clone(gate.value());
        }

        Arc::clone(
            self.every
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(IntervalGate::new(interval_ms)))
                .value(),
        )
    }

    /// Once gate for `name`, created on first use.
    pub fn once(&self, name: &str) -> Arc<OnceGate> {
        if let Some(gate) = self.once.get(name) {
            return Arc::clone(gate.value());
        }

        Arc::clone(
            self.once
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(OnceGate::new()))
                .value(),
        )
    }
}

impl Default for GateRegistry {
    fn default() -> Self {
        Self::new()
    }
}
