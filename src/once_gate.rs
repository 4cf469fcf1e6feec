use std::sync::atomic::{AtomicBool, Ordering};

/// Per-call-site latch admitting exactly one pass for the process lifetime.
///
/// State is a single `AtomicBool`, `fired`, initially `false`. The transition
/// `false → true` happens once and is never reset.
///
/// The fast path is a plain relaxed load: once the gate has fired, every
/// subsequent call returns `false` at the cost of a single read with no
/// locked read-modify-write. Only while `fired` still reads `false` does the
/// call fall through to an atomic swap, whose previous value decides the
/// unique winner. The relaxed fast path trades a small, bounded visibility
/// delay for zero synchronization cost on the steady-state suppressed path.
///
/// # Examples
///
/// ```rust
/// use loggate::OnceGate;
///
/// static DEPRECATION: OnceGate = OnceGate::new();
///
/// fn on_legacy_call() {
///     if DEPRECATION.try_acquire() {
///         tracing::warn!("legacy endpoint called; it will be removed");
///     }
/// }
/// ```
pub struct OnceGate {
    fired: AtomicBool,
}

impl OnceGate {
    /// Create an unarmed gate. `const`, so the gate can be a `static`.
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    /// Attempt to pass the gate.
    ///
    /// Returns `true` for exactly one call across all threads for the life
    /// of the process, and `false` for every other call. Never blocks: at
    /// most one atomic load plus at most one atomic swap.
    pub fn try_acquire(&self) -> bool {
        if self.fired.load(Ordering::Relaxed) {
            return false;
        }

        !self.fired.swap(true, Ordering::AcqRel)
    }

    /// Whether the gate has already fired (relaxed observer).
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Relaxed)
    }
}

impl Default for OnceGate {
    fn default() -> Self {
        Self::new()
    }
}
