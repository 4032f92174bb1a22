//! In-flight flags for the preview and submit calls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag set while an operation is in flight.
///
/// Clones observe the same flag, so a host can watch it while the wizard is
/// awaiting the host's own callback.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    /// A cleared flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an operation is in flight.
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Set the flag until the returned guard drops.
    ///
    /// Callers hold the wizard mutably for the whole operation, so at most one
    /// guard per flag is alive.
    pub(crate) fn hold(&self) -> BusyGuard {
        self.0.store(true, Ordering::Release);
        BusyGuard(Arc::clone(&self.0))
    }
}

/// Clears its flag on drop, whether the operation succeeded, failed or was dropped.
#[derive(Debug)]
pub(crate) struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_clears_flag_on_drop() {
        let flag = BusyFlag::new();
        let observer = flag.clone();

        let guard = flag.hold();
        assert!(observer.is_set());

        drop(guard);
        assert!(!observer.is_set());
    }
}
