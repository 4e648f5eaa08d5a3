//! Per-thread count of active guarded regions.
//!
//! Only the runtime panic hook reads this, to tell a panic that is about to be
//! converted apart from one that will reach the thread boundary.

use std::cell::Cell;

thread_local! {
    static GUARD_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Number of guarded regions currently open on this thread.
pub fn guard_depth() -> usize {
    GUARD_DEPTH.try_with(Cell::get).unwrap_or(0)
}

/// Whether a panic raised here would be intercepted by a guard.
pub fn is_guarded() -> bool {
    guard_depth() > 0
}

/// Marks the current thread as inside a guarded region until dropped.
pub(crate) struct DepthGuard {
    _private: (),
}

impl DepthGuard {
    pub(crate) fn enter() -> Self {
        let _ = GUARD_DEPTH.try_with(|depth| depth.set(depth.get() + 1));
        Self { _private: () }
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        let _ = GUARD_DEPTH.try_with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}
