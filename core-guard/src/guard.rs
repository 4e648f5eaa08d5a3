//! The guarded call.

use std::panic::{self, AssertUnwindSafe};

use crate::depth::DepthGuard;
use crate::extract;
use crate::outcome::Outcome;

/// Run `work` once, converting an unwind into [`Outcome::Failure`].
///
/// `work` executes synchronously on the calling thread and is dropped before
/// `guard` returns. If it panics, the unwind stops at this frame: the payload
/// is inspected, copied into a [`GuardError`](crate::GuardError) and dropped.
/// Nothing is re-raised and nothing is logged.
///
/// The work is treated as unwind safe. On failure any state it was mutating
/// may be left half-updated; the call is abandoned as a whole and the caller
/// decides what that state is worth.
///
/// Guards nest: a panic is consumed by the nearest enclosing `guard` on the
/// same stack.
///
/// # Example
///
/// ```
/// use core_guard::{guard, Outcome};
///
/// let outcome = guard(|| {
///     let parsed: u32 = "not a number".parse().unwrap();
///     println!("{parsed}");
/// });
///
/// let error = outcome.into_error().unwrap();
/// assert!(error.reason.contains("ParseIntError"));
/// ```
#[inline]
pub fn guard<F>(work: F) -> Outcome
where
    F: FnOnce(),
{
    let _depth = DepthGuard::enter();
    match panic::catch_unwind(AssertUnwindSafe(work)) {
        Ok(()) => Outcome::Success,
        Err(payload) => {
            let error = extract::error_from_payload(&*payload);
            extract::dispose(payload);
            Outcome::Failure(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::guard_depth;
    use crate::error::{GuardError, PANIC_EXCEPTION_NAME};
    use bridge_traits::NativeException;
    use std::cell::Cell;

    #[test]
    fn test_noop_is_success() {
        assert_eq!(guard(|| {}), Outcome::Success);
    }

    #[test]
    fn test_side_effects_are_kept() {
        let counter = Cell::new(0);
        let outcome = guard(|| counter.set(counter.get() + 1));
        assert!(outcome.is_success());
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_work_runs_exactly_once_on_failure() {
        let calls = Cell::new(0);
        let outcome = guard(|| {
            calls.set(calls.get() + 1);
            panic!("after side effect");
        });
        assert_eq!(calls.get(), 1);
        assert_eq!(outcome.error().map(|e| e.reason.as_str()), Some("after side effect"));
    }

    #[test]
    fn test_formatted_panic() {
        let id = 7;
        let outcome = guard(|| panic!("request {} failed", id));
        let error = outcome.into_error().unwrap();
        assert_eq!(error.name, PANIC_EXCEPTION_NAME);
        assert_eq!(error.reason, "request 7 failed");
    }

    #[test]
    fn test_native_exception_context() {
        let outcome = guard(|| {
            NativeException::new("AppsFlyerException", "dev key missing")
                .with_info("sdk_version", "6.12")
                .raise()
        });

        let error = outcome.into_error().unwrap();
        assert_eq!(error.name, "AppsFlyerException");
        assert_eq!(error.reason, "dev key missing");
        assert_eq!(error.context.len(), 1);
    }

    #[test]
    fn test_raised_guard_error_round_trips() {
        let inner = GuardError::new("Bridge", "forwarded").with_context("attempt", 3);
        let raised = inner.clone();
        let outcome = guard(move || std::panic::panic_any(raised));
        assert_eq!(outcome, Outcome::Failure(inner));
    }

    #[test]
    fn test_nested_guard_consumes_inner_failure() {
        let mut inner_outcome = None;
        let outer = guard(|| {
            assert_eq!(guard_depth(), 1);
            inner_outcome = Some(guard(|| {
                assert_eq!(guard_depth(), 2);
                panic!("inner");
            }));
        });

        assert!(outer.is_success());
        let inner = inner_outcome.unwrap();
        assert_eq!(inner.error().map(|e| e.reason.as_str()), Some("inner"));
        assert_eq!(guard_depth(), 0);
    }

    #[test]
    fn test_depth_restored_after_failure() {
        let _ = guard(|| panic!("boom"));
        assert_eq!(guard_depth(), 0);
        assert!(guard(|| {}).is_success());
    }
}
