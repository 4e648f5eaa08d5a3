//! Guarding futures.
//!
//! Every poll of the wrapped future runs under [`core_guard::guard`], so a
//! panic raised while polling becomes an [`Outcome::Failure`] just as it would
//! for synchronous work. Dropping the finished future is guarded as well. Panics
//! inside tasks the future spawns happen on other stacks and are not covered.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use core_guard::{guard, GuardError, Outcome};

/// Future returned by [`guard_future`].
#[must_use = "futures do nothing unless polled"]
pub struct GuardedFuture<F> {
    future: Option<Pin<Box<F>>>,
}

/// Wrap `future` so that it resolves to an [`Outcome`] instead of unwinding.
///
/// ```
/// use core_service::guard_future;
///
/// # tokio_test_block_on(async {
/// let outcome = guard_future(async { panic!("token refresh failed"); }).await;
/// assert_eq!(outcome.into_error().unwrap().reason, "token refresh failed");
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub fn guard_future<F>(future: F) -> GuardedFuture<F>
where
    F: Future<Output = ()>,
{
    GuardedFuture {
        future: Some(Box::pin(future)),
    }
}

impl<F> Future for GuardedFuture<F>
where
    F: Future<Output = ()>,
{
    type Output = Outcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Outcome> {
        let Some(future) = self.future.as_mut() else {
            return Poll::Ready(Outcome::Failure(GuardError::new(
                "InvalidState",
                "guarded future polled after completion",
            )));
        };

        let mut ready = false;
        let outcome = guard(|| ready = future.as_mut().poll(cx).is_ready());

        if outcome.is_success() && !ready {
            return Poll::Pending;
        }

        // The inner future is finished either way; its destructor may panic too.
        // A poll failure takes precedence over a drop failure.
        let finished = self.future.take();
        let dropped = guard(move || drop(finished));

        match outcome {
            Outcome::Success => Poll::Ready(dropped),
            failure => Poll::Ready(failure),
        }
    }
}
