//! Host-facing service layer.
//!
//! This crate is what a host application links against. It exposes the
//! guard through the calling conventions hosts actually use:
//!
//! - [`ffi`] - C ABI with an error output parameter, for Objective-C/Swift,
//!   C and JNI glue
//! - [`try_call`] - `Result` convention for Rust callers
//! - [`guard_or_reject`] - code/message rejections for promise-based hosts
//! - [`guard_future`] - the same guard applied to every poll of a future
//!
//! All of them funnel into the single [`core_guard::guard`] primitive.
//! [`bootstrap`] applies the optional runtime configuration (logging, panic
//! reporting) once at startup.

pub mod async_guard;
pub mod error;
pub mod ffi;
pub mod rejection;

pub use async_guard::{guard_future, GuardedFuture};
pub use core_guard::{guard, GuardError, Outcome};
pub use core_runtime::RuntimeConfig;
pub use error::{Result, ServiceError};
pub use rejection::{guard_or_reject, Rejection};

/// Initialize logging and panic reporting for the host process.
///
/// ```no_run
/// use core_runtime::PanicReporting;
/// use core_service::{bootstrap, RuntimeConfig};
///
/// let config = RuntimeConfig::builder()
///     .panic_reporting(PanicReporting::Quiet)
///     .build()?;
/// bootstrap(config)?;
/// # Ok::<(), core_service::ServiceError>(())
/// ```
pub fn bootstrap(config: RuntimeConfig) -> Result<()> {
    core_runtime::init_runtime(config)?;
    Ok(())
}

/// Run `work` under the guard, returning the converted failure as an error.
pub fn try_call<F>(work: F) -> Result<()>
where
    F: FnOnce(),
{
    guard(work).into_result()?;
    Ok(())
}
