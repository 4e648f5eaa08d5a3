//! # Panic Reporting
//!
//! The process panic hook runs before any unwinding starts, so it fires even
//! for panics that a guard is about to convert. With the standard hook every
//! converted failure still prints `thread '...' panicked at ...` to stderr,
//! which on mobile hosts ends up as noise in the device log.
//!
//! [`install_panic_hook`] replaces the hook with one that checks whether the
//! panicking thread is inside a guarded region. Unguarded panics always go to
//! the previous hook unchanged.

use std::any::Any;
use std::panic::{self, Location};
use std::sync::OnceLock;

use core_guard::error::UNKNOWN_PANIC_REASON;

use crate::error::{Error, Result};
use crate::logging::strip_path;

/// How panics raised inside a guarded region are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanicReporting {
    /// Leave the process panic hook untouched
    #[default]
    Default,
    /// Report nothing for guarded panics
    Quiet,
    /// Report guarded panics as `debug` tracing events
    Trace,
}

static INSTALLED: OnceLock<PanicReporting> = OnceLock::new();

/// Install the guard-aware panic hook for the whole process.
///
/// The previous hook is kept and still receives every unguarded panic.
/// [`PanicReporting::Default`] installs nothing.
///
/// # Errors
///
/// Returns [`Error::PanicHook`] if a hook was already installed by this
/// function.
pub fn install_panic_hook(reporting: PanicReporting) -> Result<()> {
    if reporting == PanicReporting::Default {
        return Ok(());
    }

    if let Err(existing) = INSTALLED.set(reporting) {
        return Err(Error::PanicHook(format!(
            "Panic hook already installed with {:?}",
            existing
        )));
    }

    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if !core_guard::is_guarded() {
            previous(info);
            return;
        }

        if reporting == PanicReporting::Trace {
            report_guarded_panic(info.payload(), info.location());
        }
    }));

    Ok(())
}

/// Reporting mode installed by [`install_panic_hook`], if any.
pub fn installed_reporting() -> Option<PanicReporting> {
    INSTALLED.get().copied()
}

fn report_guarded_panic(payload: &(dyn Any + Send), location: Option<&Location<'_>>) {
    let message = core_guard::payload_message(payload).unwrap_or(UNKNOWN_PANIC_REASON);
    let location = location
        .map(|l| format!("{}:{}:{}", strip_path(l.file()), l.line(), l.column()))
        .unwrap_or_else(|| "<unknown>".to_string());

    tracing::debug!(
        location = %location,
        guard_depth = core_guard::guard_depth(),
        "Guarded panic: {}",
        message
    );
}
