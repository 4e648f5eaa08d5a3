//! # Core Runtime Module
//!
//! Ambient runtime infrastructure around the unwind bridge:
//! - Logging and tracing infrastructure
//! - Configuration management
//! - Guard-aware panic reporting
//!
//! ## Overview
//!
//! Nothing in this crate is needed to call [`core_guard::guard`]. Hosts call
//! [`init_runtime`] once at startup to route core logs to their own logging
//! pipeline and to decide what happens to the panic messages of failures the
//! guard converts.

pub mod config;
pub mod error;
pub mod logging;
pub mod panic_hook;

pub use config::{RuntimeConfig, RuntimeConfigBuilder};
pub use error::{Error, Result};
pub use panic_hook::{install_panic_hook, installed_reporting, PanicReporting};

/// Install the panic hook and initialize logging as described by `config`.
///
/// Call once per process. A hook left installed by an earlier call that
/// failed while initializing logging is reused when the reporting mode
/// matches.
///
/// # Errors
///
/// Returns an error if logging was already initialized, or if a panic hook
/// with a different reporting mode was already installed.
pub fn init_runtime(config: RuntimeConfig) -> Result<()> {
    if installed_reporting() != Some(config.panic_reporting) {
        install_panic_hook(config.panic_reporting)?;
    }
    logging::init_logging(config.logging)?;
    tracing::debug!(reporting = ?config.panic_reporting, "Runtime initialized");
    Ok(())
}
