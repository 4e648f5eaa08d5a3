//! Workspace placeholder crate.
//!
//! Exposes feature flags that map to the individual workspace crates so host
//! applications can depend on `unwind-bridge-workspace` alone:
//!
//! - `service` (default): the host-facing guard surface from `core-service`,
//!   including the C ABI exports
//! - `runtime`: logging and panic-reporting setup from `core-runtime`

#[cfg(feature = "service")]
pub use core_service::*;

#[cfg(feature = "runtime")]
pub use core_runtime;
