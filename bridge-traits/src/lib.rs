//! # Host Bridge Traits
//!
//! Contracts shared between the unwind bridge, the host application, and the
//! third-party code running under it.
//!
//! ## Overview
//!
//! - [`NativeException`](exception::NativeException) - structured exception
//!   that third-party code raises through the panic mechanism, carrying a
//!   name, a reason, and primitive user info
//! - [`ContextValue`](exception::ContextValue) - primitive value stored in
//!   user info and in converted errors
//! - [`LoggerSink`](sink::LoggerSink) - forwards structured logs to host
//!   logging (OSLog, Logcat, console)
//!
//! ## Error Handling
//!
//! Sink implementations report failures through
//! [`BridgeError`](error::BridgeError). Converted guard failures use their own
//! plain-data error type in `core-guard`.
//!
//! ## Thread Safety
//!
//! `LoggerSink` requires `Send + Sync`; `NativeException` is `Send` so it can
//! travel as a panic payload.

pub mod error;
pub mod exception;
pub mod sink;

pub use error::BridgeError;

pub use exception::{raise, ContextValue, NativeException};
pub use sink::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
