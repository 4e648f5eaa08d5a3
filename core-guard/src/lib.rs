//! # Core Guard
//!
//! Stops a panic at a known frame and turns it into a plain error value.
//!
//! ## Overview
//!
//! Hosts that call into the core through `extern "C"` functions, JNI, or a
//! JavaScript engine cannot represent a Rust unwind; letting one cross the
//! boundary is undefined behaviour or an abort. Third-party crates invoked by
//! the core may still panic. [`guard`] is placed at the last Rust frame before
//! the boundary: it runs a unit of work, and if that work unwinds it returns
//! [`Outcome::Failure`] carrying a [`GuardError`] instead.
//!
//! ```
//! use bridge_traits::NativeException;
//! use core_guard::{guard, Outcome};
//!
//! let outcome = guard(|| {
//!     NativeException::new("SdkException", "client token rejected")
//!         .with_info("status", 401)
//!         .raise();
//! });
//!
//! match outcome {
//!     Outcome::Success => unreachable!(),
//!     Outcome::Failure(error) => {
//!         assert_eq!(error.name, "SdkException");
//!         assert_eq!(error.reason, "client token rejected");
//!         assert_eq!(error.context["status"].to_string(), "401");
//!     }
//! }
//! ```
//!
//! ## Scope
//!
//! Only panics that unwind are converted. Builds with `panic = "abort"`,
//! foreign exceptions, and hardware faults terminate the process as usual.

pub mod depth;
pub mod error;
pub mod extract;
pub mod guard;
pub mod outcome;

pub use depth::{guard_depth, is_guarded};
pub use error::{GuardError, Result};
pub use extract::payload_message;
pub use guard::guard;
pub use outcome::Outcome;
