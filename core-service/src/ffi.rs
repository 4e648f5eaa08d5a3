//! C ABI surface.
//!
//! Hosts written in C, Objective-C, Swift or JNI glue call
//! [`unwind_bridge_try_block`] with a callback and read failures back through
//! an error output parameter:
//!
//! ```c
//! UnwindBridgeError *error = NULL;
//! if (!unwind_bridge_try_block(log_purchase, &request, &error)) {
//!     report(unwind_bridge_error_name(error), unwind_bridge_error_reason(error));
//!     unwind_bridge_error_free(error);
//! }
//! ```
//!
//! The callback uses the `"C-unwind"` ABI, so a Rust callback may panic and
//! the panic is converted here. No function in this module unwinds.

use std::ffi::{c_char, c_void, CString};
use std::ptr;

use core_guard::{guard, GuardError, Outcome};

/// Name of the failure reported when the host passes no callback.
pub const INVALID_ARGUMENT_NAME: &str = "InvalidArgument";

/// Unit of work supplied by the host.
pub type WorkCallback = extern "C-unwind" fn(context: *mut c_void);

/// Failure handed to the host. Opaque on the C side.
///
/// Strings are stored NUL-terminated so the accessors can return borrowed
/// pointers that stay valid until [`unwind_bridge_error_free`].
#[derive(Debug)]
pub struct UnwindBridgeError {
    error: GuardError,
    name: CString,
    reason: CString,
    context_json: CString,
}

impl UnwindBridgeError {
    fn new(error: GuardError) -> Self {
        let context_json =
            serde_json::to_string(&error.context).unwrap_or_else(|_| "{}".to_string());

        Self {
            name: to_c_string(&error.name),
            reason: to_c_string(&error.reason),
            context_json: to_c_string(&context_json),
            error,
        }
    }

    pub fn error(&self) -> &GuardError {
        &self.error
    }
}

/// Interior NUL bytes cannot be represented; they are replaced instead of
/// failing the conversion.
fn to_c_string(value: &str) -> CString {
    CString::new(value.replace('\0', "\u{FFFD}")).unwrap_or_default()
}

/// Run `work(context)` once under the guard.
///
/// Returns `true` if the callback returned normally; `out_error` is left
/// untouched. Returns `false` if it panicked or `work` is null; when
/// `out_error` is non-null it then receives a new error the caller owns and
/// must release with [`unwind_bridge_error_free`].
///
/// # Safety
///
/// `out_error` must be null or valid for a pointer write. `context` is passed
/// to `work` unchanged and is otherwise not dereferenced.
#[no_mangle]
pub unsafe extern "C" fn unwind_bridge_try_block(
    work: Option<WorkCallback>,
    context: *mut c_void,
    out_error: *mut *mut UnwindBridgeError,
) -> bool {
    let outcome = match work {
        Some(work) => guard(|| work(context)),
        None => Outcome::Failure(GuardError::new(
            INVALID_ARGUMENT_NAME,
            "work callback is null",
        )),
    };

    match outcome {
        Outcome::Success => true,
        Outcome::Failure(error) => {
            if !out_error.is_null() {
                *out_error = Box::into_raw(Box::new(UnwindBridgeError::new(error)));
            }
            false
        }
    }
}

/// Exception name or error domain of `error`.
///
/// # Safety
///
/// `error` must be null or a live pointer returned by
/// [`unwind_bridge_try_block`].
#[no_mangle]
pub unsafe extern "C" fn unwind_bridge_error_name(
    error: *const UnwindBridgeError,
) -> *const c_char {
    error.as_ref().map_or(ptr::null(), |e| e.name.as_ptr())
}

/// Reason text of `error`.
///
/// # Safety
///
/// Same as [`unwind_bridge_error_name`].
#[no_mangle]
pub unsafe extern "C" fn unwind_bridge_error_reason(
    error: *const UnwindBridgeError,
) -> *const c_char {
    error.as_ref().map_or(ptr::null(), |e| e.reason.as_ptr())
}

/// Context of `error` as a JSON object (`{}` when empty).
///
/// # Safety
///
/// Same as [`unwind_bridge_error_name`].
#[no_mangle]
pub unsafe extern "C" fn unwind_bridge_error_context_json(
    error: *const UnwindBridgeError,
) -> *const c_char {
    error.as_ref().map_or(ptr::null(), |e| e.context_json.as_ptr())
}

/// Release an error returned through `out_error`. Null is ignored.
///
/// # Safety
///
/// `error` must be null or a pointer returned by [`unwind_bridge_try_block`]
/// that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn unwind_bridge_error_free(error: *mut UnwindBridgeError) {
    if !error.is_null() {
        drop(Box::from_raw(error));
    }
}
