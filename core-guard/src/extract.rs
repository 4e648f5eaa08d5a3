//! Payload inspection.
//!
//! Everything here runs after the unwind has been stopped, so none of it may
//! panic itself: there is no outer frame left that could convert a second
//! failure. The only user code reachable from this module is the `Display`
//! impl of a boxed error payload and the `Drop` impl of the payload, and both
//! run under their own `catch_unwind`.

use bridge_traits::NativeException;
use std::any::Any;
use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};

use crate::error::GuardError;

type BoxedError = Box<dyn StdError + Send + Sync>;

/// Message of a plain `&str`/`String` panic payload.
pub fn payload_message(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Some(*message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        Some(message.as_str())
    } else if let Some(exception) = payload.downcast_ref::<NativeException>() {
        Some(exception.reason())
    } else if let Some(error) = payload.downcast_ref::<GuardError>() {
        Some(error.reason.as_str())
    } else {
        None
    }
}

/// Copy the diagnostic content of a caught payload into a fresh error.
pub fn error_from_payload(payload: &(dyn Any + Send)) -> GuardError {
    if let Some(exception) = payload.downcast_ref::<NativeException>() {
        return GuardError {
            name: exception.name().to_string(),
            reason: exception.reason().to_string(),
            context: exception.user_info().clone(),
        };
    }

    if let Some(error) = payload.downcast_ref::<GuardError>() {
        return error.clone();
    }

    if let Some(message) = payload_message(payload) {
        return GuardError::panic(message);
    }

    if let Some(error) = payload.downcast_ref::<BoxedError>() {
        return match panic::catch_unwind(AssertUnwindSafe(|| error.to_string())) {
            Ok(reason) => GuardError::panic(reason),
            Err(secondary) => {
                dispose(secondary);
                GuardError::unknown()
            }
        };
    }

    GuardError::unknown()
}

/// Drop a payload without letting its destructor unwind out of the bridge.
///
/// A payload whose `Drop` panics produces a second payload; that one is
/// leaked rather than dropped, since its destructor could panic again.
pub fn dispose(payload: Box<dyn Any + Send>) {
    if let Err(secondary) = panic::catch_unwind(AssertUnwindSafe(move || drop(payload))) {
        std::mem::forget(secondary);
    }
}
