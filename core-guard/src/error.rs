use bridge_traits::ContextValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Name given to failures raised with a plain message (`panic!`, `unwrap`, ...).
pub const PANIC_EXCEPTION_NAME: &str = "RustPanic";

/// Name given to failures whose payload type is not recognised.
pub const UNKNOWN_EXCEPTION_NAME: &str = "UnknownPanic";

/// Reason given to failures whose payload type is not recognised.
pub const UNKNOWN_PANIC_REASON: &str = "unknown panic payload";

/// Plain-data description of an intercepted unwind.
///
/// This is the only value that leaves the guarded frame on the failure path.
/// It holds no reference to the original payload.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{name}: {reason}")]
pub struct GuardError {
    /// Exception name or error domain
    pub name: String,
    /// Human-readable reason, copied verbatim from the payload
    pub reason: String,
    /// Key/value pairs carried by the payload (may be empty)
    #[serde(default)]
    pub context: BTreeMap<String, ContextValue>,
}

impl GuardError {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
            context: BTreeMap::new(),
        }
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Error for a plain message panic.
    pub fn panic(reason: impl Into<String>) -> Self {
        Self::new(PANIC_EXCEPTION_NAME, reason)
    }

    /// Error for a payload of unrecognised type.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_EXCEPTION_NAME, UNKNOWN_PANIC_REASON)
    }

    pub fn is_plain_panic(&self) -> bool {
        self.name == PANIC_EXCEPTION_NAME
    }
}

pub type Result<T> = std::result::Result<T, GuardError>;
