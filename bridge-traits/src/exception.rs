//! Throwable Exception Contract
//!
//! Third-party code that wants its failures to reach the host with a name and
//! structured context raises a [`NativeException`] instead of a plain message
//! panic. The guard in `core-guard` recognises this payload and copies its
//! fields into the error handed back across the boundary.
//!
//! # Example
//!
//! ```
//! use bridge_traits::exception::NativeException;
//!
//! fn log_purchase(currency: &str) {
//!     if currency.len() != 3 {
//!         NativeException::new("InvalidArgumentException", "unknown currency code")
//!             .with_info("currency", currency)
//!             .with_info("length", currency.len() as i64)
//!             .raise();
//!     }
//! }
//!
//! let result = std::panic::catch_unwind(|| log_purchase("EURO"));
//! assert!(result.is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Primitive value stored in an exception's user info.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::Bool(v) => write!(f, "{}", v),
            ContextValue::Integer(v) => write!(f, "{}", v),
            ContextValue::Float(v) => write!(f, "{}", v),
            ContextValue::String(v) => f.write_str(v),
        }
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::String(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::String(value)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        ContextValue::Integer(value)
    }
}

impl From<i32> for ContextValue {
    fn from(value: i32) -> Self {
        ContextValue::Integer(value.into())
    }
}

impl From<u32> for ContextValue {
    fn from(value: u32) -> Self {
        ContextValue::Integer(value.into())
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        ContextValue::Float(value)
    }
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        ContextValue::Bool(value)
    }
}

/// Structured exception raised through the panic mechanism.
///
/// Carries a name (the exception class or error domain), a human-readable
/// reason, and a user-info map of primitive values.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeException {
    name: String,
    reason: String,
    user_info: BTreeMap<String, ContextValue>,
}

impl NativeException {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
            user_info: BTreeMap::new(),
        }
    }

    pub fn with_info(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.user_info.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn user_info(&self) -> &BTreeMap<String, ContextValue> {
        &self.user_info
    }

    /// Unwind the current thread with this exception as the panic payload.
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}

impl fmt::Display for NativeException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.reason)
    }
}

/// Shorthand for raising an exception without user info.
pub fn raise(name: impl Into<String>, reason: impl Into<String>) -> ! {
    NativeException::new(name, reason).raise()
}
