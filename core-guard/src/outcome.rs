//! Two-case result of a guarded call.

use serde::{Deserialize, Serialize};

use crate::error::GuardError;

/// Result of running a unit of work under [`guard`](crate::guard).
///
/// Exactly one variant is produced per call.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum Outcome {
    /// The work returned normally
    Success,
    /// The work unwound; the payload was converted into a plain error
    Failure(GuardError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    pub fn error(&self) -> Option<&GuardError> {
        match self {
            Outcome::Success => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    pub fn into_error(self) -> Option<GuardError> {
        match self {
            Outcome::Success => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<(), GuardError> {
        self.into()
    }
}

impl From<Outcome> for Result<(), GuardError> {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Ok(()),
            Outcome::Failure(error) => Err(error),
        }
    }
}
