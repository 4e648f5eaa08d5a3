//! Host-facing rejections.
//!
//! Bridge methods exposed to a JavaScript host settle a promise either with a
//! value or with a `(code, message)` rejection such as
//! `("meta_init_error", "Failed to initialize Meta SDK: <reason>")`. This
//! module builds that rejection from a converted failure and logs it, which
//! is the caller-side half of the guard: the guard itself never logs.

use bridge_traits::ContextValue;
use core_guard::{guard, GuardError, Outcome};
use core_runtime::logging::redact_if_sensitive;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Failure of a bridge method, shaped for a host promise rejection.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{code}: {message}")]
pub struct Rejection {
    /// Stable machine-readable code chosen by the bridge method
    pub code: String,
    /// `"{action}: {reason}"`
    pub message: String,
    /// Exception name of the underlying failure
    pub name: String,
    /// Context of the underlying failure, unredacted
    pub context: BTreeMap<String, ContextValue>,
}

impl Rejection {
    pub fn from_error(code: impl Into<String>, action: &str, error: &GuardError) -> Self {
        Self {
            code: code.into(),
            message: format!("{}: {}", action, error.reason),
            name: error.name.clone(),
            context: error.context.clone(),
        }
    }
}

/// Run `work` under the guard, logging and rejecting on failure.
///
/// ```
/// use core_service::guard_or_reject;
///
/// let result = guard_or_reject("meta_event_error", "Failed to log Meta event", || {
///     panic!("logger not ready");
/// });
///
/// let rejection = result.unwrap_err();
/// assert_eq!(rejection.code, "meta_event_error");
/// assert_eq!(rejection.message, "Failed to log Meta event: logger not ready");
/// ```
pub fn guard_or_reject<F>(code: &str, action: &str, work: F) -> Result<(), Rejection>
where
    F: FnOnce(),
{
    match guard(work) {
        Outcome::Success => Ok(()),
        Outcome::Failure(error) => {
            tracing::error!(
                code,
                exception = %error.name,
                context = %redacted_context(&error),
                "{}: {}",
                action,
                error.reason
            );
            Err(Rejection::from_error(code, action, &error))
        }
    }
}

fn redacted_context(error: &GuardError) -> String {
    error
        .context
        .iter()
        .map(|(key, value)| format!("{}={}", key, redact_if_sensitive(key, &value.to_string())))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::NativeException;

    #[test]
    fn test_success_resolves() {
        let mut initialized = false;
        let result = guard_or_reject("meta_init_error", "Failed to initialize Meta SDK", || {
            initialized = true;
        });

        assert_eq!(result, Ok(()));
        assert!(initialized);
    }

    #[test]
    fn test_rejection_carries_exception() {
        let result = guard_or_reject("meta_purchase_error", "Failed to log Meta purchase", || {
            NativeException::new("InvalidCurrencyException", "unknown currency XYZ")
                .with_info("currency", "XYZ")
                .raise();
        });

        let rejection = result.unwrap_err();
        assert_eq!(rejection.code, "meta_purchase_error");
        assert_eq!(
            rejection.message,
            "Failed to log Meta purchase: unknown currency XYZ"
        );
        assert_eq!(rejection.name, "InvalidCurrencyException");
        assert_eq!(rejection.context["currency"], ContextValue::from("XYZ"));
        assert_eq!(
            rejection.to_string(),
            "meta_purchase_error: Failed to log Meta purchase: unknown currency XYZ"
        );
    }

    #[test]
    fn test_logged_context_is_redacted() {
        let error = GuardError::new("AuthException", "rejected")
            .with_context("client_token", "EAAB123")
            .with_context("status", 401);

        assert_eq!(redacted_context(&error), "client_token=[REDACTED], status=401");
    }

    #[test]
    fn test_rejection_with_multibyte_email_is_logged() {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            guard_or_reject("meta_login_error", "Failed to log in to Meta", || {
                NativeException::new("AuthException", "unverified account")
                    .with_info("user", "é@example.com")
                    .raise();
            })
        });

        let rejection = result.unwrap_err();
        assert_eq!(rejection.message, "Failed to log in to Meta: unverified account");
        assert_eq!(rejection.context["user"], ContextValue::from("é@example.com"));

        let error = GuardError::new("AuthException", "unverified account")
            .with_context("user", "é@example.com");
        assert_eq!(redacted_context(&error), "user=é***@[REDACTED]");
    }

    #[test]
    fn test_rejection_serializes_for_host() {
        let rejection = Rejection::from_error(
            "tiktok_init_error",
            "Failed to initialize TikTok SDK",
            &GuardError::panic("missing app id"),
        );

        let json = serde_json::to_value(&rejection).unwrap();
        assert_eq!(json["code"], "tiktok_init_error");
        assert_eq!(json["name"], "RustPanic");
        assert_eq!(json["context"], serde_json::json!({}));
    }
}
