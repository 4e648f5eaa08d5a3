//! End-to-end tests: a third-party SDK that panics, called the way a host
//! bridge module calls it.

use bridge_traits::NativeException;
use core_service::ffi::{
    unwind_bridge_error_free, unwind_bridge_error_reason, unwind_bridge_try_block,
    UnwindBridgeError,
};
use core_service::{guard_or_reject, try_call, ServiceError};
use std::cell::Cell;
use std::ffi::{c_void, CStr};
use std::ptr;
use std::thread;

trait AnalyticsSdk {
    fn initialize(&self, app_id: &str);
    fn log_event(&self, name: &str, value: f64);
}

/// Stand-in for a vendor SDK that fails by unwinding.
#[derive(Default)]
struct FakeSdk {
    registered_app: Option<&'static str>,
    failures_left: Cell<u32>,
    events_logged: Cell<u32>,
}

impl AnalyticsSdk for FakeSdk {
    fn initialize(&self, app_id: &str) {
        if self.registered_app != Some(app_id) {
            NativeException::new("ConfigurationException", "app id not registered")
                .with_info("app_id", app_id)
                .raise();
        }
    }

    fn log_event(&self, name: &str, _value: f64) {
        if name.len() > 32 {
            panic!("event name too long: {}", name.len());
        }
        if self.failures_left.get() > 0 {
            self.failures_left.set(self.failures_left.get() - 1);
            panic!("transient");
        }
        self.events_logged.set(self.events_logged.get() + 1);
    }
}

struct AnalyticsModule<S: AnalyticsSdk> {
    sdk: S,
}

impl<S: AnalyticsSdk> AnalyticsModule<S> {
    fn initialize(&self, app_id: &str) -> Result<(), core_service::Rejection> {
        guard_or_reject("sdk_init_error", "Failed to initialize SDK", || {
            self.sdk.initialize(app_id)
        })
    }

    fn log_event(&self, name: &str, value: f64) -> core_service::Result<()> {
        try_call(|| self.sdk.log_event(name, value))
    }
}

#[test]
fn test_sdk_success_passes_through() {
    let module = AnalyticsModule {
        sdk: FakeSdk {
            registered_app: Some("123"),
            ..FakeSdk::default()
        },
    };

    assert!(module.initialize("123").is_ok());
    assert!(module.log_event("open", 0.0).is_ok());
    assert_eq!(module.sdk.events_logged.get(), 1);
}

#[test]
fn test_sdk_exception_becomes_rejection() {
    let module = AnalyticsModule {
        sdk: FakeSdk::default(),
    };
    let rejection = module.initialize("999").unwrap_err();

    assert_eq!(rejection.code, "sdk_init_error");
    assert_eq!(
        rejection.message,
        "Failed to initialize SDK: app id not registered"
    );
    assert_eq!(rejection.name, "ConfigurationException");
    assert_eq!(rejection.context["app_id"].to_string(), "999");
}

#[test]
fn test_sdk_panic_becomes_service_error() {
    let module = AnalyticsModule {
        sdk: FakeSdk::default(),
    };

    match module.log_event("purchase_completed_with_extra_metadata", 9.99) {
        Err(ServiceError::Guard(error)) => {
            assert_eq!(error.reason, "event name too long: 38");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_module_remains_usable_after_failure() {
    let module = AnalyticsModule {
        sdk: FakeSdk {
            failures_left: Cell::new(1),
            ..FakeSdk::default()
        },
    };

    assert!(module.log_event("open", 0.0).is_err());
    assert!(module.log_event("open", 0.0).is_ok());
    assert_eq!(module.sdk.events_logged.get(), 1);
}

extern "C-unwind" fn throw_thread_reason(context: *mut c_void) {
    let index = context as usize;
    panic!("thread-{}", index);
}

#[test]
fn test_ffi_calls_from_many_threads() {
    let handles: Vec<_> = (1..=8usize)
        .map(|index| {
            thread::spawn(move || {
                let mut error: *mut UnwindBridgeError = ptr::null_mut();
                let ok = unsafe {
                    unwind_bridge_try_block(
                        Some(throw_thread_reason),
                        index as *mut c_void,
                        &mut error,
                    )
                };
                assert!(!ok);

                let reason = unsafe {
                    let reason = CStr::from_ptr(unwind_bridge_error_reason(error))
                        .to_string_lossy()
                        .into_owned();
                    unwind_bridge_error_free(error);
                    reason
                };
                (index, reason)
            })
        })
        .collect();

    for handle in handles {
        let (index, reason) = handle.join().unwrap();
        assert_eq!(reason, format!("thread-{}", index));
    }
}
