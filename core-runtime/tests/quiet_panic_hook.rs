//! Quiet panic reporting: guarded panics are silenced, unguarded panics still
//! reach the hook that was installed before.
//!
//! The panic hook is process-wide, so this binary holds a single test.

use core_guard::guard;
use core_runtime::panic_hook::{install_panic_hook, installed_reporting};
use core_runtime::PanicReporting;
use std::panic;
use std::sync::{Arc, Mutex};

#[test]
fn test_quiet_reporting_forwards_only_unguarded_panics() {
    let reported = Arc::new(Mutex::new(Vec::<String>::new()));
    let recorder = Arc::clone(&reported);

    panic::set_hook(Box::new(move |info| {
        let message = core_guard::payload_message(info.payload())
            .unwrap_or("<non-string payload>")
            .to_string();
        recorder.lock().unwrap().push(message);
    }));

    install_panic_hook(PanicReporting::Quiet).unwrap();
    assert_eq!(installed_reporting(), Some(PanicReporting::Quiet));

    let outcome = guard(|| panic!("guarded sdk failure"));
    assert_eq!(outcome.into_error().unwrap().reason, "guarded sdk failure");

    let nested = guard(|| {
        let inner = guard(|| panic!("nested sdk failure"));
        assert!(inner.is_failure());
    });
    assert!(nested.is_success());

    assert!(reported.lock().unwrap().is_empty());

    let unguarded = panic::catch_unwind(|| panic!("unguarded failure"));
    assert!(unguarded.is_err());

    let joined = std::thread::spawn(|| panic!("unguarded thread failure")).join();
    assert!(joined.is_err());

    let reported = reported.lock().unwrap().clone();
    assert_eq!(
        reported,
        vec![
            "unguarded failure".to_string(),
            "unguarded thread failure".to_string()
        ]
    );
}
