use std::sync::{Arc, Mutex};
use std::thread;

use tassert::{Failure, Recorder, ReportOptions, Soft, Strict, TestContext, assert, fail};

/// Context that only implements the required method
#[derive(Default)]
struct Minimal {
    messages: Mutex<Vec<String>>,
}

impl TestContext for Minimal {
    fn record_failure(&self, failure: &Failure) {
        self.messages.lock().unwrap().push(failure.message.clone());
    }
}

#[test]
fn test_minimal_context_uses_defaults() {
    let t = Minimal::default();
    assert!(!assert::equal(&t, vec![1, 2], vec![2, 1]));

    let messages = t.messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Should be equal:"));
    assert!(messages[0].contains("Diff (Expected - / Actual +):"));
}

#[test]
fn test_dyn_context() {
    let recorder = Recorder::new();
    let t: &dyn TestContext = &recorder;
    assert!(!assert::is_true(t, false));
    assert!(!fail(t, "manual"));
    assert_eq!(recorder.failures().len(), 2);
    assert_eq!(recorder.last_message().as_deref(), Some("manual"));
}

#[test]
fn test_options_disable_diff_and_truncate() {
    let t = Recorder::with_options(ReportOptions {
        diff: false,
        color: false,
        max_width: 4,
    });
    assert!(!assert::equal(&t, vec![1, 2, 3], vec![1, 2, 4]));
    assert_eq!(
        t.last_message().as_deref(),
        Some("Should be equal:\n  actual: [1, ...\nexpected: [1, ...")
    );
}

#[test]
fn test_strict_passes_silently() {
    let t = Strict::with_options(ReportOptions::default());
    assert!(assert::equal(&t, 1, 1));
    assert!(assert::contains(&t, "Hello", "H"));
}

#[test]
#[should_panic(expected = "Should be equal")]
fn test_strict_panics_on_failure() {
    let t = Strict::new();
    assert::equal(&t, 1, 2);
}

#[test]
#[should_panic(expected = "2 assertion(s) failed")]
fn test_soft_reports_all_failures() {
    let t = Soft::new();
    assert::equal(&t, 1, 2);
    assert::is_true(&t, true);
    assert::contains(&t, &vec![1], &2);
    t.finish();
}

#[test]
fn test_soft_without_failures() {
    let t = Soft::with_options(ReportOptions::default());
    assert::equal(&t, "a", "a");
    assert!(t.is_empty());
    t.finish();
}

#[test]
fn test_recorder_shared_across_threads() {
    let t = Arc::new(Recorder::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let t = Arc::clone(&t);
            thread::spawn(move || {
                assert::equal(&*t, i, i);
                assert::equal(&*t, i, i + 1);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(t.failures().len(), 4);
}
