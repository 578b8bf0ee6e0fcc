// Test contexts: where assertion failures end up

use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::{Config, ReportOptions};

/// A single recorded assertion failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
    /// Call site of the assertion in the test code
    pub location: &'static Location<'static>,
}

impl Failure {
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: Location::caller(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Capability supplied by the test runner.
///
/// Assertions only borrow the context for the duration of a single call.
pub trait TestContext {
    /// Mark the current frame as an assertion helper.
    ///
    /// Called before every `record_failure`. Locations are already tracked
    /// with `#[track_caller]`, so most contexts have nothing to do here.
    fn mark_helper(&self) {}

    /// Record a formatted failure
    fn record_failure(&self, failure: &Failure);

    /// Rendering options used when building failure messages
    fn options(&self) -> ReportOptions {
        ReportOptions::default()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keeps every failure for later inspection and never panics.
///
/// `new` renders with default options; `.tassertrc.toml` only applies
/// through `from_config`:
///
/// ```
/// use tassert::{Config, Recorder};
///
/// let t = Recorder::from_config(&Config::load_or_default());
/// assert!(!t.is_failed());
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    failures: Mutex<Vec<Failure>>,
    helper_calls: AtomicUsize,
    options: ReportOptions,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReportOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_options(config.into())
    }

    pub fn failures(&self) -> Vec<Failure> {
        lock(&self.failures).clone()
    }

    pub fn last_message(&self) -> Option<String> {
        lock(&self.failures).last().map(|f| f.message.clone())
    }

    pub fn is_failed(&self) -> bool {
        !lock(&self.failures).is_empty()
    }

    /// Number of times an assertion marked itself as a helper frame
    pub fn helper_calls(&self) -> usize {
        self.helper_calls.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        lock(&self.failures).clear();
        self.helper_calls.store(0, Ordering::Relaxed);
    }
}

impl TestContext for Recorder {
    fn mark_helper(&self) {
        self.helper_calls.fetch_add(1, Ordering::Relaxed);
    }

    fn record_failure(&self, failure: &Failure) {
        lock(&self.failures).push(failure.clone());
    }

    fn options(&self) -> ReportOptions {
        self.options.clone()
    }
}

/// Panics on the first failure, like `assert!`
#[derive(Debug, Default)]
pub struct Strict {
    options: ReportOptions,
}

impl Strict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_options(config.into())
    }
}

impl TestContext for Strict {
    fn record_failure(&self, failure: &Failure) {
        panic!("assertion failed at {}", failure);
    }

    fn options(&self) -> ReportOptions {
        self.options.clone()
    }
}

/// Collects failures and panics once at the end of the test.
///
/// Failures are reported by [`Soft::finish`] or, failing that, when the
/// context is dropped. Nothing is raised while the thread is already
/// unwinding.
#[derive(Debug, Default)]
pub struct Soft {
    failures: Mutex<Vec<Failure>>,
    options: ReportOptions,
}

impl Soft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReportOptions) -> Self {
        Self {
            failures: Mutex::new(Vec::new()),
            options,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_options(config.into())
    }

    pub fn len(&self) -> usize {
        lock(&self.failures).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Panic if any assertion failed so far
    pub fn finish(self) {
        let failures = std::mem::take(&mut *lock(&self.failures));
        if !failures.is_empty() {
            panic!("{}", summarize(&failures));
        }
    }
}

impl TestContext for Soft {
    fn record_failure(&self, failure: &Failure) {
        lock(&self.failures).push(failure.clone());
    }

    fn options(&self) -> ReportOptions {
        self.options.clone()
    }
}

impl Drop for Soft {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        let failures = std::mem::take(&mut *lock(&self.failures));
        if !failures.is_empty() {
            panic!("{}", summarize(&failures));
        }
    }
}

fn summarize(failures: &[Failure]) -> String {
    let mut out = format!("{} assertion(s) failed:", failures.len());
    for failure in failures {
        out.push_str("\n\n");
        out.push_str(&failure.to_string());
    }
    out
}
