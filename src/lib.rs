//! Lightweight assertion helpers for unit tests.
//!
//! Every assertion takes a [`TestContext`], returns `true` on success and
//! reports a formatted message through the context on failure:
//!
//! ```
//! use tassert::{Recorder, assert};
//!
//! let t = Recorder::new();
//! assert::equal(&t, vec![1, 2], vec![1, 2]);
//! assert::contains(&t, "Hello", "ell");
//! assert::equal_json(&t, r#"{"x":10,"y":16}"#, r#"{"y":16.000,"x":10}"#);
//! assert!(!t.is_failed());
//! ```
//!
//! Use [`Strict`] to panic on the first failure or [`Soft`] to collect
//! failures and panic once at the end of a test. The side-effect free
//! checks live in [`inspect`].

pub mod assert;
pub mod config;
pub mod context;
pub mod error;
pub mod inspect;
pub mod logging;
pub mod report;

pub use config::{Config, ReportOptions};
pub use context::{Failure, Recorder, Soft, Strict, TestContext};
pub use error::{Error, Result, Side};
pub use inspect::{Joined, join};
pub use report::{fail, failf};
