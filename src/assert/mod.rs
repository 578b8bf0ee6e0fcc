// Assertion module
//
// Every predicate borrows a test context, returns `true` on success and
// reports through the context on failure. All of them are
// `#[track_caller]` so failures point at the test, not at this crate.

pub mod collection;
pub mod equality;
pub mod errors;
pub mod identity;

pub use collection::{contains, length, not_contains};
pub use equality::{equal, equal_delta, equal_json, not_equal};
pub use errors::{error, error_is, no_error, not_error_is};
pub use identity::{not_same, same};

use crate::context::TestContext;
use crate::report::fail;

/// Asserts that the condition is true.
///
/// ```
/// use tassert::{Recorder, assert};
///
/// let t = Recorder::new();
/// assert::is_true(&t, 1 + 1 == 2);
/// assert!(!t.is_failed());
/// ```
#[track_caller]
pub fn is_true<C: TestContext + ?Sized>(ctx: &C, condition: bool) -> bool {
    if !condition {
        return fail(ctx, "Should be true");
    }

    true
}

/// Asserts that the condition is false
#[track_caller]
pub fn is_false<C: TestContext + ?Sized>(ctx: &C, condition: bool) -> bool {
    if condition {
        return fail(ctx, "Should be false");
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Recorder;

    #[test]
    fn test_is_true() {
        let t = Recorder::new();
        assert!(is_true(&t, true));
        assert!(!t.is_failed());

        assert!(!is_true(&t, false));
        assert_eq!(t.last_message().as_deref(), Some("Should be true"));
    }

    #[test]
    fn test_is_false() {
        let t = Recorder::new();
        assert!(is_false(&t, false));
        assert!(!t.is_failed());

        assert!(!is_false(&t, true));
        assert_eq!(t.last_message().as_deref(), Some("Should be false"));
    }
}
