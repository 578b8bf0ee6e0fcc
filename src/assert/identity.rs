use std::fmt::Debug;

use crate::context::TestContext;
use crate::inspect::{self, Reference};
use crate::report::{fail, render_reference};

/// Asserts that two references point at the same object.
///
/// Both arguments must be reference kinds (`&T`, raw pointers, `Rc`,
/// `Arc`...). Passing value kinds is reported as "Should be pointers"
/// instead of a plain mismatch.
///
/// ```
/// use tassert::{Recorder, assert};
///
/// let t = Recorder::new();
/// let (a, b) = (1, 1);
/// assert!(assert::same(&t, &a, &a));
/// assert!(!assert::same(&t, &a, &b));
/// ```
#[track_caller]
pub fn same<C, T>(ctx: &C, actual: T, expected: T) -> bool
where
    C: TestContext + ?Sized,
    T: Reference + Debug,
{
    match inspect::same(&actual, &expected) {
        None => fail(ctx, pointers_message(ctx, &actual, &expected)),
        Some(false) => {
            let options = ctx.options();
            fail(
                ctx,
                format!(
                    "Should be same\n  actual: {}\nexpected: {}",
                    render_reference(&actual, &options),
                    render_reference(&expected, &options)
                ),
            )
        }
        Some(true) => true,
    }
}

/// Asserts that two references do NOT point at the same object.
///
/// Value kinds are reported as "Should be pointers" and fail here too.
#[track_caller]
pub fn not_same<C, T>(ctx: &C, actual: T, expected: T) -> bool
where
    C: TestContext + ?Sized,
    T: Reference + Debug,
{
    match inspect::same(&actual, &expected) {
        None => fail(ctx, pointers_message(ctx, &actual, &expected)),
        Some(true) => {
            let options = ctx.options();
            fail(
                ctx,
                format!(
                    "Should not be same\n  actual: {}",
                    render_reference(&actual, &options)
                ),
            )
        }
        Some(false) => true,
    }
}

fn pointers_message<C, T>(ctx: &C, actual: &T, expected: &T) -> String
where
    C: TestContext + ?Sized,
    T: Reference + Debug,
{
    let options = ctx.options();
    format!(
        "Should be pointers\n  actual: {}\nexpected: {}",
        render_reference(actual, &options),
        render_reference(expected, &options)
    )
}
