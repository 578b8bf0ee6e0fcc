use std::error::Error as StdError;
use std::fmt::Debug;

use crate::context::TestContext;
use crate::inspect;
use crate::report::{fail, render};

/// Asserts that the result is an error
#[track_caller]
pub fn error<C, T, E>(ctx: &C, result: &Result<T, E>) -> bool
where
    C: TestContext + ?Sized,
    T: Debug,
{
    if let Ok(value) = result {
        let options = ctx.options();
        return fail(
            ctx,
            format!("Should be error\n   value: {}", render(value, &options)),
        );
    }

    true
}

/// Asserts that the result is not an error
#[track_caller]
pub fn no_error<C, T, E>(ctx: &C, result: &Result<T, E>) -> bool
where
    C: TestContext + ?Sized,
    E: Debug,
{
    if let Err(err) = result {
        let options = ctx.options();
        return fail(
            ctx,
            format!("Should not be error\n   error: {}", render(err, &options)),
        );
    }

    true
}

/// Asserts that the error chain of `err` contains `target`.
///
/// The chain follows `Error::source` and descends into every branch of a
/// [`Joined`](crate::Joined) error.
///
/// ```
/// use tassert::{Recorder, assert, join};
///
/// #[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// #[error("not found")]
/// struct NotFound;
///
/// let t = Recorder::new();
/// let branches: Vec<Box<dyn std::error::Error + Send + Sync>> =
///     vec![Box::new(std::io::Error::other("disk")), Box::new(NotFound)];
/// let err = join(branches);
/// assert!(assert::error_is(&t, &err, &NotFound));
/// ```
#[track_caller]
pub fn error_is<C, E>(ctx: &C, err: &(dyn StdError + 'static), target: &E) -> bool
where
    C: TestContext + ?Sized,
    E: StdError + PartialEq + 'static,
{
    if !inspect::error_is(err, target) {
        let options = ctx.options();
        let mut message = format!(
            "Should be same error\n   error: {}\n  target: {}",
            render(err, &options),
            render(target, &options)
        );
        if err.source().is_some() {
            let chain: Vec<String> = inspect::sources(err).map(|e| e.to_string()).collect();
            message.push_str(&format!("\n   chain: {}", chain.join(" -> ")));
        }
        return fail(ctx, message);
    }

    true
}

/// Asserts that the error chain of `err` does NOT contain `target`
#[track_caller]
pub fn not_error_is<C, E>(ctx: &C, err: &(dyn StdError + 'static), target: &E) -> bool
where
    C: TestContext + ?Sized,
    E: StdError + PartialEq + 'static,
{
    if inspect::error_is(err, target) {
        let options = ctx.options();
        return fail(
            ctx,
            format!(
                "Should not be same error\n   error: {}\n  target: {}",
                render(err, &options),
                render(target, &options)
            ),
        );
    }

    true
}
