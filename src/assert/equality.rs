use std::fmt::Debug;

use crate::context::TestContext;
use crate::error::{Error, Side};
use crate::inspect::{self, Numeric};
use crate::report::{fail, json_diff, render, value_diff};

/// Asserts that two values are equal.
///
/// Equality is structural: collections compare element by element, maps
/// compare regardless of insertion order and boxed or borrowed values
/// compare by their contents rather than their addresses.
#[track_caller]
pub fn equal<C, T>(ctx: &C, actual: T, expected: T) -> bool
where
    C: TestContext + ?Sized,
    T: PartialEq + Debug,
{
    if !inspect::equal(&actual, &expected) {
        let options = ctx.options();
        let mut message = format!(
            "Should be equal:\n  actual: {}\nexpected: {}",
            render(&actual, &options),
            render(&expected, &options)
        );
        if let Some(diff) = value_diff(&actual, &expected, &options) {
            message.push('\n');
            message.push_str(&diff);
        }
        return fail(ctx, message);
    }

    true
}

/// Asserts that two values are NOT equal
#[track_caller]
pub fn not_equal<C, T>(ctx: &C, actual: T, expected: T) -> bool
where
    C: TestContext + ?Sized,
    T: PartialEq + Debug,
{
    if inspect::equal(&actual, &expected) {
        let options = ctx.options();
        return fail(
            ctx,
            format!("Should not be equal\n  actual: {}", render(&actual, &options)),
        );
    }

    true
}

/// Asserts that two numbers differ by at most `delta`.
///
/// Two NaNs are considered equal. Opposite infinities never are.
///
/// # Panics
///
/// When `delta` is negative or NaN. This is a misuse of the assertion, not
/// a test failure.
#[track_caller]
pub fn equal_delta<C, T>(ctx: &C, actual: T, expected: T, delta: T) -> bool
where
    C: TestContext + ?Sized,
    T: Numeric,
{
    if !inspect::equal_delta(actual, expected, delta) {
        return fail(
            ctx,
            format!(
                "Should be equal in delta:\n  actual: {:?}\nexpected: {:?}\n   delta: {:?}",
                actual, expected, delta
            ),
        );
    }

    true
}

/// Asserts that two JSON documents are equal.
///
/// Key order and number formatting are ignored: `{"y":16.000,"x":10}`
/// equals `{"x":10,"y":16}`. Text that is not valid JSON always fails.
#[track_caller]
pub fn equal_json<C>(ctx: &C, actual: &str, expected: &str) -> bool
where
    C: TestContext + ?Sized,
{
    let actual_json = match inspect::json::parse(Side::Actual, actual) {
        Ok(value) => value,
        Err(e) => return fail(ctx, invalid_json_message(actual, &e)),
    };

    let expected_json = match inspect::json::parse(Side::Expected, expected) {
        Ok(value) => value,
        Err(e) => return fail(ctx, invalid_json_message(expected, &e)),
    };

    let mismatches = inspect::json::compare(&actual_json, &expected_json);
    if !mismatches.is_empty() {
        let options = ctx.options();
        let mut message = String::from("Should be equal JSON:");
        for mismatch in &mismatches {
            message.push_str("\n  - ");
            message.push_str(&mismatch.message);
        }
        message.push_str(&format!(
            "\n  actual: {}\nexpected: {}",
            render(&actual_json, &options),
            render(&expected_json, &options)
        ));
        if options.diff {
            message.push('\n');
            message.push_str(&json_diff(&expected_json, &actual_json, options.color));
        }
        return fail(ctx, message);
    }

    true
}

fn invalid_json_message(text: &str, err: &Error) -> String {
    match err {
        Error::InvalidJson { side, source } => format!(
            "Should be valid JSON\n{}: {}\n     err: {}",
            side.label(),
            text,
            source
        ),
        other => format!("Should be valid JSON\n     err: {}", other),
    }
}
