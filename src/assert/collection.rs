use std::fmt::Debug;

use crate::config::ReportOptions;
use crate::context::TestContext;
use crate::inspect::{self, Container, Lookup, Measure};
use crate::report::{fail, render};

/// Asserts that the object has the given number of elements.
///
/// Strings are measured in bytes.
#[track_caller]
pub fn length<C, S>(ctx: &C, object: &S, expected: usize) -> bool
where
    C: TestContext + ?Sized,
    S: Measure + Debug + ?Sized,
{
    let options = ctx.options();
    match inspect::length(object) {
        None => fail(
            ctx,
            format!("Should have length\n  object: {}", render(object, &options)),
        ),
        Some(actual) if actual != expected => fail(
            ctx,
            format!(
                "Should have element length\n  object: {}\n  actual: {}\nexpected: {}",
                render(object, &options),
                actual,
                expected
            ),
        ),
        Some(_) => true,
    }
}

/// Asserts that the object contains the element.
///
/// Strings are searched for substrings, sequences and sets element by
/// element, and maps by their values (keys are never matched).
#[track_caller]
pub fn contains<C, S, E>(ctx: &C, object: &S, element: &E) -> bool
where
    C: TestContext + ?Sized,
    S: Container<E> + Debug + ?Sized,
    E: Debug + ?Sized,
{
    let options = ctx.options();
    match inspect::contains(object, element) {
        Lookup::Found => true,
        Lookup::Missing => fail(
            ctx,
            format!(
                "Should contain element\n  object: {}\n element: {}",
                render(object, &options),
                render(element, &options)
            ),
        ),
        Lookup::NotIterable => fail(ctx, iterable_message(object, &options)),
    }
}

/// Asserts that the object does NOT contain the element.
///
/// Objects that cannot be searched fail as in [`contains`].
#[track_caller]
pub fn not_contains<C, S, E>(ctx: &C, object: &S, element: &E) -> bool
where
    C: TestContext + ?Sized,
    S: Container<E> + Debug + ?Sized,
    E: Debug + ?Sized,
{
    let options = ctx.options();
    match inspect::contains(object, element) {
        Lookup::Missing => true,
        Lookup::Found => fail(
            ctx,
            format!(
                "Should not contain element\n  object: {}\n element: {}",
                render(object, &options),
                render(element, &options)
            ),
        ),
        Lookup::NotIterable => fail(ctx, iterable_message(object, &options)),
    }
}

fn iterable_message<S: Debug + ?Sized>(object: &S, options: &ReportOptions) -> String {
    format!("Should be iterable\n  object: {}", render(object, options))
}
