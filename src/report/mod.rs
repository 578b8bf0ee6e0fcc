// Failure reporting and value rendering

pub mod diff;

use std::fmt::{self, Debug};

use crate::config::ReportOptions;
use crate::context::{Failure, TestContext};
use crate::inspect::Reference;

pub use diff::{json_diff, text_diff};

/// Report a failure message through the context. Always returns `false`.
#[track_caller]
pub fn fail<C: TestContext + ?Sized>(ctx: &C, message: impl fmt::Display) -> bool {
    ctx.mark_helper();

    let failure = Failure::new(message.to_string());
    tracing::debug!(
        target: "tassert",
        location = %failure.location,
        "assertion failed: {}",
        failure.message
    );
    ctx.record_failure(&failure);

    false
}

/// Report a formatted failure message through the context.
///
/// ```
/// use tassert::{Recorder, failf};
///
/// let t = Recorder::new();
/// assert!(!failf(&t, format_args!("expected {} items", 3)));
/// assert_eq!(t.last_message().as_deref(), Some("expected 3 items"));
/// ```
#[track_caller]
pub fn failf<C: TestContext + ?Sized>(ctx: &C, args: fmt::Arguments<'_>) -> bool {
    fail(ctx, args)
}

/// Debug rendering, truncated to the configured width
pub fn render<T: Debug + ?Sized>(value: &T, options: &ReportOptions) -> String {
    truncate(format!("{:?}", value), options.max_width)
}

/// Rendering that includes the address for reference kinds
pub fn render_reference<T: Reference + Debug>(value: &T, options: &ReportOptions) -> String {
    match value.address() {
        Some(address) => truncate(format!("[{:p}] {:?}", address, value), options.max_width),
        None => render(value, options),
    }
}

/// Diff of the pretty renderings of two values, when worth showing
pub fn value_diff<T: Debug + ?Sized>(
    actual: &T,
    expected: &T,
    options: &ReportOptions,
) -> Option<String> {
    if !options.diff {
        return None;
    }

    let actual = format!("{:#?}", actual);
    let expected = format!("{:#?}", expected);
    if actual == expected || !(actual.contains('\n') || expected.contains('\n')) {
        return None;
    }

    Some(text_diff(&expected, &actual, options.color))
}

fn truncate(mut text: String, max_width: usize) -> String {
    if max_width == 0 {
        return text;
    }
    if let Some((idx, _)) = text.char_indices().nth(max_width) {
        text.truncate(idx);
        text.push_str("...");
    }
    text
}
