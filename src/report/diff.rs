use console::Style;
use dissimilar::{Chunk, diff};
use serde_json::Value;
use std::fmt::Write;

/// Character diff between two renderings.
///
/// With color, removed text is red and inserted text green. Without it,
/// changes are marked inline as `[-removed-]` and `{+inserted+}`.
pub fn text_diff(expected: &str, actual: &str, color: bool) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Diff (Expected - / Actual +):");

    let dim = Style::new().dim().force_styling(color);
    let red = Style::new().red().force_styling(color);
    let green = Style::new().green().force_styling(color);

    for chunk in diff(expected, actual) {
        let _ = match chunk {
            Chunk::Equal(text) => write!(output, "{}", dim.apply_to(text)),
            Chunk::Delete(text) if color => write!(output, "{}", red.apply_to(text)),
            Chunk::Insert(text) if color => write!(output, "{}", green.apply_to(text)),
            Chunk::Delete(text) => write!(output, "[-{}-]", text),
            Chunk::Insert(text) => write!(output, "{{+{}+}}", text),
        };
    }

    output
}

/// Diff of two JSON trees rendered with pretty printing
pub fn json_diff(expected: &Value, actual: &Value, color: bool) -> String {
    let expected_str =
        serde_json::to_string_pretty(expected).unwrap_or_else(|_| expected.to_string());
    let actual_str = serde_json::to_string_pretty(actual).unwrap_or_else(|_| actual.to_string());

    text_diff(&expected_str, &actual_str, color)
}
