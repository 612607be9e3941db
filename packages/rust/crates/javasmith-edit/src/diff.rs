//! Diff generation utilities.
//!
//! Unified diffs via the `similar` crate, and a fence that is always longer
//! than any backtick run inside the diff it wraps.

use similar::TextDiff;

/// Lines of context around each hunk.
const CONTEXT_RADIUS: usize = 3;

/// Shortest fence that still renders as a code block.
const MIN_FENCE: usize = 3;

/// Generate a unified diff between two strings.
///
/// # Arguments
/// * `original` - The original content
/// * `modified` - The modified content
///
/// # Returns
/// A `--- original` / `+++ modified` unified diff, empty when nothing changed.
#[must_use]
pub fn generate_unified_diff(original: &str, modified: &str) -> String {
    TextDiff::from_lines(original, modified)
        .unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .header("original", "modified")
        .to_string()
}

/// Length of the longest run of consecutive backticks in `text`.
#[must_use]
pub fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for ch in text.chars() {
        if ch == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Wrap a diff in a ```` ```diff ```` fence that cannot collide with its body.
#[must_use]
pub fn fence_diff(diff: &str) -> String {
    let fence = "`".repeat((longest_backtick_run(diff) + 1).max(MIN_FENCE));
    let mut out = format!("{fence}diff\n{diff}");
    if !diff.is_empty() && !diff.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&fence);
    out
}
