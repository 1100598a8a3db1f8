//! Formatting utilities for terminal output

/// First and last `n` items of a slice, for spot-checking a long list
///
/// The two slices overlap when the list holds fewer than `2 * n` items.
#[must_use]
pub fn head_and_tail<T>(items: &[T], n: usize) -> (&[T], &[T]) {
    let head = &items[..n.min(items.len())];
    let tail = &items[items.len().saturating_sub(n)..];
    (head, tail)
}

/// Create a divider line
#[must_use]
pub fn divider(width: usize) -> String {
    "─".repeat(width)
}
