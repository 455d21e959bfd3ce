//! Terminal output utilities.
//!
//! Renders value lists in the bracketed form the CLI prints. Output here
//! goes to stdout and stays plain; colored accents belong in log text only.

use itertools::Itertools;

/// Format a slice as `[a, b, c]`.
pub fn bracket_list<T: std::fmt::Display>(items: &[T]) -> String {
    format!("[{}]", items.iter().join(", "))
}
