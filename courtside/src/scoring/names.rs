//! Display-name handling for cross-tournament matching and deterministic ordering.

use std::cmp::Ordering;

/// Normalize a display name for identity matching.
///
/// Lower-cases, trims, and collapses internal whitespace runs to a single space.
///
/// # Examples
///
/// ```
/// use courtside::scoring::normalize_name;
///
/// assert_eq!(normalize_name("  Ana   María "), "ana maría");
/// assert_eq!(normalize_name("JOSE\tLuis"), "jose luis");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Order display names alphabetically without regard to case.
///
/// Names equal after case folding fall back to the raw comparison so the
/// result never reports `Equal` for distinct strings.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
