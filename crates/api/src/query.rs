//! Helpers for optional query-string filters.

/// Treat `?key=` (or whitespace) the same as a missing key.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
