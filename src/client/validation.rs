//! Input validation helpers

/// Check that `value` is a usable resource identifier.
///
/// Identifiers are non-empty and made of ASCII letters, digits, `-`, `_` and `.`.
/// Anything that would need escaping in a URL path segment is rejected.
pub fn valid_string_id(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Check that `value` is present.
pub fn valid_string(value: &str) -> bool {
    !value.is_empty()
}
