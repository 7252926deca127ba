//! Local username derivation.

/// Upper bound on stored usernames, in characters.
pub const MAX_USERNAME_LENGTH: usize = 30;

/// Truncate a `preferred_username` claim to the local username.
///
/// Counts Unicode scalar values, not bytes, so a multi-byte name is never cut
/// mid-character. Subjects sharing a 30-character prefix resolve to the same
/// local user.
pub fn resolve_username(preferred_username: &str) -> String {
    match preferred_username.char_indices().nth(MAX_USERNAME_LENGTH) {
        Some((byte_index, _)) => preferred_username[..byte_index].to_string(),
        None => preferred_username.to_string(),
    }
}

/// Whether `resolve_username` would shorten this value
pub fn is_truncated(preferred_username: &str) -> bool {
    preferred_username.chars().count() > MAX_USERNAME_LENGTH
}
