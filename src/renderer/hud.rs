//! Score and attempt text

/// Score as a zero-padded 3-digit string; larger scores keep all their digits
pub fn format_score(score: u32) -> String {
    format!("{score:03}")
}

/// Attempt counter as plain text
pub fn format_attempts(attempts: u32) -> String {
    attempts.to_string()
}
