//! Filename stem derivation.
//!
//! A recording's stem is the sanitized name base plus a second-resolution
//! timestamp; it prefixes both the original artifact and the derived MP3.
//! No uniqueness is enforced beyond the timestamp: two uploads producing the
//! same stem within a second overwrite silently (last writer wins).

use chrono::NaiveDateTime;

/// Fallback name base when sanitization yields nothing usable.
pub const DEFAULT_NAME_BASE: &str = "recording";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Sanitize a caller-supplied name base to an alphanumeric/`-`/`_` token.
///
/// Disallowed characters are replaced with `_`, then leading/trailing
/// underscores are trimmed. Falls back to [`DEFAULT_NAME_BASE`] when the
/// result is empty.
pub fn safe_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = stem.trim_matches('_');
    if trimmed.is_empty() {
        DEFAULT_NAME_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Append the second-resolution timestamp to an already-sanitized base.
pub fn timestamped_stem(base: &str, at: NaiveDateTime) -> String {
    format!("{}_{}", base, at.format(TIMESTAMP_FORMAT))
}
