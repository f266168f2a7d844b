//! Log sanitization utilities
//!
//! Keeps API keys, access tokens and unsigned transactions from being fully
//! exposed in debug/error logs.

/// Maximum number of bytes of a payload included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Secrets no longer than this are masked entirely.
const MASK_MIN_LEN: usize = 12;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a response body for logging.
///
/// Bodies within the limit are returned unchanged; longer ones are cut at a
/// char boundary and suffixed with their total size.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret as `abcd...wxyz`.
///
/// Short secrets reveal nothing and come back as `****`.
pub fn mask_secret(secret: &str) -> String {
    head_tail(secret).unwrap_or_else(|| "****".to_string())
}

/// Mask a secret for on-screen display.
///
/// Same `abcd...wxyz` form as [`mask_secret`], but short secrets are shown
/// as-is since there is nothing meaningful left to hide.
pub fn mask_secret_display(secret: &str) -> String {
    head_tail(secret).unwrap_or_else(|| secret.to_string())
}

/// `abcd...wxyz` for secrets longer than `MASK_MIN_LEN` characters.
fn head_tail(secret: &str) -> Option<String> {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= MASK_MIN_LEN {
        return None;
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    Some(format!("{head}...{tail}"))
}
