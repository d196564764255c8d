//! Canonical header names.
//!
//! Matches the MIME convention: first letter and every letter following a
//! hyphen are uppercase, the rest lowercase (`x-api-key` → `X-Api-Key`).

/// Returns true for bytes allowed in an HTTP header field name (RFC 7230 `tchar`).
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_'
                | b'`' | b'|' | b'~'
        )
}

/// Trim and canonicalize a configured header name.
///
/// Returns `None` when nothing is left after trimming. Names with bytes that
/// are not valid token characters are returned trimmed but otherwise untouched.
pub fn canonical_header_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    if !name.bytes().all(is_token_byte) {
        return Some(name.to_string());
    }

    let mut upper = true;
    let canonical: String = name
        .chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect();
    Some(canonical)
}
