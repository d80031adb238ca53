//! Hex strings that carry a length-delimited protobuf frame around a UTF-8
//! JSON document.
//!
//! The frame header bytes (field tag, varint length) are not parsed. The
//! decoded text is scanned for the first `{` or `[` and the matching closing
//! bracket is located with a quote- and escape-aware depth counter, so
//! brackets inside string literals never end the scan early.

use serde_json::Value;

/// Shortest string treated as a hex payload.
pub const MIN_HEX_LEN: usize = 20;

/// Even length, at least [`MIN_HEX_LEN`] characters, all hex digits.
#[must_use]
pub fn is_hex_string(s: &str) -> bool {
    s.len() >= MIN_HEX_LEN && s.len() % 2 == 0 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Decode hex to text, replacing invalid UTF-8 sequences. `None` if `hex` is
/// not valid hex.
#[must_use]
pub fn hex_to_utf8(hex: &str) -> Option<String> {
    let bytes = hex::decode(hex).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// Locate the first balanced JSON object or array in `text`.
///
/// Only the bracket kind that opened the document is counted. Returns `None`
/// when no opening bracket exists or the document never closes.
#[must_use]
pub fn find_embedded_json(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let body = &text[start..];
    let open = body.as_bytes()[0];
    let close = if open == b'{' { b'}' } else { b']' };

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, b) in body.bytes().enumerate() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match b {
            b'\\' => escape_next = true,
            b'"' => in_string = !in_string,
            _ if in_string => {}
            _ if b == open => depth += 1,
            _ if b == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(&body[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Hex-decode `hex` and parse the JSON document embedded in it.
///
/// `None` when the string is not hex, contains no balanced document, or the
/// document fails to parse.
#[must_use]
pub fn extract_json_from_hex(hex: &str) -> Option<Value> {
    let text = hex_to_utf8(hex)?;
    let Some(candidate) = find_embedded_json(&text) else {
        tracing::trace!(len = text.len(), "no embedded json in hex payload");
        return None;
    };

    match serde_json::from_str(candidate) {
        Ok(parsed) => {
            tracing::trace!(len = candidate.len(), "extracted embedded json from hex payload");
            Some(parsed)
        }
        Err(error) => {
            tracing::debug!(%error, len = candidate.len(), "embedded json failed to parse");
            None
        }
    }
}
