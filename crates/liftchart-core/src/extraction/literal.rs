//! Decoding of PDF string literals recovered from text-showing operators.

use regex::bytes::{Captures, Regex};
use std::sync::LazyLock;

static ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)\\([()nrt])").expect("valid escape pattern"));

/// Decode the raw bytes between the parentheses of a string literal.
///
/// Escaped parentheses are unescaped and `\n`, `\r`, `\t` become spaces.
/// Literals containing a NUL byte are treated as UTF-16BE, anything else as
/// Latin-1. Returns `None` when nothing but whitespace remains.
pub fn decode_literal(raw: &[u8]) -> Option<String> {
    let unescaped = ESCAPE_RE.replace_all(raw, |caps: &Captures| match caps[1][0] {
        b'(' => b"(".to_vec(),
        b')' => b")".to_vec(),
        _ => b" ".to_vec(),
    });

    let text = if unescaped.contains(&0) {
        decode_utf16_be(&unescaped)
    } else {
        decode_latin1(&unescaped)
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Unpaired surrogates and a dangling odd byte are dropped.
fn decode_utf16_be(bytes: &[u8]) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    char::decode_utf16(units).filter_map(Result::ok).collect()
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
