pub mod configurations;
pub mod load_points;
pub mod values;

use regex::Regex;
use std::sync::LazyLock;

/// Layout boundaries that survive text flattening: wide gaps, ` - `, ` | `.
static CHUNK_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}|\s\|\s|\s-\s").expect("valid chunk split pattern"));

/// Split flattened document text into candidate chunks, preserving order.
///
/// Empty pieces are kept; the extractors drop them by length.
pub fn segment_chunks(text: &str) -> Vec<&str> {
    CHUNK_SPLIT_RE.split(text).collect()
}

/// Collapse internal whitespace runs to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The first `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_wide_gaps() {
        let chunks = segment_chunks("Main boom   12.0 m  8.0 m");
        assert_eq!(chunks, vec!["Main boom", "12.0 m", "8.0 m"]);
    }

    #[test]
    fn test_split_on_hyphen_and_pipe() {
        let chunks = segment_chunks("MB Hauptausleger - 12 m 40 t | 14 m 35 t");
        assert_eq!(chunks, vec!["MB Hauptausleger", "12 m 40 t", "14 m 35 t"]);
    }

    #[test]
    fn test_hyphenated_words_not_split() {
        let chunks = segment_chunks("swing-away jib MB-LJ");
        assert_eq!(chunks, vec!["swing-away jib MB-LJ"]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(segment_chunks(""), vec![""]);
    }

    #[test]
    fn test_normalize_ws() {
        assert_eq!(normalize_ws("  a \t b\n c  "), "a b c");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("Länge", 2), "Lä");
        assert_eq!(truncate_chars("ab", 10), "ab");
    }
}
