use regex::bytes::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

static PAGE_OBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)/Type\s*/Page\b").expect("valid page pattern"));

/// Manufacturer and model derived from a manual's file name.
///
/// `Liebherr_LTM_1100-5.2_Load_Charts.pdf` -> (`Liebherr`, `LTM 1100-5.2`).
/// A single token is used as both the manufacturer and the model.
pub fn parse_filename(file_name: &str) -> (Option<String>, String) {
    let stem = file_name
        .strip_suffix(".pdf")
        .unwrap_or(file_name)
        .replace("_Load_Charts", "")
        .replace('_', " ");
    let tokens: Vec<&str> = stem.split_whitespace().collect();

    match tokens.as_slice() {
        [] => (None, String::new()),
        [only] => (Some(only.to_string()), only.to_string()),
        [manufacturer, rest @ ..] => (Some(manufacturer.to_string()), rest.join(" ")),
    }
}

/// Rough page count: the number of `/Type /Page` objects.
///
/// `/Type /Pages` tree nodes are not counted.
pub fn estimate_page_count(pdf_bytes: &[u8]) -> usize {
    PAGE_OBJECT_RE.find_iter(pdf_bytes).count()
}

/// Lowercase hex SHA-256 of the file contents.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
