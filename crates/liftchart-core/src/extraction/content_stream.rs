use crate::extraction::literal::decode_literal;
use crate::extraction::TextExtractor;
use crate::model::DocumentText;
use flate2::read::ZlibDecoder;
use regex::bytes::Regex;
use std::io::Read;
use std::sync::LazyLock;

/// `stream` keyword plus its end-of-line, the opener of a content stream.
static STREAM_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)stream\r?\n").expect("valid stream pattern"));

const STREAM_END: &[u8] = b"endstream";

/// Text extraction straight from FlateDecode content streams.
///
/// No object graph, fonts or layout: every zlib stream is inflated and the
/// literals of its `Tj`/`TJ` operators are collected in byte order.
pub struct ContentStreamExtractor;

impl ContentStreamExtractor {
    pub fn new() -> Self {
        ContentStreamExtractor
    }
}

impl Default for ContentStreamExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for ContentStreamExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> DocumentText {
        let mut fragments = Vec::new();
        let mut text_streams = 0usize;

        for (offset, candidate) in stream_candidates(pdf_bytes) {
            let inflated = match inflate(candidate) {
                Ok(data) => data,
                Err(e) => {
                    log::trace!("skipping stream at byte {offset}: {e}");
                    continue;
                }
            };

            if !has_text_operators(&inflated) {
                continue;
            }

            text_streams += 1;
            fragments.extend(text_fragments(&inflated));
        }

        log::debug!(
            "recovered {} text fragment(s) from {} text stream(s)",
            fragments.len(),
            text_streams
        );

        DocumentText::from_fragments(fragments)
    }

    fn backend_name(&self) -> &str {
        "content-stream"
    }
}

/// Locate raw stream bodies, paired with the byte offset where each starts.
///
/// A body runs to the next `endstream`; one trailing EOL before it is
/// stripped. Openers without a terminator are dropped.
pub fn stream_candidates(data: &[u8]) -> Vec<(usize, &[u8])> {
    let mut out = Vec::new();

    for m in STREAM_START_RE.find_iter(data) {
        // the tail of `endstream` is not an opener
        if data[..m.start()].ends_with(b"end") {
            continue;
        }

        let start = m.end();
        let Some(len) = find_bytes(&data[start..], STREAM_END) else {
            continue;
        };

        let mut body = &data[start..start + len];
        if let Some(stripped) = body.strip_suffix(b"\r\n") {
            body = stripped;
        } else if let Some(stripped) = body.strip_suffix(b"\n") {
            body = stripped;
        }
        out.push((start, body));
    }

    out
}

/// Inflate a zlib-wrapped stream body.
pub fn inflate(body: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(body);
    let mut output = Vec::new();
    decoder.read_to_end(&mut output)?;
    Ok(output)
}

fn has_text_operators(data: &[u8]) -> bool {
    find_bytes(data, b"Tj").is_some() || find_bytes(data, b"TJ").is_some()
}

/// Decoded, non-empty literals of every text-show operator, in stream order.
///
/// Literals may hold balanced unescaped parentheses and backslash escapes,
/// so they are scanned with a depth counter rather than matched by pattern.
pub fn text_fragments(content: &[u8]) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut pos = 0;

    while pos < content.len() {
        match content[pos] {
            b'(' => {
                let Some(close) = literal_end(content, pos) else {
                    pos += 1;
                    continue;
                };
                if followed_by(content, close + 1, b"Tj") {
                    fragments.extend(decode_literal(&content[pos + 1..close]));
                }
                pos = close + 1;
            }
            b'[' => {
                let Some((literals, close)) = array_literals(content, pos) else {
                    pos += 1;
                    continue;
                };
                if followed_by(content, close + 1, b"TJ") {
                    for (start, end) in literals {
                        fragments.extend(decode_literal(&content[start..end]));
                    }
                }
                pos = close + 1;
            }
            _ => pos += 1,
        }
    }

    fragments
}

/// Index of the `)` closing the literal that opens at `open`.
fn literal_end(content: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;

    while i < content.len() {
        match content[i] {
            b'\\' => i += 1,
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Body ranges of the literals in the array opening at `open`, plus the
/// index of its closing `]`. Kerning numbers between literals are skipped.
fn array_literals(content: &[u8], open: usize) -> Option<(Vec<(usize, usize)>, usize)> {
    let mut literals = Vec::new();
    let mut i = open + 1;

    while i < content.len() {
        match content[i] {
            b']' => return Some((literals, i)),
            b'(' => {
                let close = literal_end(content, i)?;
                literals.push((i + 1, close));
                i = close;
            }
            _ => {}
        }
        i += 1;
    }

    None
}

fn followed_by(content: &[u8], from: usize, operator: &[u8]) -> bool {
    let rest = content.get(from..).unwrap_or_default();
    let skip = rest
        .iter()
        .take_while(|b| b.is_ascii_whitespace())
        .count();
    rest[skip..].starts_with(operator)
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn deflate(data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    fn pdf_with_streams(streams: &[Vec<u8>]) -> Vec<u8> {
        let mut pdf = b"%PDF-1.4\n".to_vec();
        for (i, body) in streams.iter().enumerate() {
            let header = format!("{} 0 obj\n<< /Length {} >>\nstream\r\n", i + 1, body.len());
            pdf.extend_from_slice(header.as_bytes());
            pdf.extend_from_slice(body);
            pdf.extend_from_slice(b"\r\nendstream\nendobj\n");
        }
        pdf.extend_from_slice(b"%%EOF\n");
        pdf
    }

    #[test]
    fn test_hello_round_trip() {
        let pdf = pdf_with_streams(&[deflate(b"BT /F1 12 Tf (Hello) Tj ET")]);
        let text = ContentStreamExtractor::new().extract_text(&pdf);
        assert!(text.as_str().contains("Hello"));
    }

    #[test]
    fn test_no_streams_is_empty() {
        let text = ContentStreamExtractor::new().extract_text(b"not a pdf at all");
        assert!(text.is_empty());
    }

    #[test]
    fn test_uncompressed_stream_skipped() {
        let pdf = pdf_with_streams(&[b"BT (Plain) Tj ET".to_vec()]);
        assert!(ContentStreamExtractor::new().extract_text(&pdf).is_empty());
    }

    #[test]
    fn test_non_text_stream_skipped() {
        let pdf = pdf_with_streams(&[deflate(b"0 0 m 10 10 l S (label)")]);
        assert!(ContentStreamExtractor::new().extract_text(&pdf).is_empty());
    }

    #[test]
    fn test_fragment_order_across_streams() {
        let pdf = pdf_with_streams(&[
            deflate(b"BT (Main boom) Tj ET"),
            deflate(b"garbage that is not a text stream"),
            deflate(b"BT [(12.0 m) -250 (8.0 m)] TJ (45 t) Tj ET"),
        ]);
        let text = ContentStreamExtractor::new().extract_text(&pdf);
        assert_eq!(text.as_str(), "Main boom 12.0 m 8.0 m 45 t");
    }

    #[test]
    fn test_candidates_strip_one_eol() {
        let data = b"obj stream\nabc\r\nendstream obj stream\r\nxyz\nendstream";
        let bodies: Vec<&[u8]> = stream_candidates(data).into_iter().map(|(_, b)| b).collect();
        assert_eq!(bodies, vec![&b"abc"[..], &b"xyz"[..]]);
    }

    #[test]
    fn test_unterminated_stream_dropped() {
        assert!(stream_candidates(b"stream\nabc").is_empty());
    }

    #[test]
    fn test_endstream_is_not_an_opener() {
        let data = b"stream\na\nendstream\nendobj";
        assert_eq!(stream_candidates(data).len(), 1);
    }

    #[test]
    fn test_text_fragments_escaped_paren() {
        let frags = text_fragments(br"BT (Jib \(luffing\)) Tj ET");
        assert_eq!(frags, vec!["Jib (luffing)"]);
    }

    #[test]
    fn test_text_fragments_array_with_kerning() {
        let frags = text_fragments(b"[(Haupt) 120 (ausleger) -30 ( )] TJ");
        assert_eq!(frags, vec!["Haupt", "ausleger"]);
    }

    #[test]
    fn test_text_fragments_nested_parens_tj() {
        let frags = text_fragments(b"BT (Hauptausleger (HA) 12 m) Tj ET");
        assert_eq!(frags, vec!["Hauptausleger (HA) 12 m"]);
    }

    #[test]
    fn test_text_fragments_nested_parens_tj_array() {
        let frags = text_fragments(b"BT [(Jib (J) 20 m) -120 (8.0 m)] TJ ET");
        assert_eq!(frags, vec!["Jib (J) 20 m", "8.0 m"]);
    }

    #[test]
    fn test_text_fragments_escape_inside_nesting() {
        let frags = text_fragments(br"(Boom (A\) 1) 2) Tj");
        assert_eq!(frags, vec!["Boom (A) 1) 2"]);
    }

    #[test]
    fn test_text_fragments_literal_without_operator_ignored() {
        let frags = text_fragments(b"(label (x)) Tf [(a)] Tz (shown) Tj");
        assert_eq!(frags, vec!["shown"]);
    }

    #[test]
    fn test_text_fragments_unbalanced_literal_keeps_later_shows() {
        let frags = text_fragments(b"((open (Main boom) Tj");
        assert_eq!(frags, vec!["Main boom"]);
    }

    #[test]
    fn test_inflate_rejects_garbage() {
        assert!(inflate(b"\x00\x01\x02garbage").is_err());
    }
}
