pub mod content_stream;
pub mod literal;

use crate::model::DocumentText;

/// Trait for PDF text extraction backends.
///
/// Extraction is best effort: a document with no recoverable text yields an
/// empty `DocumentText`, never an error.
pub trait TextExtractor: Send + Sync {
    /// Recover the displayed text of a PDF, in content-stream order.
    fn extract_text(&self, pdf_bytes: &[u8]) -> DocumentText;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
