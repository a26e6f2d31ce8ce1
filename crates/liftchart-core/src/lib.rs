pub mod dataset;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod profile;

use extraction::TextExtractor;
use model::{DocumentText, ManualExtraction};
use parsing::configurations::{extract_configurations, with_sentinel};
use parsing::load_points::extract_load_points;
use parsing::segment_chunks;
use profile::schema::ExtractionProfile;

/// Main API entry point: extract configurations and load points from a PDF.
///
/// Never fails. A document without recoverable text yields only the
/// sentinel configuration and no load points.
pub fn extract_manual(
    pdf_bytes: &[u8],
    extractor: &dyn TextExtractor,
    profile: &ExtractionProfile,
) -> ManualExtraction {
    let text = extractor.extract_text(pdf_bytes);
    log::debug!(
        "{} backend recovered {} chars of text",
        extractor.backend_name(),
        text.as_str().chars().count()
    );
    extract_from_text(text, profile)
}

/// Run segmentation and both extractors over already-flattened text.
///
/// Both extractors see the same chunk sequence so the configuration
/// carried between chunks lines up with the configuration labels.
pub fn extract_from_text(text: DocumentText, profile: &ExtractionProfile) -> ManualExtraction {
    let chunks = segment_chunks(text.as_str());
    log::debug!("segmented text into {} chunk(s)", chunks.len());

    let configurations = with_sentinel(extract_configurations(&chunks, profile), profile);
    let load_points = extract_load_points(&chunks, profile);

    ManualExtraction {
        text,
        configurations,
        load_points,
    }
}
