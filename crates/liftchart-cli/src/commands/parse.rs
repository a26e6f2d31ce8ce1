use liftchart_core::extraction::content_stream::ContentStreamExtractor;
use std::path::PathBuf;

use crate::commands::resolve_profile;
use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    profile_file: Option<PathBuf>,
) -> Result<(), liftchart_core::error::LiftchartError> {
    let profile = resolve_profile(profile_file.as_deref())?;
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = ContentStreamExtractor::new();
    let extraction = liftchart_core::extract_manual(&pdf_bytes, &extractor, &profile);

    if extraction.is_empty() {
        log::warn!("no load-chart data recognised in {}", pdf_file.display());
    }

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            output::json::write(&path, &extraction)?;
            eprintln!(
                "Extracted {} configuration(s) and {} load point(s), written to {}",
                extraction.configurations.len(),
                extraction.load_points.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&extraction)?,
            _ => println!("{}", output::table::format_extraction(&extraction)),
        },
    }

    Ok(())
}
