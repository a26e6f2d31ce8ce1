use liftchart_core::dataset::{sqlite, Dataset};
use liftchart_core::error::LiftchartError;
use liftchart_core::extraction::content_stream::ContentStreamExtractor;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::commands::resolve_profile;
use crate::output;

pub fn run(
    input_dir: PathBuf,
    db_file: PathBuf,
    json_file: Option<PathBuf>,
    profile_file: Option<PathBuf>,
) -> Result<(), LiftchartError> {
    let profile = resolve_profile(profile_file.as_deref())?;
    let manuals = discover_manuals(&input_dir)?;
    if manuals.is_empty() {
        return Err(LiftchartError::NoManuals(input_dir));
    }

    let extractor = ContentStreamExtractor::new();
    let mut dataset = Dataset::new();

    for path in &manuals {
        let pdf_bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let extraction = liftchart_core::extract_manual(&pdf_bytes, &extractor, &profile);
        let manual_id = dataset.add_manual(&file_name, &pdf_bytes, &extraction);
        log::info!(
            "{}: manual {}, {} configuration(s), {} load point(s)",
            file_name,
            manual_id,
            extraction.configurations.len(),
            extraction.load_points.len()
        );
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(sqlite::write_file(&db_file, &dataset))?;

    println!("{}", output::table::format_dataset_summary(&dataset));
    println!("Database written to {}", db_file.display());

    if let Some(path) = json_file {
        output::json::write(&path, &dataset)?;
        println!("JSON dataset written to {}", path.display());
    }

    Ok(())
}

/// PDF files directly inside `dir`, sorted by name.
fn discover_manuals(dir: &Path) -> Result<Vec<PathBuf>, LiftchartError> {
    let mut manuals = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| LiftchartError::Io(e.into()))?;
        let is_pdf = entry
            .path()
            .extension()
            .map(|ext| ext == "pdf")
            .unwrap_or(false);
        if entry.file_type().is_file() && is_pdf {
            manuals.push(entry.into_path());
        }
    }

    Ok(manuals)
}
