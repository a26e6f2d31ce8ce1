use liftchart_core::dataset::Dataset;
use liftchart_core::model::ManualExtraction;
use rust_decimal::Decimal;
use std::fmt::Write;

/// Human-readable view of one manual's extraction.
pub fn format_extraction(extraction: &ManualExtraction) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Configurations ===\n");
    let code_width = extraction
        .configurations
        .keys()
        .map(|c| c.len())
        .max()
        .unwrap_or(4)
        .max(4);
    for (code, description) in &extraction.configurations {
        let _ = writeln!(out, "  {:<width$}  {}", code, description, width = code_width);
    }

    let _ = writeln!(out, "\n=== Load points ({}) ===\n", extraction.load_points.len());
    if extraction.load_points.is_empty() {
        let _ = writeln!(out, "  (none recognised)");
        return out;
    }

    let cfg_width = extraction
        .load_points
        .iter()
        .map(|p| p.config_code.len())
        .max()
        .unwrap_or(6)
        .max(6);
    let _ = writeln!(
        out,
        "  {:<width$}  {:>8}  {:>8}  {:>9}",
        "Config",
        "Boom m",
        "Radius m",
        "Cap. t",
        width = cfg_width
    );
    let _ = writeln!(out, "  {}", "-".repeat(cfg_width + 33));
    for p in &extraction.load_points {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>8}  {:>8}  {:>9}",
            p.config_code,
            optional(p.boom_length_m),
            optional(p.radius_m),
            p.capacity_t.to_string(),
            width = cfg_width
        );
    }

    out
}

/// One line per manual with record counts.
pub fn format_dataset_summary(dataset: &Dataset) -> String {
    let mut out = String::new();
    let name_width = dataset
        .manuals
        .iter()
        .map(|m| m.file_name.len())
        .max()
        .unwrap_or(10);

    for manual in &dataset.manuals {
        let configs = dataset.configurations_for(manual.id).count();
        let points = dataset.load_points_for(manual.id).count();
        let _ = writeln!(
            out,
            "  {:<width$}  {:>4} page(s)  {:>3} config(s)  {:>5} point(s)",
            manual.file_name,
            manual.estimated_page_count,
            configs,
            points,
            width = name_width
        );
    }

    out
}

fn optional(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}
