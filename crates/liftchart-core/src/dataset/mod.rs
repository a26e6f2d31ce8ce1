pub mod manual;
pub mod sqlite;

use crate::model::ManualExtraction;
use manual::{estimate_page_count, parse_filename, sha256_hex};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Characters of document text kept on each manual row.
pub const TEXT_SAMPLE_CHARS: usize = 500;

/// One processed PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualRecord {
    pub id: u64,
    pub file_name: String,
    pub manufacturer: Option<String>,
    pub model: String,
    pub estimated_page_count: usize,
    pub file_size_bytes: u64,
    pub sha256: String,
    pub extracted_text_sample: String,
}

/// A configuration row, unique per `(manual_id, config_code)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationRow {
    pub id: u64,
    pub manual_id: u64,
    pub config_code: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadPointRow {
    pub id: u64,
    pub manual_id: u64,
    pub config_code: String,
    pub boom_length_m: Option<Decimal>,
    pub radius_m: Option<Decimal>,
    pub capacity_t: Decimal,
    pub raw_snippet: String,
}

/// The relational dataset: manuals plus their configurations and load points.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub manuals: Vec<ManualRecord>,
    pub configurations: Vec<ConfigurationRow>,
    pub load_points: Vec<LoadPointRow>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one manual and its extracted records; returns the manual id.
    ///
    /// Ids are sequential per table, starting at 1. Configurations are
    /// written in code order, load points in extraction order.
    pub fn add_manual(
        &mut self,
        file_name: &str,
        pdf_bytes: &[u8],
        extraction: &ManualExtraction,
    ) -> u64 {
        let manual_id = self.manuals.len() as u64 + 1;
        let (manufacturer, model) = parse_filename(file_name);

        self.manuals.push(ManualRecord {
            id: manual_id,
            file_name: file_name.to_string(),
            manufacturer,
            model,
            estimated_page_count: estimate_page_count(pdf_bytes),
            file_size_bytes: pdf_bytes.len() as u64,
            sha256: sha256_hex(pdf_bytes),
            extracted_text_sample: extraction.text.sample(TEXT_SAMPLE_CHARS),
        });

        for (code, description) in &extraction.configurations {
            let id = self.configurations.len() as u64 + 1;
            self.configurations.push(ConfigurationRow {
                id,
                manual_id,
                config_code: code.clone(),
                description: description.clone(),
            });
        }

        for point in &extraction.load_points {
            let id = self.load_points.len() as u64 + 1;
            self.load_points.push(LoadPointRow {
                id,
                manual_id,
                config_code: point.config_code.clone(),
                boom_length_m: point.boom_length_m,
                radius_m: point.radius_m,
                capacity_t: point.capacity_t,
                raw_snippet: point.raw_snippet.clone(),
            });
        }

        manual_id
    }

    /// Configuration rows belonging to one manual.
    pub fn configurations_for(&self, manual_id: u64) -> impl Iterator<Item = &ConfigurationRow> {
        self.configurations
            .iter()
            .filter(move |c| c.manual_id == manual_id)
    }

    /// Load point rows belonging to one manual.
    pub fn load_points_for(&self, manual_id: u64) -> impl Iterator<Item = &LoadPointRow> {
        self.load_points
            .iter()
            .filter(move |p| p.manual_id == manual_id)
    }
}
