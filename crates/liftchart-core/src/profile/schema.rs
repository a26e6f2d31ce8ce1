use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tunable vocabulary and limits for load-chart extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Lowercase substrings that mark a chunk as describing a configuration.
    pub config_hints: Vec<String>,
    /// Code-shaped tokens that are never configuration codes (units, vendors).
    pub stop_codes: BTreeSet<String>,
    pub limits: PlausibilityLimits,
    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,
    #[serde(default = "default_min_config_chunk_chars")]
    pub min_config_chunk_chars: usize,
    #[serde(default = "default_min_point_chunk_chars")]
    pub min_point_chunk_chars: usize,
    /// Configuration code used until a chunk names one.
    #[serde(default = "default_unknown_config")]
    pub unknown_config: String,
}

impl ExtractionProfile {
    pub fn is_stop_code(&self, code: &str) -> bool {
        self.stop_codes.contains(code)
    }

    /// Whether an already-lowercased chunk mentions any configuration hint.
    pub fn has_config_hint(&self, lower: &str) -> bool {
        self.config_hints
            .iter()
            .any(|hint| lower.contains(hint.to_lowercase().as_str()))
    }
}

/// Accepted value ranges, inclusive at both ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlausibilityLimits {
    pub boom_length_m: ValueRange,
    pub radius_m: ValueRange,
    pub capacity_t: ValueRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl ValueRange {
    pub fn contains(&self, value: Decimal) -> bool {
        self.min <= value && value <= self.max
    }
}

fn default_snippet_chars() -> usize {
    220
}

fn default_min_config_chunk_chars() -> usize {
    8
}

fn default_min_point_chunk_chars() -> usize {
    4
}

fn default_unknown_config() -> String {
    crate::model::UNKNOWN_CONFIG.to_string()
}
