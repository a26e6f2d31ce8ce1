use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration code used before any chunk names a configuration.
pub const UNKNOWN_CONFIG: &str = "UNKNOWN";

/// Description stored for the sentinel configuration.
pub const UNKNOWN_CONFIG_DESCRIPTION: &str =
    "Configuration not confidently identified from extracted text.";

/// Configuration code -> description, first chunk wins.
pub type Configurations = BTreeMap<String, String>;

/// Flattened, whitespace-collapsed text of one PDF document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentText(String);

impl DocumentText {
    /// Join fragments with single spaces and collapse all whitespace runs.
    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for fragment in fragments {
            for word in fragment.as_ref().split_whitespace() {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(word);
            }
        }
        DocumentText(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first `max_chars` characters, for previews and manual records.
    pub fn sample(&self, max_chars: usize) -> String {
        self.0.chars().take(max_chars).collect()
    }
}

/// One boom length / radius / capacity reading from a load chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadPoint {
    pub config_code: String,
    pub boom_length_m: Option<Decimal>,
    pub radius_m: Option<Decimal>,
    pub capacity_t: Decimal,
    pub raw_snippet: String,
}

/// Everything extracted from a single manual.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualExtraction {
    pub text: DocumentText,
    /// Never empty: falls back to the `UNKNOWN` sentinel.
    pub configurations: Configurations,
    pub load_points: Vec<LoadPoint>,
}

impl ManualExtraction {
    /// True when neither a configuration nor a load point was identified.
    pub fn is_empty(&self) -> bool {
        self.load_points.is_empty()
            && self
                .configurations
                .values()
                .all(|d| d == UNKNOWN_CONFIG_DESCRIPTION)
    }
}
