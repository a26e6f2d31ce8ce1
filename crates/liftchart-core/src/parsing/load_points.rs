//! Load point extraction from the chunk sequence.
//!
//! Each chunk runs through an ordered list of [`LoadPointRule`]s. A rule owns
//! its pattern and plausibility check and hands back a [`Reading`]; the
//! extractor turns readings into [`LoadPoint`]s under the configuration code
//! currently held in [`ChartState`]. Several rules may fire on one chunk, so
//! the result is deduplicated at the end.

use crate::model::LoadPoint;
use crate::parsing::values::plausible;
use crate::parsing::{normalize_ws, truncate_chars};
use crate::profile::schema::{ExtractionProfile, PlausibilityLimits};
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Configuration code at the very start of a chunk.
static LEADING_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{1,4}(?:-[A-Z]{1,3})?)\b").expect("valid leading code pattern")
});

/// boom m, radius m, capacity t
static TRIPLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d{1,4}(?:[.,]\d+)?)\s*m\s+(\d{1,4}(?:[.,]\d+)?)\s*m\s+(\d{1,4}(?:[.,]\d+)?)\s*t\b",
    )
    .expect("valid triple pattern")
});

static METERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,4}(?:[.,]\d+)?)\s*m\b").expect("valid meter pattern"));

static TONNES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,4}(?:[.,]\d+)?)\s*t\b").expect("valid tonne pattern"));

/// Chunk-to-chunk state: the configuration the following rows belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartState {
    pub current_config: String,
}

impl ChartState {
    pub fn new(initial_config: impl Into<String>) -> Self {
        ChartState {
            current_config: initial_config.into(),
        }
    }

    /// Switch configuration if the chunk starts with a code token.
    pub fn observe(&mut self, chunk: &str) {
        if let Some(caps) = LEADING_CODE_RE.captures(chunk) {
            self.current_config = caps[1].to_string();
        }
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new(crate::model::UNKNOWN_CONFIG)
    }
}

/// Numbers a rule recovered from one chunk, already range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub boom_length_m: Option<Decimal>,
    pub radius_m: Option<Decimal>,
    pub capacity_t: Decimal,
}

/// One chart layout the extractor knows how to read.
pub trait LoadPointRule: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &str;

    /// Match the chunk and validate the values, or return `None`.
    fn apply(&self, chunk: &str, limits: &PlausibilityLimits) -> Option<Reading>;
}

/// `<boom> m <radius> m <capacity> t`, the full row layout.
pub struct TripleRule;

impl LoadPointRule for TripleRule {
    fn name(&self) -> &str {
        "triple"
    }

    fn apply(&self, chunk: &str, limits: &PlausibilityLimits) -> Option<Reading> {
        TRIPLE_RE.captures_iter(chunk).find_map(|caps| {
            let boom = plausible(&caps[1], &limits.boom_length_m)?;
            let radius = plausible(&caps[2], &limits.radius_m)?;
            let capacity = plausible(&caps[3], &limits.capacity_t)?;
            Some(Reading {
                boom_length_m: Some(boom),
                radius_m: Some(radius),
                capacity_t: capacity,
            })
        })
    }
}

/// One length and one capacity anywhere in the chunk; radius is unknown.
pub struct FallbackRule;

impl LoadPointRule for FallbackRule {
    fn name(&self) -> &str {
        "fallback"
    }

    fn apply(&self, chunk: &str, limits: &PlausibilityLimits) -> Option<Reading> {
        let boom = METERS_RE
            .captures_iter(chunk)
            .find_map(|caps| plausible(&caps[1], &limits.boom_length_m))?;
        let capacity = TONNES_RE
            .captures_iter(chunk)
            .find_map(|caps| plausible(&caps[1], &limits.capacity_t))?;
        Some(Reading {
            boom_length_m: Some(boom),
            radius_m: None,
            capacity_t: capacity,
        })
    }
}

/// Runs the rule list over a chunk sequence.
pub struct LoadPointExtractor {
    rules: Vec<Box<dyn LoadPointRule>>,
}

impl LoadPointExtractor {
    pub fn new(rules: Vec<Box<dyn LoadPointRule>>) -> Self {
        LoadPointExtractor { rules }
    }

    /// Append a rule; it runs after the existing ones.
    pub fn with_rule(mut self, rule: impl LoadPointRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Extract and deduplicate load points, carrying `state` across chunks.
    pub fn extract(
        &self,
        chunks: &[&str],
        profile: &ExtractionProfile,
        state: &mut ChartState,
    ) -> Vec<LoadPoint> {
        let mut points = Vec::new();

        for chunk in chunks {
            let text = normalize_ws(chunk);
            if text.chars().count() < profile.min_point_chunk_chars {
                continue;
            }

            state.observe(&text);

            for rule in &self.rules {
                if let Some(reading) = rule.apply(&text, &profile.limits) {
                    log::trace!("rule '{}' matched: {}", rule.name(), text);
                    points.push(LoadPoint {
                        config_code: state.current_config.clone(),
                        boom_length_m: reading.boom_length_m,
                        radius_m: reading.radius_m,
                        capacity_t: reading.capacity_t,
                        raw_snippet: truncate_chars(&text, profile.snippet_chars),
                    });
                }
            }
        }

        let total = points.len();
        let unique = dedup_load_points(points);
        log::debug!(
            "extracted {} load point(s), {} after deduplication",
            total,
            unique.len()
        );
        unique
    }
}

impl Default for LoadPointExtractor {
    fn default() -> Self {
        LoadPointExtractor::new(vec![Box::new(TripleRule), Box::new(FallbackRule)])
    }
}

/// Extract load points with the default rules, starting from the profile's
/// unknown configuration code.
pub fn extract_load_points(chunks: &[&str], profile: &ExtractionProfile) -> Vec<LoadPoint> {
    let mut state = ChartState::new(profile.unknown_config.as_str());
    LoadPointExtractor::default().extract(chunks, profile, &mut state)
}

/// Drop points whose `(config, boom, radius, capacity)` was already seen.
pub fn dedup_load_points(points: Vec<LoadPoint>) -> Vec<LoadPoint> {
    let mut seen = HashSet::new();
    points
        .into_iter()
        .filter(|p| {
            seen.insert((
                p.config_code.clone(),
                p.boom_length_m,
                p.radius_m,
                p.capacity_t,
            ))
        })
        .collect()
}
