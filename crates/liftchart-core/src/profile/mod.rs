pub mod builtin;
pub mod schema;

use crate::error::LiftchartError;
use schema::{ExtractionProfile, ValueRange};
use std::path::Path;

/// Load an extraction profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<ExtractionProfile, LiftchartError> {
    let content = std::fs::read_to_string(path).map_err(|e| LiftchartError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse an extraction profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<ExtractionProfile, LiftchartError> {
    let profile: ExtractionProfile =
        serde_json::from_str(json).map_err(|e| LiftchartError::ProfileLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a profile is well-formed.
pub fn validate_profile(profile: &ExtractionProfile) -> Result<(), LiftchartError> {
    if profile.config_hints.is_empty() {
        return Err(LiftchartError::ProfileInvalid(
            "config_hints must not be empty".into(),
        ));
    }

    if profile.config_hints.iter().any(|h| h.trim().is_empty()) {
        return Err(LiftchartError::ProfileInvalid(
            "config_hints must not contain blank entries".into(),
        ));
    }

    if profile.stop_codes.iter().any(|c| c.trim().is_empty()) {
        return Err(LiftchartError::ProfileInvalid(
            "stop_codes must not contain blank entries".into(),
        ));
    }

    check_range("boom_length_m", &profile.limits.boom_length_m)?;
    check_range("radius_m", &profile.limits.radius_m)?;
    check_range("capacity_t", &profile.limits.capacity_t)?;

    if profile.snippet_chars == 0 {
        return Err(LiftchartError::ProfileInvalid(
            "snippet_chars must be positive".into(),
        ));
    }

    if profile.unknown_config.trim().is_empty() {
        return Err(LiftchartError::ProfileInvalid(
            "unknown_config must not be empty".into(),
        ));
    }

    Ok(())
}

fn check_range(field: &str, range: &ValueRange) -> Result<(), LiftchartError> {
    if range.min.is_sign_negative() {
        return Err(LiftchartError::ProfileInvalid(format!(
            "limit '{}' has negative minimum {}",
            field, range.min
        )));
    }
    if range.min > range.max {
        return Err(LiftchartError::ProfileInvalid(format!(
            "limit '{}' has min {} above max {}",
            field, range.min, range.max
        )));
    }
    Ok(())
}
