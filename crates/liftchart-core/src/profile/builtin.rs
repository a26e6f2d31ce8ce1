use crate::error::LiftchartError;
use crate::profile::schema::ExtractionProfile;

const DEFAULT_PROFILE_JSON: &str = include_str!("../../../../profiles/default.json");

/// Available predefined profiles.
pub const PRESETS: &[&str] = &["default"];

/// Load a predefined profile by name.
pub fn load_preset(name: &str) -> Result<ExtractionProfile, LiftchartError> {
    match name {
        "default" => {
            let profile: ExtractionProfile = serde_json::from_str(DEFAULT_PROFILE_JSON)?;
            Ok(profile)
        }
        _ => Err(LiftchartError::ProfileInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

/// The profile used when no other is given.
pub fn default_profile() -> Result<ExtractionProfile, LiftchartError> {
    load_preset("default")
}
