pub mod build;
pub mod parse;
pub mod profile;

use liftchart_core::error::LiftchartError;
use liftchart_core::profile::builtin;
use liftchart_core::profile::schema::ExtractionProfile;
use std::path::Path;

/// The custom profile if one was given, else the default preset.
pub fn resolve_profile(path: Option<&Path>) -> Result<ExtractionProfile, LiftchartError> {
    match path {
        Some(path) => liftchart_core::profile::load_profile(path),
        None => builtin::default_profile(),
    }
}
