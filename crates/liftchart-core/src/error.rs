use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LiftchartError {
    #[error("failed to load extraction profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid extraction profile: {0}")]
    ProfileInvalid(String),

    #[error("no PDF manuals found in {0}")]
    NoManuals(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
