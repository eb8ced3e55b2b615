//! Error types for scene preset lookups and loading.

use thiserror::Error;

/// Result type alias using SceneError.
pub type SceneResult<T> = Result<T, SceneError>;

/// Primary error type for preset registries.
#[derive(Debug, Error)]
pub enum SceneError {
    // === Lookup Errors ===
    #[error("Projection \"{0}\" not found")]
    ProjectionNotFound(String),

    #[error("Basemap \"{0}\" not found")]
    BasemapNotFound(String),

    // === Load Errors ===
    #[error("Unknown {kind} \"{name}\" referenced by \"{referenced_by}\"")]
    UnknownReference {
        kind: &'static str,
        name: String,
        referenced_by: String,
    },

    #[error("Duplicate {kind} name: {name}")]
    DuplicateName { kind: &'static str, name: String },

    #[error("No {0} presets defined")]
    EmptyRegistry(&'static str),

    #[error("Failed to parse preset config: {0}")]
    ConfigParse(String),

    #[error("Failed to read preset config: {0}")]
    Io(String),
}

impl From<serde_yaml::Error> for SceneError {
    fn from(err: serde_yaml::Error) -> Self {
        SceneError::ConfigParse(format!("YAML error: {}", err))
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        SceneError::ConfigParse(format!("JSON error: {}", err))
    }
}
