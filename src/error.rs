use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Temperature data unavailable at {path}: {reason}")]
    DataUnavailable { path: PathBuf, reason: String },

    #[error("Malformed coordinate: {0}")]
    MalformedCoordinate(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl DashboardError {
    pub fn data_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        DashboardError::DataUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Errors that must halt the pipeline and be shown to the user.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, DashboardError::MalformedCoordinate(_))
    }
}
