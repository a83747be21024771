use std::path::PathBuf;
use thiserror::Error;

pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Excel file not found: {}", .0.display())]
    ResourceMissing(PathBuf),

    #[error("Could not read sheet names: {0}")]
    SheetListUnreadable(String),

    #[error("Could not load sheet '{sheet}': {reason}")]
    SheetLoadFailure { sheet: String, reason: String },

    #[error("Column '{column}' not found in sheet '{sheet}'")]
    SchemaViolation { sheet: String, column: String },

    #[error("{0}")]
    Selection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ViewerError {
    /// True when the failure is scoped to one sheet and another selection may succeed
    pub fn is_selection_scoped(&self) -> bool {
        matches!(
            self,
            ViewerError::SheetLoadFailure { .. }
                | ViewerError::SchemaViolation { .. }
                | ViewerError::Selection(_)
        )
    }
}
