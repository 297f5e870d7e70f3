use thiserror::Error;

/// Application-level error type.
/// Every variant maps to a stable code so the session can report failures as notices.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable snake-case code surfaced in `error` and `export_failed` notices.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::Validation(_) => "validation_error",
            AppError::Export(_) => "export_error",
            AppError::Storage(_) => "storage_error",
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                "io_error"
            }
            AppError::Serialization(_) => "serialization_error",
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "internal_error"
            }
        }
    }
}
