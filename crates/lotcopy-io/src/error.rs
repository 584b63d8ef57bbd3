use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    /// Failure raised by a backend crate, tagged with the backend that raised it.
    #[error("{backend}: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },

    #[error("sheet '{0}' not found")]
    SheetNotFound(String),

    #[error("workbook has no sheets")]
    NoSheets,

    #[error("{}: file not found", .0.display())]
    FileNotFound(PathBuf),
}

impl IoError {
    pub fn from_backend<E: std::error::Error>(backend: &'static str, err: E) -> Self {
        IoError::Backend {
            backend,
            message: err.to_string(),
        }
    }
}
