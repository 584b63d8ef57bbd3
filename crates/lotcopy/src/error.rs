use lotcopy_io::IoError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a source sheet's table could not be located.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("no row whose first non-empty cell is exactly '{token}'")]
    BoundaryNotFound { token: String },

    #[error("header row {row} is empty")]
    EmptyHeader { row: u32 },

    #[error("no row starting with '{prefix}' below header row {header_row}")]
    FooterNotFound { prefix: String, header_row: u32 },

    #[error("no data rows between header row {header_row} and footer row {footer_row}")]
    NoDataRows { header_row: u32, footer_row: u32 },
}

/// Failure confined to one source file; the batch records it and moves on.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Failure on the destination side. Aborts the batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("cannot open destination {}: {source}", path.display())]
    OpenDestination {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    #[error("cannot save destination {}: {source}", path.display())]
    SaveDestination {
        path: PathBuf,
        #[source]
        source: IoError,
    },
}
