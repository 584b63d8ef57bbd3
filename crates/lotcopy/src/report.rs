use crate::merge::MergeOutcome;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    #[default]
    Success,
    /// Every source failed or contributed nothing, and at least one failed.
    Failed,
}

impl BatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

/// A source file that could not be merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: {}", self.path.display(), self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub status: BatchStatus,
    pub rows_added: usize,
    /// Widest source table seen; 0 when nothing was copied.
    pub max_source_width: u32,
    /// Sources merged without a usable Code Lot value.
    pub code_lot_missing: usize,
    pub files_processed: usize,
    pub errors: Vec<FileError>,
}

impl BatchReport {
    pub fn record(&mut self, outcome: &MergeOutcome) {
        self.files_processed += 1;
        self.rows_added += outcome.rows_copied;
        self.max_source_width = self.max_source_width.max(outcome.source_width);
        if outcome.code_lot_missing {
            self.code_lot_missing += 1;
        }
    }

    pub fn record_error(&mut self, path: &Path, error: impl fmt::Display) {
        self.files_processed += 1;
        self.errors.push(FileError {
            path: path.to_path_buf(),
            message: error.to_string(),
        });
    }

    /// Settle the status once every source has been recorded.
    pub fn finish(&mut self) {
        self.status = if !self.errors.is_empty() && self.rows_added == 0 {
            BatchStatus::Failed
        } else {
            BatchStatus::Success
        };
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn write_errors(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            write!(f, "\n{error}")?;
        }
        Ok(())
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == BatchStatus::Failed {
            f.write_str("No data was copied.\n")?;
            return self.write_errors(f);
        }

        write!(f, "Copy finished.\nRows added: {}", self.rows_added)?;
        if self.max_source_width > 0 {
            write!(f, "\nSource columns considered: {}", self.max_source_width)?;
        }
        if self.code_lot_missing > 0 {
            write!(
                f,
                "\nFiles without 'Code Lot' detected: {}",
                self.code_lot_missing
            )?;
        }
        if self.has_errors() {
            f.write_str("\n\nIssues:")?;
            self.write_errors(f)?;
        }
        Ok(())
    }
}
