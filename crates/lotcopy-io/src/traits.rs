use crate::IoError;
use lotcopy_common::{CellValue, GridSheet};
use std::fmt;
use std::path::Path;

/// Which worksheet of a workbook to operate on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SheetSelector {
    /// The tab the workbook opens on; the first tab when the backend does not
    /// record one.
    #[default]
    Active,
    First,
    Named(String),
}

impl SheetSelector {
    /// `active` is the backend's active sheet name, if it tracks one.
    pub fn resolve(&self, names: &[String], active: Option<&str>) -> Result<String, IoError> {
        match self {
            SheetSelector::Active => match active {
                Some(name) if names.iter().any(|n| n == name) => Ok(name.to_string()),
                _ => SheetSelector::First.resolve(names, None),
            },
            SheetSelector::First => names.first().cloned().ok_or(IoError::NoSheets),
            SheetSelector::Named(name) => names
                .iter()
                .find(|n| *n == name)
                .cloned()
                .ok_or_else(|| IoError::SheetNotFound(name.clone())),
        }
    }
}

impl From<Option<String>> for SheetSelector {
    fn from(name: Option<String>) -> Self {
        name.map_or(SheetSelector::Active, SheetSelector::Named)
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::Active => f.write_str("<active sheet>"),
            SheetSelector::First => f.write_str("<first sheet>"),
            SheetSelector::Named(name) => f.write_str(name),
        }
    }
}

pub trait SpreadsheetReader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short name used to tag [`IoError::Backend`] failures.
    const BACKEND: &'static str;

    fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error>
    where
        Self: Sized;

    fn sheet_names(&self) -> Result<Vec<String>, Self::Error>;

    /// Name of the sheet the workbook opens on, when the format records it.
    fn active_sheet(&self) -> Option<String> {
        None
    }

    /// Materialize one sheet's values. Formula cells yield their cached results.
    fn read_sheet(&mut self, sheet: &str) -> Result<GridSheet, Self::Error>;
}

pub trait SpreadsheetWriter {
    type Error: std::error::Error + Send + Sync + 'static;

    fn write_cell(
        &mut self,
        sheet: &str,
        row: u32,
        col: u32,
        value: CellValue,
    ) -> Result<(), Self::Error>;

    /// Write back to the path the workbook was opened from.
    fn save(&mut self) -> Result<(), Self::Error>;

    fn save_as_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Self::Error>;
}

/// Resolve `selector` against the reader's sheets and read that sheet.
pub fn read_selected_sheet<R: SpreadsheetReader>(
    reader: &mut R,
    selector: &SheetSelector,
) -> Result<GridSheet, IoError> {
    let names = reader
        .sheet_names()
        .map_err(|e| IoError::from_backend(R::BACKEND, e))?;
    let active = reader.active_sheet();
    let name = selector.resolve(&names, active.as_deref())?;
    reader
        .read_sheet(&name)
        .map_err(|e| IoError::from_backend(R::BACKEND, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["Recap".to_string(), "Feuil1".to_string()]
    }

    #[test]
    fn first_selector_takes_first_tab() {
        assert_eq!(SheetSelector::First.resolve(&names(), None).unwrap(), "Recap");
        assert_eq!(
            SheetSelector::First.resolve(&names(), Some("Feuil1")).unwrap(),
            "Recap"
        );
    }

    #[test]
    fn named_selector_is_exact() {
        let selector = SheetSelector::Named("Feuil1".into());
        assert_eq!(selector.resolve(&names(), Some("Recap")).unwrap(), "Feuil1");

        let missing = SheetSelector::Named("feuil1".into());
        let err = missing.resolve(&names(), None).unwrap_err();
        assert_eq!(err.to_string(), "sheet 'feuil1' not found");
    }

    #[test]
    fn empty_workbook_has_no_first_sheet() {
        assert!(matches!(
            SheetSelector::Active.resolve(&[], None),
            Err(IoError::NoSheets)
        ));
    }

    #[test]
    fn active_selector_follows_backend() {
        let active = SheetSelector::default();
        assert_eq!(active, SheetSelector::Active);
        assert_eq!(active.resolve(&names(), Some("Feuil1")).unwrap(), "Feuil1");
        // untracked or stale active tab falls back to the first tab
        assert_eq!(active.resolve(&names(), None).unwrap(), "Recap");
        assert_eq!(active.resolve(&names(), Some("Gone")).unwrap(), "Recap");
        assert_eq!(SheetSelector::from(None), SheetSelector::Active);
    }
}
