use crate::bounds::TableBounds;
use crate::scan::read_row;
use lotcopy_common::{CellValue, Sheet};

/// One table row between header and footer, `last_column` values wide.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRow {
    pub source_row: u32,
    pub values: Vec<CellValue>,
}

impl DataRow {
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(CellValue::is_blank)
    }
}

/// Rows strictly between header and footer, in order, blank rows skipped.
///
/// Lazy; calling it again restarts from the first row.
pub fn data_rows<'a, S: Sheet + ?Sized>(
    sheet: &'a S,
    bounds: &TableBounds,
) -> impl Iterator<Item = DataRow> + 'a {
    let last_column = bounds.last_column;
    bounds
        .body_rows()
        .map(move |row| DataRow {
            source_row: row,
            values: read_row(sheet, row, last_column),
        })
        .filter(|row| !row.is_blank())
}
