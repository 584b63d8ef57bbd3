#![cfg(feature = "calamine")]

use crate::traits::SpreadsheetReader;
use lotcopy_common::{CellValue, GridSheet, SheetMut};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};

/// Read-only adapter. Calamine only ever sees cached formula results, so this
/// is the "data only" view of a workbook.
pub struct CalamineAdapter {
    workbook: Sheets<BufReader<File>>,
}

impl CalamineAdapter {
    fn convert_value(data: &Data) -> CellValue {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) if s.is_empty() => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Int(*i),
            Data::Bool(b) => CellValue::Boolean(*b),
            Data::Error(e) => CellValue::Error(e.to_string()),
            Data::DateTime(dt) => CellValue::from_serial_number(dt.as_f64()),
            Data::DateTimeIso(s) => CellValue::Text(s.clone()),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }

    fn range_to_sheet(name: &str, range: &Range<Data>) -> GridSheet {
        let mut sheet = GridSheet::new(name);

        // used_cells() is relative to the range origin, which need not be A1
        let (start_row, start_col) = range.start().unwrap_or_default();

        for (row, col, val) in range.used_cells() {
            let value = Self::convert_value(val);
            if value == CellValue::Empty {
                continue;
            }
            let excel_row = start_row + row as u32 + 1;
            let excel_col = start_col + col as u32 + 1;
            sheet.set_value(excel_row, excel_col, value);
        }

        sheet
    }
}

impl SpreadsheetReader for CalamineAdapter {
    type Error = calamine::Error;

    const BACKEND: &'static str = "calamine";

    fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        let workbook = open_workbook_auto(path)?;
        Ok(Self { workbook })
    }

    fn sheet_names(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.workbook.sheet_names())
    }

    fn read_sheet(&mut self, sheet: &str) -> Result<GridSheet, Self::Error> {
        let range = self.workbook.worksheet_range(sheet)?;
        let grid = Self::range_to_sheet(sheet, &range);
        tracing::debug!(
            sheet,
            cells = grid.cell_count(),
            rows = grid.dimensions().0,
            cols = grid.dimensions().1,
            "calamine sheet loaded"
        );
        Ok(grid)
    }
}
