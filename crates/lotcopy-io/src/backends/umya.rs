#![cfg(feature = "umya")]

use crate::traits::{SpreadsheetReader, SpreadsheetWriter};
use lotcopy_common::{CellValue, GridSheet, Sheet, SheetMut};
use std::path::{Path, PathBuf};
use umya_spreadsheet::{CellRawValue, Spreadsheet, Worksheet, reader::xlsx};

const DATE_FORMAT: &str = "yyyy-mm-dd";
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";
const TIME_FORMAT: &str = "hh:mm:ss";

/// Read-write `.xlsx` adapter. The whole workbook is held in memory; nothing
/// touches disk until [`SpreadsheetWriter::save`] or `save_as_path`.
pub struct UmyaAdapter {
    workbook: Spreadsheet,
    original_path: Option<PathBuf>,
}

impl UmyaAdapter {
    pub fn from_spreadsheet(workbook: Spreadsheet) -> Self {
        Self {
            workbook,
            original_path: None,
        }
    }

    fn convert_cell_value(cv: &umya_spreadsheet::CellValue) -> CellValue {
        let raw = cv.get_raw_value();
        if raw.is_empty() {
            return CellValue::Empty;
        }
        if raw.is_error() {
            return CellValue::Error(cv.get_value().to_string());
        }
        match raw {
            CellRawValue::Numeric(n) => CellValue::Number(*n),
            CellRawValue::Bool(b) => CellValue::Boolean(*b),
            CellRawValue::String(s) => CellValue::Text(s.to_string()),
            CellRawValue::RichText(rt) => CellValue::Text(rt.get_text().to_string()),
            CellRawValue::Lazy(s) => {
                let txt: &str = s.as_ref();
                if let Ok(n) = txt.parse::<f64>() {
                    CellValue::Number(n)
                } else if txt.eq_ignore_ascii_case("TRUE") {
                    CellValue::Boolean(true)
                } else if txt.eq_ignore_ascii_case("FALSE") {
                    CellValue::Boolean(false)
                } else {
                    CellValue::Text(txt.to_string())
                }
            }
            CellRawValue::Error(_) => CellValue::Error(cv.get_value().to_string()),
            CellRawValue::Empty => CellValue::Empty,
        }
    }

    fn store_value(ws: &mut Worksheet, row: u32, col: u32, value: CellValue) {
        // umya addresses cells as (col, row)
        let cell = ws.get_cell_mut((col, row));
        let number_format = match &value {
            CellValue::Date(_) => Some(DATE_FORMAT),
            CellValue::DateTime(_) => Some(DATETIME_FORMAT),
            CellValue::Time(_) => Some(TIME_FORMAT),
            _ => None,
        };
        match value {
            CellValue::Empty => {
                cell.set_blank();
            }
            CellValue::Int(i) => {
                cell.set_value_number(i as f64);
            }
            CellValue::Number(n) => {
                cell.set_value_number(n);
            }
            CellValue::Boolean(b) => {
                cell.set_value_bool(b);
            }
            CellValue::Text(s) | CellValue::Error(s) => {
                cell.set_value_string(s);
            }
            temporal @ (CellValue::Date(_) | CellValue::DateTime(_) | CellValue::Time(_)) => {
                if let Some(serial) = temporal.as_serial_number() {
                    cell.set_value_number(serial);
                }
            }
        }
        if let Some(code) = number_format {
            cell.get_style_mut()
                .get_number_format_mut()
                .set_format_code(code);
        }
    }

    fn sheet_name_at(&self, index: usize) -> Option<String> {
        self.workbook
            .get_sheet(&index)
            .map(|s| s.get_name().to_string())
    }

    /// Live, writable view over one worksheet.
    pub fn worksheet_mut(
        &mut self,
        sheet: &str,
    ) -> Result<UmyaSheet<'_>, umya_spreadsheet::XlsxError> {
        let ws = self.workbook.get_sheet_by_name_mut(sheet).ok_or_else(|| {
            umya_spreadsheet::XlsxError::CellError(format!("sheet '{sheet}' not found"))
        })?;
        Ok(UmyaSheet::new(ws))
    }

    pub fn original_path(&self) -> Option<&Path> {
        self.original_path.as_deref()
    }
}

impl SpreadsheetReader for UmyaAdapter {
    type Error = umya_spreadsheet::XlsxError;

    const BACKEND: &'static str = "umya";

    fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        // Full read (not lazy) so saving never meets an undeserialized sheet
        let workbook = xlsx::read(path.as_ref())?;
        Ok(Self {
            workbook,
            original_path: Some(path.as_ref().to_path_buf()),
        })
    }

    fn sheet_names(&self) -> Result<Vec<String>, Self::Error> {
        let count = self.workbook.get_sheet_count();
        Ok((0..count).filter_map(|i| self.sheet_name_at(i)).collect())
    }

    fn active_sheet(&self) -> Option<String> {
        let index = *self.workbook.get_workbook_view().get_active_tab();
        self.sheet_name_at(index as usize)
    }

    fn read_sheet(&mut self, sheet: &str) -> Result<GridSheet, Self::Error> {
        let view = self.worksheet_mut(sheet)?;
        let mut grid = GridSheet::new(sheet);
        for cell in view.ws.get_cell_collection() {
            let coord = cell.get_coordinate();
            let value = Self::convert_cell_value(cell.get_cell_value());
            if value != CellValue::Empty {
                grid.set_value(*coord.get_row_num(), *coord.get_col_num(), value);
            }
        }
        Ok(grid)
    }
}

impl SpreadsheetWriter for UmyaAdapter {
    type Error = umya_spreadsheet::XlsxError;

    fn write_cell(
        &mut self,
        sheet: &str,
        row: u32,
        col: u32,
        value: CellValue,
    ) -> Result<(), Self::Error> {
        self.worksheet_mut(sheet)?.set_value(row, col, value);
        Ok(())
    }

    fn save(&mut self) -> Result<(), Self::Error> {
        let path = self.original_path.as_ref().ok_or_else(|| {
            umya_spreadsheet::XlsxError::Io(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "in-place save unavailable: no original path",
            ))
        })?;
        umya_spreadsheet::writer::xlsx::write(&self.workbook, path)?;
        Ok(())
    }

    fn save_as_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Self::Error> {
        umya_spreadsheet::writer::xlsx::write(&self.workbook, path.as_ref())?;
        Ok(())
    }
}

/// Mutable [`Sheet`] over a umya worksheet.
///
/// Extent is measured once from the cell collection, then only grows as
/// cells are written through this view.
pub struct UmyaSheet<'a> {
    ws: &'a mut Worksheet,
    dimensions: (u32, u32),
}

impl<'a> UmyaSheet<'a> {
    fn new(ws: &'a mut Worksheet) -> Self {
        let dimensions = ws.get_cell_collection().iter().fold((0, 0), |acc, cell| {
            let coord = cell.get_coordinate();
            (
                acc.0.max(*coord.get_row_num()),
                acc.1.max(*coord.get_col_num()),
            )
        });
        Self { ws, dimensions }
    }

    pub fn name(&self) -> &str {
        self.ws.get_name()
    }
}

impl Sheet for UmyaSheet<'_> {
    fn max_row(&self) -> u32 {
        self.dimensions.0
    }

    fn max_column(&self) -> u32 {
        self.dimensions.1
    }

    fn value(&self, row: u32, col: u32) -> CellValue {
        self.ws
            .get_cell((col, row))
            .map(|cell| UmyaAdapter::convert_cell_value(cell.get_cell_value()))
            .unwrap_or_default()
    }
}

impl SheetMut for UmyaSheet<'_> {
    fn set_value(&mut self, row: u32, col: u32, value: CellValue) {
        self.dimensions.0 = self.dimensions.0.max(row);
        self.dimensions.1 = self.dimensions.1.max(col);
        UmyaAdapter::store_value(self.ws, row, col, value);
    }
}
