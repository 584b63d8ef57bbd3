//! Workbook fixtures written to real `.xlsx` files on disk.

use std::path::PathBuf;
use umya_spreadsheet::{Spreadsheet, Worksheet};

/// Build a workbook with `Sheet1`, let `f` populate it, and persist it to a
/// temp file that outlives the test.
pub fn build_workbook(f: impl FnOnce(&mut Spreadsheet)) -> PathBuf {
    let mut book = umya_spreadsheet::new_file();
    f(&mut book);
    write_temp(&book)
}

/// Shorthand for fixtures that only touch `Sheet1`.
pub fn build_sheet(f: impl FnOnce(&mut Worksheet)) -> PathBuf {
    build_workbook(|book| {
        let sh = book
            .get_sheet_by_name_mut("Sheet1")
            .expect("new_file always creates Sheet1");
        f(sh);
    })
}

/// An empty `Sheet1` workbook: the virgin-destination case.
pub fn empty_workbook() -> PathBuf {
    build_workbook(|_| {})
}

pub fn write_temp(book: &Spreadsheet) -> PathBuf {
    let file = tempfile::Builder::new()
        .prefix("lotcopy-")
        .suffix(".xlsx")
        .tempfile()
        .expect("create temp xlsx");
    let (_, path) = file.keep().expect("persist temp xlsx");
    umya_spreadsheet::writer::xlsx::write(book, &path).expect("write fixture workbook");
    path
}

/// Write `values` left to right starting at (`row`, `start_col`).
///
/// Strings that parse as numbers become numeric cells; empty strings are left
/// untouched.
pub fn put_row(ws: &mut Worksheet, row: u32, start_col: u32, values: &[&str]) {
    for (offset, v) in values.iter().enumerate() {
        put(ws, row, start_col + offset as u32, v);
    }
}

pub fn put(ws: &mut Worksheet, row: u32, col: u32, value: &str) {
    if value.is_empty() {
        return;
    }
    let cell = ws.get_cell_mut((col, row));
    match value.parse::<f64>() {
        Ok(n) => {
            cell.set_value_number(n);
        }
        Err(_) => {
            cell.set_value_string(value);
        }
    }
}

/// Numeric cell carrying a number format, e.g. a date serial under `yyyy-mm-dd`.
pub fn put_formatted(ws: &mut Worksheet, row: u32, col: u32, value: f64, format: &str) {
    let cell = ws.get_cell_mut((col, row));
    cell.set_value_number(value);
    cell.get_style_mut()
        .get_number_format_mut()
        .set_format_code(format);
}
