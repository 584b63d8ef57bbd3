//! Row-level cell helpers shared by the locator, extractor and writer.

use lotcopy_common::{CellValue, Sheet, SheetMut};

/// First non-blank cell of `row` within columns `1..=max_column`
/// (the sheet's full width when `None`), with its trimmed text.
pub fn first_non_empty_cell<S: Sheet + ?Sized>(
    sheet: &S,
    row: u32,
    max_column: Option<u32>,
) -> Option<(u32, String)> {
    let last = max_column.unwrap_or_else(|| sheet.max_column());
    (1..=last).find_map(|col| {
        let value = sheet.value(row, col);
        (!value.is_blank()).then(|| (col, value.trimmed_text()))
    })
}

/// True when every cell of `row` across the sheet's current width is blank.
pub fn is_row_blank<S: Sheet + ?Sized>(sheet: &S, row: u32) -> bool {
    (1..=sheet.max_column()).all(|col| sheet.is_blank(row, col))
}

/// First row, counting from 1, whose cells are all blank.
///
/// Always terminates: every row past `max_row` is blank.
pub fn first_fully_empty_row<S: Sheet + ?Sized>(sheet: &S) -> u32 {
    let mut row = 1;
    while !is_row_blank(sheet, row) {
        row += 1;
    }
    row
}

/// Values of `row` at columns `1..=last_column`, blanks included.
pub fn read_row<S: Sheet + ?Sized>(sheet: &S, row: u32, last_column: u32) -> Vec<CellValue> {
    (1..=last_column).map(|col| sheet.value(row, col)).collect()
}

/// Write `values` into `row` starting at column 1.
pub fn write_row<S: SheetMut + ?Sized>(sheet: &mut S, row: u32, values: &[CellValue]) {
    for (col, value) in (1u32..).zip(values) {
        sheet.set_value(row, col, value.clone());
    }
}
