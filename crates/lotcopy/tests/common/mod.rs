#![allow(dead_code)]

use lotcopy::{GridSheet, Sheet};
use lotcopy_io::{SpreadsheetReader, UmyaAdapter};
use lotcopy_testkit::{build_sheet, put, put_row};
use std::path::{Path, PathBuf};

/// A reception workbook: header at `header_row`, `rows` below it, then the
/// `Somme` footer, and optionally a `Code Lot` label three rows further down.
pub fn reception(
    header: &[&str],
    header_row: u32,
    rows: &[&[&str]],
    code_lot: Option<&str>,
) -> PathBuf {
    build_sheet(|ws| {
        put(ws, 1, 1, "Bon de réception");
        put_row(ws, header_row, 1, header);
        let mut row = header_row + 1;
        for values in rows {
            put_row(ws, row, 1, values);
            row += 1;
        }
        put(ws, row, 1, "Somme");
        if let Some(code) = code_lot {
            put(ws, row + 3, 2, "Code Lot");
            put(ws, row + 3, 3, code);
        }
    })
}

/// Header at row 5, data rows 6-8 over four columns, footer at row 9,
/// label at (12, 2) and `LOT-42` at (12, 3).
pub fn scenario_a() -> PathBuf {
    reception(
        &["Date", "Article", "Qté", "Poids"],
        5,
        &[
            &["2024-01-02", "A1", "3", "12"],
            &["2024-01-03", "A2", "1", "4"],
            &["2024-01-04", "A3", "2", "8"],
        ],
        Some("LOT-42"),
    )
}

/// Header immediately followed by its footer.
pub fn adjacent_footer() -> PathBuf {
    reception(&["Date", "Article"], 3, &[], Some("LOT-0"))
}

/// Destination whose rows 1-4 are filled and whose Code Lot column is 6.
pub fn populated_destination() -> PathBuf {
    build_sheet(|ws| {
        put_row(ws, 1, 1, &["Date", "Article", "Qté", "Poids", "Note", "Code Lot"]);
        put_row(ws, 2, 1, &["d1", "x", "1", "1", "", "OLD-1"]);
        put_row(ws, 3, 1, &["d2", "y", "1", "1", "", "OLD-1"]);
        put_row(ws, 4, 1, &["d3", "z", "1", "1", "", "OLD-2"]);
    })
}

pub fn read_first_sheet(path: &Path) -> GridSheet {
    let mut adapter = UmyaAdapter::open_path(path).expect("open destination");
    let names = adapter.sheet_names().expect("sheet names");
    adapter.read_sheet(&names[0]).expect("read sheet")
}

/// Values of `row` as display strings, columns `1..=width`.
pub fn row_text(sheet: &GridSheet, row: u32, width: u32) -> Vec<String> {
    (1..=width).map(|col| sheet.value(row, col).to_string()).collect()
}
