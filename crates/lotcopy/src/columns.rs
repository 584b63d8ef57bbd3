use crate::scan::is_row_blank;
use lotcopy_common::{CellValue, SheetMut, col_to_a1};

const HEADER_ROW: u32 = 1;

/// Column of the destination's `label` header in row 1, creating it if absent.
///
/// With `creating_headers` set and row 1 still empty, the label goes right
/// after the source table (`source_last_column + 1`). Otherwise row 1 is
/// scanned: an exact match is returned untouched, else the label is written
/// one past the last non-empty header cell, or at column 1 when row 1 is
/// empty. Re-running on the same state returns the same column.
pub fn ensure_code_lot_column<S: SheetMut + ?Sized>(
    dest: &mut S,
    source_last_column: Option<u32>,
    creating_headers: bool,
    label: &str,
) -> u32 {
    if creating_headers && is_row_blank(&*dest, HEADER_ROW) {
        let column = source_last_column.unwrap_or(0) + 1;
        dest.set_value(HEADER_ROW, column, CellValue::Text(label.to_string()));
        return column;
    }

    let mut last_non_empty = 0;
    let mut existing = None;
    for column in 1..=dest.max_column() {
        let cell = dest.value(HEADER_ROW, column);
        if cell.is_blank() {
            continue;
        }
        last_non_empty = column;
        if cell.trimmed_text() == label {
            existing = Some(column);
        }
    }

    if let Some(column) = existing {
        return column;
    }

    let column = last_non_empty + 1;
    tracing::debug!(column = %col_to_a1(column), label, "adding destination header column");
    dest.set_value(HEADER_ROW, column, CellValue::Text(label.to_string()));
    column
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotcopy_common::{GridSheet, Sheet};

    const LABEL: &str = "Code Lot";

    #[test]
    fn virgin_destination_places_label_after_source_width() {
        let mut dest = GridSheet::new("D");
        assert_eq!(ensure_code_lot_column(&mut dest, Some(4), true, LABEL), 5);
        assert_eq!(dest.value(1, 5), CellValue::Text(LABEL.into()));
        assert_eq!(dest.max_column(), 5);
    }

    #[test]
    fn virgin_destination_without_width_uses_column_one() {
        let mut dest = GridSheet::new("D");
        assert_eq!(ensure_code_lot_column(&mut dest, None, false, LABEL), 1);
        assert_eq!(dest.value(1, 1), CellValue::Text(LABEL.into()));
    }

    #[test]
    fn existing_label_is_reused() {
        let mut dest = GridSheet::from_rows("D", [vec!["Date", "A", "", "", "", " Code Lot "]]);
        assert_eq!(ensure_code_lot_column(&mut dest, None, false, LABEL), 6);
        assert_eq!(dest.cell_count(), 3);
    }

    #[test]
    fn missing_label_is_appended_past_last_header() {
        let mut dest = GridSheet::from_rows("D", [vec!["Date", "", "Qté"], vec!["x", "y", "z", "w"]]);
        assert_eq!(ensure_code_lot_column(&mut dest, None, false, LABEL), 4);
        assert_eq!(dest.value(1, 4), CellValue::Text(LABEL.into()));
    }

    #[test]
    fn twice_on_same_state_is_idempotent() {
        let mut dest = GridSheet::from_rows("D", [vec!["Date", "A"]]);
        let first = ensure_code_lot_column(&mut dest, None, false, LABEL);
        let cells = dest.cell_count();
        let second = ensure_code_lot_column(&mut dest, None, false, LABEL);
        assert_eq!((first, second), (3, 3));
        assert_eq!(dest.cell_count(), cells);
    }

    #[test]
    fn headers_already_written_fall_back_to_scan() {
        // row 1 holds the copied source header, so creation mode finds it non-empty
        let mut dest = GridSheet::from_rows("D", [vec!["Date", "A", "B"]]);
        assert_eq!(ensure_code_lot_column(&mut dest, Some(3), true, LABEL), 4);
        assert_eq!(ensure_code_lot_column(&mut dest, Some(3), true, LABEL), 4);
    }
}
