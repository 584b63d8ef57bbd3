use lotcopy_common::{CellValue, Sheet};

/// Outcome of looking for the Code Lot label in a source sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeLotLookup {
    /// Label at `(row, column)`; `value` is its right-hand neighbour and
    /// may itself be [`CellValue::Empty`].
    Found {
        row: u32,
        column: u32,
        value: CellValue,
    },
    NotFound,
}

impl CodeLotLookup {
    /// Value to stamp on copied rows; `Empty` when nothing usable was found.
    pub fn value(&self) -> CellValue {
        match self {
            CodeLotLookup::Found { value, .. } => value.clone(),
            CodeLotLookup::NotFound => CellValue::Empty,
        }
    }

    /// True when the label is absent or its neighbour is blank.
    pub fn is_missing(&self) -> bool {
        match self {
            CodeLotLookup::Found { value, .. } => value.is_blank(),
            CodeLotLookup::NotFound => true,
        }
    }
}

/// Row-major scan for the first cell whose trimmed text equals `label`.
pub fn resolve_code_lot<S: Sheet + ?Sized>(sheet: &S, label: &str) -> CodeLotLookup {
    for row in 1..=sheet.max_row() {
        for column in 1..=sheet.max_column() {
            let cell = sheet.value(row, column);
            if !cell.is_blank() && cell.trimmed_text() == label {
                return CodeLotLookup::Found {
                    row,
                    column,
                    value: sheet.value(row, column + 1),
                };
            }
        }
    }
    CodeLotLookup::NotFound
}
