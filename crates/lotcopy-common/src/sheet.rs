use crate::CellValue;
use std::collections::BTreeMap;

/// Read access to a worksheet grid. Coordinates are 1-based `(row, col)`.
///
/// Extent is whatever the backing store reports; cells outside it read as
/// [`CellValue::Empty`].
pub trait Sheet {
    fn max_row(&self) -> u32;
    fn max_column(&self) -> u32;
    fn value(&self, row: u32, col: u32) -> CellValue;

    fn is_blank(&self, row: u32, col: u32) -> bool {
        self.value(row, col).is_blank()
    }
}

pub trait SheetMut: Sheet {
    /// Writing [`CellValue::Empty`] clears the cell.
    fn set_value(&mut self, row: u32, col: u32, value: CellValue);
}

impl<S: Sheet + ?Sized> Sheet for &S {
    fn max_row(&self) -> u32 {
        (**self).max_row()
    }
    fn max_column(&self) -> u32 {
        (**self).max_column()
    }
    fn value(&self, row: u32, col: u32) -> CellValue {
        (**self).value(row, col)
    }
}

impl<S: Sheet + ?Sized> Sheet for &mut S {
    fn max_row(&self) -> u32 {
        (**self).max_row()
    }
    fn max_column(&self) -> u32 {
        (**self).max_column()
    }
    fn value(&self, row: u32, col: u32) -> CellValue {
        (**self).value(row, col)
    }
}

impl<S: SheetMut + ?Sized> SheetMut for &mut S {
    fn set_value(&mut self, row: u32, col: u32, value: CellValue) {
        (**self).set_value(row, col, value)
    }
}

/// Sparse in-memory grid. Backs sheets read through calamine and unit tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridSheet {
    name: String,
    cells: BTreeMap<(u32, u32), CellValue>,
    dimensions: (u32, u32),
}

impl GridSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Rows start at row 1, values at column 1. Blank strings are left unset.
    pub fn from_rows<R, V>(name: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let mut sheet = Self::new(name);
        for (r, row) in rows.into_iter().enumerate() {
            for (c, v) in row.into_iter().enumerate() {
                let value = v.into();
                if !value.is_blank() {
                    sheet.set_value(r as u32 + 1, c as u32 + 1, value);
                }
            }
        }
        sheet
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `(max_row, max_column)`; `(0, 0)` for a sheet with no cells.
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(u32, u32), &CellValue)> {
        self.cells.iter()
    }
}

impl Sheet for GridSheet {
    fn max_row(&self) -> u32 {
        self.dimensions.0
    }

    fn max_column(&self) -> u32 {
        self.dimensions.1
    }

    fn value(&self, row: u32, col: u32) -> CellValue {
        self.cells.get(&(row, col)).cloned().unwrap_or_default()
    }
}

impl SheetMut for GridSheet {
    fn set_value(&mut self, row: u32, col: u32, value: CellValue) {
        // Cleared cells still count toward the extent.
        self.dimensions.0 = self.dimensions.0.max(row);
        self.dimensions.1 = self.dimensions.1.max(col);
        self.cells.insert((row, col), value);
    }
}
