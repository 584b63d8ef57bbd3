use crate::bounds::locate;
use crate::code_lot::{CodeLotLookup, resolve_code_lot};
use crate::columns::ensure_code_lot_column;
use crate::config::MergeConfig;
use crate::error::MergeError;
use crate::rows::{DataRow, data_rows};
use crate::scan::{first_fully_empty_row, read_row, write_row};
use lotcopy_common::{Sheet, SheetMut, cell_to_a1};

/// What one source contributed to the destination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeOutcome {
    pub rows_copied: usize,
    /// Source table width; 0 when nothing was copied.
    pub source_width: u32,
    pub code_lot_missing: bool,
    /// First destination row written, if any.
    pub start_row: Option<u32>,
    pub code_lot_column: Option<u32>,
}

/// Append the source's table to the first fully empty row of `dest`.
///
/// A virgin destination first receives the source header row plus the Code
/// Lot title. Every copied row gets the code lot in the Code Lot column,
/// written empty when the source has none. Existing destination cells are
/// never overwritten.
pub fn merge_one_source<S, D>(
    source: &S,
    dest: &mut D,
    config: &MergeConfig,
) -> Result<MergeOutcome, MergeError>
where
    S: Sheet + ?Sized,
    D: SheetMut + ?Sized,
{
    let bounds = locate(source, config)?;
    let data: Vec<DataRow> = data_rows(source, &bounds).collect();

    let code_lot = resolve_code_lot(source, &config.code_lot_label);
    match &code_lot {
        CodeLotLookup::NotFound => {
            tracing::warn!(label = %config.code_lot_label, "code lot label not found");
        }
        CodeLotLookup::Found { row, column, value } if value.is_blank() => {
            tracing::warn!(
                label_cell = %cell_to_a1(*row, *column),
                "code lot label has no value next to it"
            );
        }
        CodeLotLookup::Found { value, .. } => {
            tracing::debug!(code_lot = %value, "code lot resolved");
        }
    }
    let code_lot_missing = code_lot.is_missing();

    if data.is_empty() {
        tracing::debug!("table has only blank rows; destination untouched");
        return Ok(MergeOutcome {
            code_lot_missing,
            ..MergeOutcome::default()
        });
    }

    let mut start_row = first_fully_empty_row(&*dest);
    let code_lot_column = if start_row == 1 {
        let header = read_row(source, bounds.header_row, bounds.last_column);
        write_row(dest, 1, &header);
        start_row = 2;
        ensure_code_lot_column(dest, Some(bounds.last_column), true, &config.code_lot_label)
    } else {
        ensure_code_lot_column(dest, None, false, &config.code_lot_label)
    };

    let value = code_lot.value();
    for (row, data_row) in (start_row..).zip(&data) {
        write_row(dest, row, &data_row.values);
        dest.set_value(row, code_lot_column, value.clone());
    }

    tracing::debug!(
        rows = data.len(),
        start_row,
        code_lot_column,
        "rows appended"
    );
    Ok(MergeOutcome {
        rows_copied: data.len(),
        source_width: bounds.last_column,
        code_lot_missing,
        start_row: Some(start_row),
        code_lot_column: Some(code_lot_column),
    })
}
