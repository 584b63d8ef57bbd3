use crate::config::MergeConfig;
use crate::error::MergeError;
use crate::scan::first_non_empty_cell;
use lotcopy_common::Sheet;

/// Where the table sits in a source sheet. All indices are 1-based.
///
/// Data rows lie strictly between `header_row` and `footer_row`, so
/// `header_row + 1 < footer_row` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBounds {
    pub header_row: u32,
    pub footer_row: u32,
    /// Right-most non-blank column of the header row; the table width.
    pub last_column: u32,
}

impl TableBounds {
    /// Rows strictly between header and footer, blank ones included.
    pub fn body_rows(&self) -> std::ops::Range<u32> {
        self.header_row + 1..self.footer_row
    }
}

/// Find the header (`Date`), the footer (`Somme…`) and the header width.
///
/// The first matching header and the first matching footer below it win.
/// Header detection looks at the whole row; footer detection only looks
/// inside the header's columns.
pub fn locate<S: Sheet + ?Sized>(
    sheet: &S,
    config: &MergeConfig,
) -> Result<TableBounds, MergeError> {
    let header_row = (1..=sheet.max_row())
        .find(|&row| {
            first_non_empty_cell(sheet, row, None)
                .is_some_and(|(_, text)| text == config.header_token)
        })
        .ok_or_else(|| MergeError::BoundaryNotFound {
            token: config.header_token.clone(),
        })?;

    let last_column = (1..=sheet.max_column())
        .filter(|&col| !sheet.is_blank(header_row, col))
        .max()
        .ok_or(MergeError::EmptyHeader { row: header_row })?;

    let footer_row = (header_row + 1..=sheet.max_row())
        .find(|&row| {
            first_non_empty_cell(sheet, row, Some(last_column))
                .is_some_and(|(_, text)| text.starts_with(config.footer_prefix.as_str()))
        })
        .ok_or_else(|| MergeError::FooterNotFound {
            prefix: config.footer_prefix.clone(),
            header_row,
        })?;

    if footer_row <= header_row + 1 {
        return Err(MergeError::NoDataRows {
            header_row,
            footer_row,
        });
    }

    tracing::debug!(header_row, footer_row, last_column, "table located");
    Ok(TableBounds {
        header_row,
        footer_row,
        last_column,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotcopy_common::{CellValue, GridSheet, SheetMut};

    fn config() -> MergeConfig {
        MergeConfig::default()
    }

    fn sheet(rows: &[&[&str]]) -> GridSheet {
        GridSheet::from_rows("S", rows.iter().map(|r| r.iter().copied()))
    }

    #[test]
    fn locates_header_footer_and_width() {
        let s = sheet(&[
            &["Rapport de réception"],
            &[],
            &["Date", "Article", "Qté", "Poids"],
            &["2024-01-02", "A1", "3", "12"],
            &["2024-01-03", "A2", "1", "4"],
            &["Somme", "", "4", "16"],
        ]);
        let bounds = locate(&s, &config()).unwrap();
        assert_eq!(
            bounds,
            TableBounds {
                header_row: 3,
                footer_row: 6,
                last_column: 4
            }
        );
        assert_eq!(bounds.body_rows(), 4..6);
    }

    #[test]
    fn header_must_match_exactly_after_trim() {
        let s = sheet(&[&["Dates"], &["date"], &["  Date  ", "X"], &["1"], &["Somme"]]);
        assert_eq!(locate(&s, &config()).unwrap().header_row, 3);
    }

    #[test]
    fn header_may_start_in_any_column() {
        let s = sheet(&[&["", "", "Date", "X"], &["", "", "1", "2"], &["", "", "Somme totale"]]);
        let bounds = locate(&s, &config()).unwrap();
        assert_eq!((bounds.header_row, bounds.footer_row, bounds.last_column), (1, 3, 4));
    }

    #[test]
    fn width_spans_gaps_in_header() {
        let s = sheet(&[&["Date", "", "", "Poids"], &["1"], &["Somme"]]);
        assert_eq!(locate(&s, &config()).unwrap().last_column, 4);
    }

    #[test]
    fn first_header_wins() {
        let s = sheet(&[
            &["Date", "A"],
            &["1", "2"],
            &["Date", "A", "B"],
            &["3", "4", "5"],
            &["Somme"],
        ]);
        let bounds = locate(&s, &config()).unwrap();
        assert_eq!((bounds.header_row, bounds.footer_row, bounds.last_column), (1, 5, 2));
    }

    #[test]
    fn missing_header() {
        let s = sheet(&[&["Jour", "A"], &["1"], &["Somme"]]);
        assert_eq!(
            locate(&s, &config()),
            Err(MergeError::BoundaryNotFound {
                token: "Date".into()
            })
        );
    }

    #[test]
    fn missing_footer() {
        let s = sheet(&[&["Date", "A"], &["1", "2"], &["Total"]]);
        assert_eq!(
            locate(&s, &config()),
            Err(MergeError::FooterNotFound {
                prefix: "Somme".into(),
                header_row: 1
            })
        );
    }

    #[test]
    fn footer_outside_header_span_is_ignored() {
        // "Somme" in column 3 is beyond the two-column header
        let s = sheet(&[&["Date", "A"], &["1", "2"], &["", "", "Somme"], &["Somme"]]);
        assert_eq!(locate(&s, &config()).unwrap().footer_row, 4);
    }

    #[test]
    fn footer_prefix_is_case_sensitive() {
        let s = sheet(&[&["Date", "A"], &["1"], &["somme"], &["SOMME"]]);
        assert!(matches!(
            locate(&s, &config()),
            Err(MergeError::FooterNotFound { .. })
        ));
    }

    #[test]
    fn adjacent_footer_means_no_data() {
        let s = sheet(&[&["titre"], &["Date", "A"], &["Somme", "0"]]);
        assert_eq!(
            locate(&s, &config()),
            Err(MergeError::NoDataRows {
                header_row: 2,
                footer_row: 3
            })
        );
    }

    #[test]
    fn numeric_first_cell_never_matches_tokens() {
        let mut s = GridSheet::new("S");
        s.set_value(1, 1, CellValue::Number(1.0));
        s.set_value(2, 1, CellValue::Text("Date".into()));
        s.set_value(3, 1, CellValue::Int(5));
        s.set_value(4, 1, CellValue::Text("Somme".into()));
        let bounds = locate(&s, &config()).unwrap();
        assert_eq!((bounds.header_row, bounds.footer_row), (2, 4));
    }

    #[test]
    fn custom_tokens() {
        let s = sheet(&[&["Jour", "Lot"], &["1", "2"], &["Total général"]]);
        let config = MergeConfig {
            header_token: "Jour".into(),
            footer_prefix: "Total".into(),
            ..MergeConfig::default()
        };
        let bounds = locate(&s, &config).unwrap();
        assert_eq!((bounds.header_row, bounds.footer_row, bounds.last_column), (1, 3, 2));
    }
}
