//! A1-style rendering of 1-based coordinates, used in log lines and messages.

/// Column letters for a 1-based column index (`1 -> "A"`, `28 -> "AB"`).
pub fn col_to_a1(mut col: u32) -> String {
    let mut letters = Vec::new();
    while col > 0 {
        let rem = (col - 1) % 26;
        letters.push(b'A' + rem as u8);
        col = (col - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// `row`/`col` are 1-based.
pub fn cell_to_a1(row: u32, col: u32) -> String {
    format!("{}{}", col_to_a1(col), row)
}
