// src/csv.rs

/// Every cell is wrapped in double quotes. With `escape` off the cell text is
/// written verbatim, so an embedded `"` or newline breaks the field (same as
/// the exports users already have). With `escape` on, quotes are doubled.
fn push_cell(out: &mut String, cell: &str, escape: bool) {
    out.push('"');
    if escape {
        out.push_str(&cell.replace('"', "\"\""));
    } else {
        out.push_str(cell);
    }
    out.push('"');
}

/// Append one row, comma-joined, without a line terminator.
pub fn push_row(out: &mut String, row: &[String], escape: bool) {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { out.push(','); }
        push_cell(out, cell, escape);
    }
}

/// Serialize rendered table rows (header included): rows joined by `\n`, no
/// trailing newline.
pub fn table_to_csv(rows: &[Vec<String>], escape: bool) -> String {
    let mut out = String::new();
    for (i, r) in rows.iter().enumerate() {
        if i > 0 { out.push('\n'); }
        push_row(&mut out, r, escape);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(src: &[&[&str]]) -> Vec<Vec<String>> {
        src.iter().map(|r| r.iter().map(|c| s!(*c)).collect()).collect()
    }

    #[test]
    fn quotes_every_cell_and_joins_with_newline() {
        let t = rows(&[&["A", "B"], &["1", "2"]]);
        assert_eq!(table_to_csv(&t, false), "\"A\",\"B\"\n\"1\",\"2\"");
    }

    #[test]
    fn empty_cells_are_still_quoted() {
        let t = rows(&[&["x", "", "z"]]);
        assert_eq!(table_to_csv(&t, false), "\"x\",\"\",\"z\"");
    }

    #[test]
    fn rows_append_without_terminator() {
        let mut out = s!("\"h\"\n");
        push_row(&mut out, &[s!("a"), s!("b")], false);
        assert_eq!(out, "\"h\"\n\"a\",\"b\"");
    }

    #[test]
    fn empty_table_is_empty_string() {
        assert_eq!(table_to_csv(&[], false), "");
    }

    #[test]
    fn raw_mode_leaves_embedded_quotes_alone() {
        let t = rows(&[&["Joe \"The\" Pizza"]]);
        assert_eq!(table_to_csv(&t, false), "\"Joe \"The\" Pizza\"");
        assert_eq!(table_to_csv(&t, true), "\"Joe \"\"The\"\" Pizza\"");
    }
}
