// src/preview.rs
//
// Fixed-width terminal preview of the first few rows of a table.
// Only the requested columns that exist are shown; cells longer than the
// column width are cut and end in "...". Absent cells print as "None".

use crate::table::DataSet;

const ELLIPSIS: &str = "...";
const ABSENT: &str = "None";

fn clip(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Render up to `max_rows` rows of `columns` with each cell clipped to `width` chars.
pub fn render(ds: &DataSet, columns: &[&str], max_rows: usize, width: usize) -> String {
    let cols: Vec<(usize, &str)> = columns
        .iter()
        .filter_map(|name| ds.column_index(name).map(|ix| (ix, *name)))
        .collect();
    if cols.is_empty() {
        return String::new();
    }

    let shown = ds.rows.len().min(max_rows);
    let index_w = shown.saturating_sub(1).to_string().len();

    // header + rows, already clipped
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(shown + 1);
    grid.push(cols.iter().map(|(_, name)| clip(name, width)).collect());
    for row in ds.rows.iter().take(shown) {
        grid.push(
            cols.iter()
                .map(|(ix, _)| clip(row.get(*ix).and_then(|c| c.as_deref()).unwrap_or(ABSENT), width))
                .collect(),
        );
    }

    let col_w: Vec<usize> = (0..cols.len())
        .map(|c| grid.iter().map(|r| r[c].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for (i, line) in grid.iter().enumerate() {
        let index = if i == 0 { String::new() } else { (i - 1).to_string() };
        out.push_str(&format!("{:>index_w$}", index));
        for (c, cell) in line.iter().enumerate() {
            out.push_str("  ");
            out.push_str(&format!("{:>w$}", cell, w = col_w[c]));
        }
        out.push('\n');
    }
    out
}
