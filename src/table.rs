// src/table.rs
//
// In-memory table handed from the aggregator to preview/export.
// Cells are `Option<String>`: `None` is an absent value, distinct from "".

/// An absent-or-present cell.
pub type Cell = Option<String>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Borrow a cell by row index and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// True when every row holds `None` in column `col`.
    fn column_all_absent(&self, col: usize) -> bool {
        self.rows.iter().all(|r| r.get(col).is_none_or(|c| c.is_none()))
    }

    /// Drop every column that is absent in all rows.
    ///
    /// Set-wide pass over finished rows; an empty set keeps its header.
    /// Returns the names of the dropped columns.
    pub fn drop_empty_columns(&mut self) -> Vec<String> {
        if self.rows.is_empty() {
            return Vec::new();
        }

        let keep: Vec<bool> = (0..self.headers.len())
            .map(|col| !self.column_all_absent(col))
            .collect();
        if keep.iter().all(|k| *k) {
            return Vec::new();
        }

        let mut dropped = Vec::new();
        let headers = std::mem::take(&mut self.headers);
        for (h, k) in headers.into_iter().zip(&keep) {
            if *k {
                self.headers.push(h)
            } else {
                dropped.push(h)
            }
        }
        for row in &mut self.rows {
            let cells = std::mem::take(row);
            *row = cells
                .into_iter()
                .zip(&keep)
                .filter_map(|(c, k)| k.then_some(c))
                .collect();
        }
        dropped
    }
}
