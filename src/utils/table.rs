//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width: width.max(header.width()),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render header plus rows, padding each cell to its column width.
    /// Widths grow to fit the widest cell (display width, not byte length).
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.width).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.width());
                }
            }
        }

        let mut out = String::new();

        for (col, w) in self.columns.iter().zip(&widths) {
            pad_cell(&mut out, &col.header, *w);
        }
        out.push('\n');

        for row in &self.rows {
            for (cell, w) in row.iter().zip(&widths) {
                pad_cell(&mut out, cell, *w);
            }
            out.push('\n');
        }

        out
    }
}

fn pad_cell(out: &mut String, cell: &str, width: usize) {
    out.push_str(cell);
    for _ in cell.width()..width {
        out.push(' ');
    }
    out.push_str("  ");
}
