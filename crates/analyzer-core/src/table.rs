//! Plain-text tables for terminal output.
//!
//! Renders in a compact "simple" layout: a header line, a dashed rule under
//! every column, then one line per row. Columns are separated by two spaces
//! and sized by display width, so wide characters in endpoints line up.
//! Numeric columns line up on the decimal point.
//!
//! ```text
//! Endpoint      Count    Avg Response Time
//! ----------  -------  -------------------
//! /api/test1        2                 2
//! /api/test2        2                 2.25
//! ```

use std::fmt;

use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";
/// Every column is at least this much wider than its header.
const HEADER_PADDING: usize = 2;

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    /// Decimal points line up, then the column is right-aligned. Integers
    /// sit where the point would be.
    Decimal,
}

/// A column definition: header label plus alignment.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn text(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Left,
        }
    }

    pub fn numeric(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Decimal,
        }
    }
}

/// A table of pre-formatted cells, rendered through [`fmt::Display`].
#[derive(Debug, Clone)]
pub struct TextTable {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing trailing cells render empty; extra cells are
    /// dropped.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.columns.len(), String::new());
        self.rows.push(cells);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of column `index`, with decimal columns padded on the right so
    /// their points share a position.
    fn column_cells(&self, index: usize) -> Vec<String> {
        let cells = self.rows.iter().map(|row| row[index].clone());
        match self.columns[index].align {
            Align::Left => cells.collect(),
            Align::Decimal => {
                let cells: Vec<String> = cells.collect();
                let widest = cells.iter().map(|c| digits_after_point(c)).max().unwrap_or(-1);
                cells
                    .into_iter()
                    .map(|c| {
                        let fill = (widest - digits_after_point(&c)).max(0) as usize;
                        format!("{c}{}", " ".repeat(fill))
                    })
                    .collect()
            }
        }
    }
}

/// Digits after the decimal point of a numeric cell; `-1` for integers and
/// non-numeric text.
fn digits_after_point(cell: &str) -> isize {
    if cell.parse::<f64>().is_err() {
        return -1;
    }
    match cell.rfind('.') {
        Some(pos) => (cell.len() - pos - 1) as isize,
        None => -1,
    }
}

/// Pad `cell` to `width` display columns according to `align`.
fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match align {
        Align::Left => format!("{cell}{fill}"),
        Align::Decimal => format!("{fill}{cell}"),
    }
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = (0..self.columns.len())
            .map(|i| self.column_cells(i))
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&cells)
            .map(|(col, column)| {
                let widest = column.iter().map(|c| c.width()).max().unwrap_or(0);
                widest.max(col.header.width() + HEADER_PADDING)
            })
            .collect();

        let line = |cells: Vec<String>| cells.join(COLUMN_GAP).trim_end().to_string();

        let header = line(
            self.columns
                .iter()
                .zip(&widths)
                .map(|(col, &w)| pad(&col.header, w, col.align))
                .collect(),
        );
        let rule = line(widths.iter().map(|&w| "-".repeat(w)).collect());

        write!(f, "{header}\n{rule}")?;
        for r in 0..self.rows.len() {
            let body = line(
                cells
                    .iter()
                    .zip(self.columns.iter().zip(&widths))
                    .map(|(column, (col, &w))| pad(&column[r], w, col.align))
                    .collect(),
            );
            write!(f, "\n{body}")?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
