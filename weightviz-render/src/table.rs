//! Plain-text tables.
//!
//! Columns are separated by two spaces and each column is at least two
//! characters wider than its header. Numeric columns are right-aligned,
//! everything else left-aligned; a dashed line separates the header.

use unicode_width::UnicodeWidthStr;

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<Option<f64>> for Cell {
    fn from(n: Option<f64>) -> Self {
        n.map_or(Cell::Empty, Cell::Number)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

const MIN_PADDING: usize = 2;
const COLUMN_SEPARATOR: &str = "  ";

/// A table with a header row, formatting every number with `float_format`.
pub struct Table<'a> {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub float_format: &'a dyn Fn(f64) -> String,
}

impl Table<'_> {
    /// Render into lines: header, separator, then one line per row.
    pub fn render(&self) -> Vec<String> {
        let columns = self.headers.len();
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                (0..columns)
                    .map(|i| match row.get(i) {
                        Some(Cell::Number(n)) => (self.float_format)(*n),
                        Some(Cell::Text(s)) => s.clone(),
                        Some(Cell::Empty) | None => String::new(),
                    })
                    .collect()
            })
            .collect();

        let numeric: Vec<bool> = (0..columns)
            .map(|i| {
                let mut values = self.rows.iter().filter_map(|row| row.get(i));
                let mut any_number = false;
                let all_numeric = values.all(|cell| match cell {
                    Cell::Number(_) => {
                        any_number = true;
                        true
                    }
                    Cell::Empty => true,
                    Cell::Text(_) => false,
                });
                all_numeric && any_number
            })
            .collect();

        let widths: Vec<usize> = (0..columns)
            .map(|i| {
                cells
                    .iter()
                    .map(|row| row[i].width())
                    .fold(self.headers[i].width() + MIN_PADDING, usize::max)
            })
            .collect();

        let format_row = |row: &[String]| {
            row.iter()
                .enumerate()
                .map(|(i, text)| pad(text, widths[i], numeric[i]))
                .collect::<Vec<_>>()
                .join(COLUMN_SEPARATOR)
        };

        let mut lines = Vec::with_capacity(cells.len() + 2);
        lines.push(format_row(self.headers.as_slice()));
        lines.push(
            widths
                .iter()
                .map(|&w| "-".repeat(w))
                .collect::<Vec<_>>()
                .join(COLUMN_SEPARATOR),
        );
        lines.extend(cells.iter().map(|row| format_row(row.as_slice())));
        lines
    }
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    if right_align {
        format!("{fill}{text}")
    } else {
        format!("{text}{fill}")
    }
}

/// Display width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Center `s` within `width` columns; extra padding goes to the right.
pub fn center(s: &str, width: usize) -> String {
    let total = width.saturating_sub(s.width());
    let left = total / 2;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(total - left))
}
