//! Table rendering
//!
//! Two encodings of the same rows:
//!
//! ```text
//! NAME     VALUE REQUIRED        | NAME     | VALUE | REQUIRED |
//! replicas 3     Yes             |----------|-------|----------|
//!                                | replicas | 3     | Yes      |
//! ```
//!
//! Cell widths are measured with `console` so wide characters and stray ANSI
//! sequences do not break alignment.

use console::{Alignment, measure_text_width, pad_str};
use std::borrow::Cow;

/// Output encoding for report tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Left-aligned columns separated by a single space, no borders
    #[default]
    Plain,
    /// GitHub-flavoured markdown table
    Markdown,
}

impl TableFormat {
    pub fn from_markdown_flag(markdown: bool) -> Self {
        if markdown {
            TableFormat::Markdown
        } else {
            TableFormat::Plain
        }
    }
}

/// Render `rows` under `headers`
///
/// Every row must have exactly `headers.len()` cells. Multi-line cells become
/// continuation lines in plain mode and `<br>`-joined cells in markdown.
///
/// # Panics
///
/// Panics when a row's cell count differs from the header count.
pub fn render(headers: &[&str], rows: &[Vec<String>], format: TableFormat) -> String {
    for (i, row) in rows.iter().enumerate() {
        assert!(
            row.len() == headers.len(),
            "table row {i} has {} cells, expected {}",
            row.len(),
            headers.len()
        );
    }

    let header_cells: Vec<Cell<'_>> = headers.iter().map(|h| cell_lines(h, format)).collect();
    let body: Vec<Vec<Cell<'_>>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| cell_lines(cell, format)).collect())
        .collect();

    let widths = column_widths(&header_cells, &body);

    let mut out = String::new();
    push_row(&mut out, &header_cells, &widths, format);
    if format == TableFormat::Markdown {
        push_separator(&mut out, &widths);
    }
    for row in &body {
        push_row(&mut out, row, &widths, format);
    }
    out
}

/// Display lines of one cell
type Cell<'a> = Vec<Cow<'a, str>>;

fn cell_lines(cell: &str, format: TableFormat) -> Cell<'_> {
    match format {
        TableFormat::Plain => {
            let lines: Cell<'_> = cell.lines().map(Cow::Borrowed).collect();
            if lines.is_empty() {
                vec![Cow::Borrowed("")]
            } else {
                lines
            }
        }
        TableFormat::Markdown => {
            let escaped = if cell.contains('|') {
                Cow::Owned(cell.replace('|', "\\|"))
            } else {
                Cow::Borrowed(cell)
            };
            if escaped.contains(['\n', '\r']) {
                vec![Cow::Owned(escaped.lines().collect::<Vec<_>>().join("<br>"))]
            } else {
                vec![escaped]
            }
        }
    }
}

fn column_widths(headers: &[Cell<'_>], rows: &[Vec<Cell<'_>>]) -> Vec<usize> {
    let mut widths = vec![0; headers.len()];
    for row in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
        for (width, cell) in widths.iter_mut().zip(row) {
            for line in cell {
                *width = (*width).max(measure_text_width(line));
            }
        }
    }
    widths
}

fn push_row(out: &mut String, cells: &[Cell<'_>], widths: &[usize], format: TableFormat) {
    let height = cells.iter().map(Vec::len).max().unwrap_or(1);
    for i in 0..height {
        let line: Vec<&str> = cells
            .iter()
            .map(|cell| cell.get(i).map_or("", |line| &**line))
            .collect();
        push_line(out, &line, widths, format);
    }
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize], format: TableFormat) {
    let padded: Vec<Cow<'_, str>> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_str(cell, *width, Alignment::Left, None))
        .collect();

    match format {
        TableFormat::Plain => {
            out.push_str(padded.join(" ").trim_end());
        }
        TableFormat::Markdown => {
            out.push_str("| ");
            out.push_str(&padded.join(" | "));
            out.push_str(" |");
        }
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize]) {
    out.push('|');
    for width in widths {
        out.push_str(&"-".repeat(width + 2));
        out.push('|');
    }
    out.push('\n');
}
