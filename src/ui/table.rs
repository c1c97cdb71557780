//! Table rendering for formatted output.

/// A simple box-drawn table.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
    max_widths: Vec<Option<usize>>,
}

/// Display width of a cell, counted in characters.
fn cell_width(s: &str) -> usize {
    s.chars().count()
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| cell_width(h)).collect();
        let max_widths = vec![None; headers.len()];

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
            max_widths,
        }
    }

    /// Cap a column's width; longer cells are cut with `…`.
    pub fn with_max_width(mut self, column: usize, width: usize) -> Self {
        if let Some(slot) = self.max_widths.get_mut(column) {
            *slot = Some(width.max(1));
        }
        self
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row: Vec<String> = row.iter().map(|s| s.to_string()).collect();

        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(cell_width(cell));
            }
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let widths = self.effective_widths();
        let mut output = String::new();

        output.push_str(&Self::render_border(&widths, '┌', '┬', '┐'));
        output.push('\n');

        output.push_str(&self.render_row(&widths, &self.headers));
        output.push('\n');

        output.push_str(&Self::render_border(&widths, '├', '┼', '┤'));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(&widths, row));
            output.push('\n');
        }

        output.push_str(&Self::render_border(&widths, '└', '┴', '┘'));

        output
    }

    fn effective_widths(&self) -> Vec<usize> {
        self.column_widths
            .iter()
            .zip(&self.max_widths)
            .map(|(w, max)| max.map_or(*w, |m| (*w).min(m)))
            .collect()
    }

    fn render_border(widths: &[usize], left: char, mid: char, right: char) -> String {
        let mut s = String::new();
        s.push(left);

        for (i, width) in widths.iter().enumerate() {
            s.push_str(&"─".repeat(width + 2));
            if i < widths.len() - 1 {
                s.push(mid);
            }
        }

        s.push(right);
        s
    }

    fn render_row(&self, widths: &[usize], row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            let cell = truncate(cell, *width);
            let pad = width.saturating_sub(cell_width(&cell));
            s.push_str(&format!(" {}{} │", cell, " ".repeat(pad)));
        }

        s
    }
}

fn truncate(cell: &str, width: usize) -> String {
    if cell_width(cell) <= width {
        return cell.to_string();
    }
    let mut out: String = cell.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
