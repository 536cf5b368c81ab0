use crate::cli::output::current_preferences;

/// Describes how a column aligns its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Configuration for a single column in the rendered table.
#[derive(Clone, Debug)]
pub struct TableColumn {
    pub header: String,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            max_width: None,
            alignment,
        }
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// A table with column metadata and rows of cells to render.
pub struct Table {
    columns: Vec<TableColumn>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Content width per column: headers and rows both count, capped by the
    /// column's `max_width`.
    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = column.header.chars().count();
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(cell.chars().count());
                    }
                }
                if let Some(max_width) = column.max_width {
                    width = width.min(max_width);
                }
                width
            })
            .collect()
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(cell, widths[idx], column.alignment)
            })
            .collect();
        cells.join("  ").trim_end().to_string()
    }

    /// Renders headers, a rule, and every row.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let headers: Vec<String> = self
            .columns
            .iter()
            .map(|column| column.header.clone())
            .collect();

        let mut out = self.render_row(&headers, &widths);
        out.push('\n');
        out.push_str(&rule_for(&widths));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.render_row(row, &widths));
        }
        out
    }

    /// A horizontal rule spanning the table width, for footers.
    pub fn rule(&self) -> String {
        rule_for(&self.compute_widths())
    }
}

fn rule_for(widths: &[usize]) -> String {
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    let ch = if current_preferences().plain_mode {
        '-'
    } else {
        '─'
    };
    ch.to_string().repeat(total)
}

fn truncate_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let kept: String = text.chars().take(width - 1).collect();
    format!("{kept}…")
}

fn render_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let fitted = truncate_text(text, width);
    let padding = width.saturating_sub(fitted.chars().count());
    match alignment {
        Alignment::Left => format!("{}{}", fitted, " ".repeat(padding)),
        Alignment::Right => format!("{}{}", " ".repeat(padding), fitted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(vec![
            TableColumn::new("Date", Alignment::Left),
            TableColumn::new("Amount", Alignment::Right),
        ]);
        table.push_row(vec!["07/04".into(), "$12.50".into()]);
        table.push_row(vec!["07/05".into(), "$1300.00".into()]);
        table
    }

    #[test]
    fn columns_grow_to_the_widest_cell() {
        let rendered = sample().render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Date     Amount");
        assert_eq!(lines[2], "07/04    $12.50");
        assert_eq!(lines[3], "07/05  $1300.00");
    }

    #[test]
    fn long_cells_are_truncated_with_an_ellipsis() {
        assert_eq!(truncate_text("a very long description", 10), "a very lo…");
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn right_alignment_pads_on_the_left() {
        assert_eq!(render_cell("$5.00", 8, Alignment::Right), "   $5.00");
        assert_eq!(render_cell("Food", 8, Alignment::Left), "Food    ");
    }
}
