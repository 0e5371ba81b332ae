//! Box-drawn text tables.

use std::fmt::Write as _;

/// A table with an upper-cased header, body rows and an optional footer,
/// drawn with light box-drawing characters.
///
/// # Examples
///
/// ```
/// use epghelper::output::Table;
///
/// let mut table = Table::new(["Port", "Size"]);
/// table.push_row(["5432", "2.0 KB"]);
/// table.set_footer(["Total", "2.0 KB"]);
///
/// let rendered = table.render();
/// assert!(rendered.starts_with('┌'));
/// assert!(rendered.contains("│ PORT  │ SIZE   │"));
/// assert!(rendered.contains("│ 5432  │ 2.0 KB │"));
/// assert!(rendered.contains("│ TOTAL │ 2.0 KB │"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}

impl Table {
    /// Create a table with the given column titles.
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            footer: None,
        }
    }

    /// Append a body row. Missing trailing cells render empty.
    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Set the footer row, drawn below a separator.
    pub fn set_footer<I, S>(&mut self, footer: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.footer = Some(footer.into_iter().map(Into::into).collect());
    }

    /// Render the table, one line per row, each terminated by a newline.
    #[must_use]
    pub fn render(&self) -> String {
        let header: Vec<String> = self.header.iter().map(|c| c.to_uppercase()).collect();
        let footer: Option<Vec<String>> = self
            .footer
            .as_ref()
            .map(|f| f.iter().map(|c| c.to_uppercase()).collect());

        let columns = std::iter::once(&header)
            .chain(&self.rows)
            .chain(footer.as_ref())
            .map(Vec::len)
            .max()
            .unwrap_or(0);

        let mut widths = vec![0usize; columns];
        for row in std::iter::once(&header)
            .chain(&self.rows)
            .chain(footer.as_ref())
        {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        rule(&mut out, &widths, ('┌', '┬', '┐'));
        line(&mut out, &widths, &header);
        rule(&mut out, &widths, ('├', '┼', '┤'));
        for row in &self.rows {
            line(&mut out, &widths, row);
        }
        if let Some(ref footer) = footer {
            rule(&mut out, &widths, ('├', '┼', '┤'));
            line(&mut out, &widths, footer);
        }
        rule(&mut out, &widths, ('└', '┴', '┘'));
        out
    }
}

fn rule(out: &mut String, widths: &[usize], (left, mid, right): (char, char, char)) {
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        out.extend(std::iter::repeat('─').take(width + 2));
    }
    out.push(right);
    out.push('\n');
}

fn line(out: &mut String, widths: &[usize], cells: &[String]) {
    out.push('│');
    for (i, &width) in widths.iter().enumerate() {
        let cell = cells.get(i).map_or("", String::as_str);
        // Writing to a String cannot fail.
        let _ = write!(out, " {cell:<width$} │");
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_footer() {
        let mut table = Table::new(["a", "bb"]);
        table.push_row(["1", "2"]);

        let expected = "\
┌───┬────┐
│ A │ BB │
├───┼────┤
│ 1 │ 2  │
└───┴────┘
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_render_with_footer_and_short_rows() {
        let mut table = Table::new(["port", "size", "url"]);
        table.push_row(["5432", "2.0 KB", "pg://x"]);
        table.set_footer(["", "total"]);

        let expected = "\
┌──────┬────────┬────────┐
│ PORT │ SIZE   │ URL    │
├──────┼────────┼────────┤
│ 5432 │ 2.0 KB │ pg://x │
├──────┼────────┼────────┤
│      │ TOTAL  │        │
└──────┴────────┴────────┘
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_empty_body() {
        let table = Table::new(["port"]);
        assert_eq!(table.render().lines().count(), 4);
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let mut table = Table::new(["x"]);
        table.push_row(["é"]);
        let rendered = table.render();
        assert!(rendered.contains("│ é │"));
    }
}
