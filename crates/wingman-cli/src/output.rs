use crate::menu::wrap::truncate_to_width;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub const fn left(header: &'static str, width: usize) -> Self {
        Self {
            header,
            width,
            align: Align::Left,
        }
    }

    pub const fn right(header: &'static str, width: usize) -> Self {
        Self {
            header,
            width,
            align: Align::Right,
        }
    }
}

/// Fixed-width table: header, dashed rule, rows, dashed rule. Cells are cut
/// to their column width; missing cells render blank.
pub fn format_table(columns: &[Column], rows: &[Vec<String>]) -> Vec<String> {
    let total: usize = columns.iter().map(|c| c.width).sum::<usize>() + columns.len().saturating_sub(1);
    let rule = "-".repeat(total);

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(format_row(columns, columns.iter().map(|c| c.header)));
    lines.push(rule.clone());
    for row in rows {
        lines.push(format_row(columns, row.iter().map(String::as_str)));
    }
    lines.push(rule);
    lines
}

fn format_row<'a>(columns: &[Column], mut cells: impl Iterator<Item = &'a str>) -> String {
    columns
        .iter()
        .map(|col| pad(cells.next().unwrap_or(""), col))
        .collect::<Vec<_>>()
        .join(" ")
}

fn pad(cell: &str, col: &Column) -> String {
    let text = truncate_to_width(cell, col.width);
    let fill = " ".repeat(col.width - text.width());
    match col.align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: [Column; 3] = [
        Column::right("ID", 4),
        Column::left("Name", 6),
        Column::left("City", 5),
    ];

    #[test]
    fn pads_aligns_and_truncates() {
        let rows = vec![
            vec!["7".to_string(), "Ana".to_string(), "Boston".to_string()],
            vec!["12".to_string(), "Bartholomew".to_string()],
        ];
        let lines = format_table(&COLUMNS, &rows);
        assert_eq!(
            lines,
            vec![
                "  ID Name   City ",
                "-----------------",
                "   7 Ana    Bosto",
                "  12 Bartho      ",
                "-----------------",
            ]
        );
    }

    #[test]
    fn empty_table_has_header_and_rules() {
        assert_eq!(format_table(&COLUMNS, &[]).len(), 3);
    }
}
