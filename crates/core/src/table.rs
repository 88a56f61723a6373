//! Pipe-table sub-parser.
//!
//! Finds maximal runs of newline-terminated lines that start and end
//! with `|` and rewrites each run as a table: line one becomes the
//! header row, line two is discarded as the separator, remaining lines
//! become data rows. A run of a single line is left untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// One or more consecutive lines, each `|`-delimited on both ends and
/// newline-terminated. A final row without a trailing newline is not
/// part of the run.
static TABLE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(?:^\|[^\n]+\|\n)+").expect("table pattern compiles"));

/// Splits a row on `|` and drops cells that are empty after trimming,
/// which removes the phantom cells produced by the outer delimiters.
fn row_cells(row: &str) -> Vec<&str> {
    row.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Rewrites every table run in `html`. Text outside runs is untouched.
pub fn render_tables(html: &str) -> String {
    TABLE_RUN
        .replace_all(html, |caps: &Captures<'_>| {
            let matched = &caps[0];
            let rows: Vec<&str> = matched.trim().split('\n').collect();
            if rows.len() < 2 {
                return matched.to_string();
            }

            let mut table = String::from("<table>");

            let header = row_cells(rows[0]);
            if !header.is_empty() {
                table.push_str("<thead><tr>");
                for cell in header {
                    table.push_str("<th>");
                    table.push_str(cell);
                    table.push_str("</th>");
                }
                table.push_str("</tr></thead>");
            }

            // Row two is the separator; data starts at row three.
            if rows.len() > 2 {
                table.push_str("<tbody>");
                for row in &rows[2..] {
                    let cells = row_cells(row);
                    if cells.is_empty() {
                        continue;
                    }
                    table.push_str("<tr>");
                    for cell in cells {
                        table.push_str("<td>");
                        table.push_str(cell);
                        table.push_str("</td>");
                    }
                    table.push_str("</tr>");
                }
                table.push_str("</tbody>");
            }

            table.push_str("</table>");
            table
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_data_rows() {
        let out = render_tables("| A | B |\n|---|---|\n| 1 | 2 |\n");
        assert_eq!(
            out,
            "<table><thead><tr><th>A</th><th>B</th></tr></thead>\
             <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
        );
    }

    #[test]
    fn separator_row_contributes_nothing() {
        let out = render_tables("| A |\n|---|\n| 1 |\n");
        assert!(!out.contains("---"));
        assert_eq!(out.matches("<tr>").count(), 2);
    }

    #[test]
    fn two_line_run_is_header_only() {
        let out = render_tables("| A | B |\n|---|---|\n");
        assert_eq!(
            out,
            "<table><thead><tr><th>A</th><th>B</th></tr></thead></table>"
        );
    }

    #[test]
    fn single_line_run_left_untouched() {
        assert_eq!(render_tables("| lonely |\n"), "| lonely |\n");
    }

    #[test]
    fn final_row_without_newline_is_excluded() {
        // The last row misses its trailing newline, so the run is only
        // header plus separator and the data row stays literal.
        let out = render_tables("| A |\n|---|\n| 1 |");
        assert_eq!(
            out,
            "<table><thead><tr><th>A</th></tr></thead></table>| 1 |"
        );
    }

    #[test]
    fn surrounding_text_untouched() {
        let out = render_tables("before\n| A |\n|---|\n| 1 |\nafter\n");
        assert!(out.starts_with("before\n<table>"));
        assert!(out.ends_with("after\n"));
    }

    #[test]
    fn multiple_runs_each_rewritten() {
        let out = render_tables("| A |\n|---|\n| 1 |\n\n| B |\n|---|\n| 2 |\n");
        assert_eq!(out.matches("<table>").count(), 2);
        assert!(out.contains("<th>A</th>"));
        assert!(out.contains("<th>B</th>"));
    }

    #[test]
    fn cells_are_trimmed() {
        let out = render_tables("|  padded  |  cells  |\n|---|---|\n");
        assert!(out.contains("<th>padded</th><th>cells</th>"));
    }
}
