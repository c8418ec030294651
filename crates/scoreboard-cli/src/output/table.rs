use scoreboard_core::model::ScoreboardTable;

use super::{grid, Orientation};

/// Terminal columns taken by `s`. Hangul syllables render double-width.
fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| if ('\u{AC00}'..='\u{D7A3}').contains(&c) { 2 } else { 1 })
        .sum()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn format(table: &ScoreboardTable, orientation: Orientation) -> String {
    let (header, rows) = grid(table, orientation);

    let mut widths: Vec<usize> = header.iter().map(|h| display_width(h)).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let render_row = |cells: &[String]| -> String {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(c, *w))
            .collect();
        format!("  {}", line.join("  ").trim_end())
    };

    let mut out = String::new();
    out.push_str(&render_row(&header));
    out.push('\n');
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&format!("  {}\n", "-".repeat(total)));
    for row in &rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out
}
