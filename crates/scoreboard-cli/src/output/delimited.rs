use scoreboard_core::model::ScoreboardTable;

use super::{grid, Orientation};

/// Render as CSV (`,`) or TSV (`\t`) with a header row.
pub fn format(table: &ScoreboardTable, orientation: Orientation, delimiter: char) -> String {
    let (header, rows) = grid(table, orientation);

    let mut out = String::new();
    for row in std::iter::once(&header).chain(rows.iter()) {
        let fields: Vec<String> = row.iter().map(|f| escape(f, delimiter)).collect();
        out.push_str(&fields.join(&delimiter.to_string()));
        out.push('\n');
    }
    out
}

fn escape(field: &str, delimiter: char) -> String {
    if delimiter == '\t' {
        return field.replace(['\t', '\n', '\r'], " ");
    }
    if field.contains(delimiter) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
