pub mod clean;
pub mod row;
pub mod values;

use crate::error::ParseError;
use crate::model::{ParsedScoreboard, ScoreboardTable, SkippedLine};
use crate::profile::schema::ParserOptions;
use row::{classify_line, LineOutcome};

pub use clean::clean_lines;
pub use row::{split_label, tokenize};

/// Reconstruct a scoreboard table from raw OCR text with the default profile.
pub fn parse(raw_text: &str) -> Result<ScoreboardTable, ParseError> {
    parse_with(raw_text, &ParserOptions::default())
}

/// Reconstruct a scoreboard table from raw OCR text.
pub fn parse_with(raw_text: &str, options: &ParserOptions) -> Result<ScoreboardTable, ParseError> {
    parse_detailed(raw_text, options).map(|parsed| parsed.table)
}

/// Reconstruct a scoreboard table and report every line that was dropped.
///
/// Lines are cleaned, then each one either becomes a category row (label plus
/// exactly `player_count` values) or is skipped with a reason. Fails with
/// `NoValidRows` when nothing qualifies, carrying the cleaned lines.
pub fn parse_detailed(
    raw_text: &str,
    options: &ParserOptions,
) -> Result<ParsedScoreboard, ParseError> {
    let lines = clean_lines(raw_text);

    let mut table = ScoreboardTable::new(options.player_count);
    let mut skipped_lines = Vec::new();

    for (line_index, line) in lines.iter().enumerate() {
        match classify_line(line, options) {
            LineOutcome::Row { label, values } => {
                let values = values.into_iter().map(str::to_string).collect();
                let used = table.push_row(label, values);
                if used != label {
                    tracing::debug!(line_index, label, renamed = %used, "duplicate category label");
                }
            }
            LineOutcome::Skip(reason) => {
                tracing::debug!(line_index, %reason, line = %line, "skipping line");
                skipped_lines.push(SkippedLine {
                    line_index,
                    text: line.clone(),
                    reason,
                });
            }
            LineOutcome::Excess { label, found } => {
                return Err(ParseError::InconsistentColumnCount {
                    line_index,
                    category: label.to_string(),
                    expected: options.player_count,
                    found,
                });
            }
        }
    }

    if table.is_empty() {
        tracing::info!(lines = lines.len(), "no scoreboard rows recognised");
        return Err(ParseError::NoValidRows { candidates: lines });
    }

    tracing::info!(
        rows = table.category_major().len(),
        skipped = skipped_lines.len(),
        profile = %options.name,
        "parsed scoreboard"
    );

    Ok(ParsedScoreboard {
        table,
        skipped_lines,
    })
}
