use scoreboard_core::error::ScoreboardError;
use scoreboard_core::model::{ParsedScoreboard, ScoreboardTable};
use scoreboard_core::parsing::values::StatValue;
use serde_json::json;

use super::Orientation;

/// Player-major output is the table's own serialization; category-major
/// lists the rows in encounter order.
pub fn format(parsed: &ParsedScoreboard, orientation: Orientation) -> Result<String, ScoreboardError> {
    let json = match orientation {
        Orientation::Player => serde_json::to_string_pretty(parsed)?,
        Orientation::Category => serde_json::to_string_pretty(&json!({
            "categories": parsed.table.category_major(),
            "skipped_lines": parsed.skipped_lines,
        }))?,
    };
    Ok(format!("{json}\n"))
}

/// One object per player, each stat with its raw text and typed reading.
pub fn format_typed(table: &ScoreboardTable) -> Result<String, ScoreboardError> {
    let players: Vec<serde_json::Value> = table
        .by_player()
        .into_iter()
        .map(|p| {
            let stats: Vec<serde_json::Value> = p
                .stats
                .iter()
                .map(|(label, raw)| {
                    json!({
                        "category": label,
                        "raw": raw,
                        "value": StatValue::parse(raw),
                    })
                })
                .collect();
            json!({ "player": p.slot, "stats": stats })
        })
        .collect();
    Ok(format!("{}\n", serde_json::to_string_pretty(&players)?))
}
