pub mod delimited;
pub mod json;
pub mod table;

use scoreboard_core::model::ScoreboardTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Tsv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Orientation {
    /// One row per player slot, one column per category
    Player,
    /// One row per category, one column per player slot
    Category,
}

/// Header plus body cells for the chosen orientation.
pub fn grid(table: &ScoreboardTable, orientation: Orientation) -> (Vec<String>, Vec<Vec<String>>) {
    match orientation {
        Orientation::Player => {
            let mut header = vec!["player".to_string()];
            header.extend(table.categories().map(str::to_string));
            let rows = table
                .by_player()
                .into_iter()
                .map(|p| {
                    let mut row = vec![p.slot];
                    row.extend(p.stats.into_iter().map(|(_, v)| v));
                    row
                })
                .collect();
            (header, rows)
        }
        Orientation::Category => {
            let mut header = vec!["category".to_string()];
            header.extend(table.slots());
            let rows = table
                .category_major()
                .iter()
                .map(|r| {
                    let mut row = vec![r.label.clone()];
                    row.extend(r.values.iter().cloned());
                    row
                })
                .collect();
            (header, rows)
        }
    }
}
