use crate::parsing::values::StatValue;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// One statistic (e.g. "Kills") with one value per player slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub label: String,
    pub values: Vec<String>,
}

/// Stats for a single player slot, in category order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    pub slot: String,
    pub stats: Vec<(String, String)>,
}

impl PlayerStats {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.stats
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

impl Serialize for PlayerStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stats.len()))?;
        for (label, value) in &self.stats {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Name of the player column at zero-based `index` ("player1", "player2", ...).
pub fn slot_name(index: usize) -> String {
    format!("player{}", index + 1)
}

/// Scoreboard reconstructed from one capture.
///
/// Stored category-major (one row per statistic, in the order the rows were
/// found). Serializes player-major: `{"player1": {"Kills": "12", ...}, ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardTable {
    player_count: usize,
    rows: Vec<CategoryRow>,
}

impl ScoreboardTable {
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            rows: Vec::new(),
        }
    }

    /// Append a category row. `values` must hold exactly `player_count` entries.
    ///
    /// A label that already exists is renamed to "<label> (2)", "<label> (3)", ...
    /// so every category stays addressable. Returns the label actually used.
    pub(crate) fn push_row(&mut self, label: &str, values: Vec<String>) -> String {
        debug_assert_eq!(values.len(), self.player_count);

        let mut unique = label.to_string();
        let mut n = 2;
        while self.rows.iter().any(|r| r.label == unique) {
            unique = format!("{label} ({n})");
            n += 1;
        }

        self.rows.push(CategoryRow {
            label: unique.clone(),
            values,
        });
        unique
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Category rows in encounter order.
    pub fn category_major(&self) -> &[CategoryRow] {
        &self.rows
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.label.as_str())
    }

    pub fn slots(&self) -> impl Iterator<Item = String> {
        (0..self.player_count).map(slot_name)
    }

    pub fn row(&self, label: &str) -> Option<&CategoryRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// Value for a player slot ("player3") and category label.
    pub fn get(&self, slot: &str, label: &str) -> Option<&str> {
        let index = slot_index(slot)?;
        if index >= self.player_count {
            return None;
        }
        self.row(label).map(|r| r.values[index].as_str())
    }

    pub fn typed_value(&self, slot: &str, label: &str) -> Option<StatValue> {
        self.get(slot, label).map(StatValue::parse)
    }

    /// Transpose into one record per player slot.
    pub fn by_player(&self) -> Vec<PlayerStats> {
        (0..self.player_count)
            .map(|i| PlayerStats {
                slot: slot_name(i),
                stats: self
                    .rows
                    .iter()
                    .map(|r| (r.label.clone(), r.values[i].clone()))
                    .collect(),
            })
            .collect()
    }
}

fn slot_index(slot: &str) -> Option<usize> {
    let n: usize = slot.strip_prefix("player")?.parse().ok()?;
    n.checked_sub(1)
}

impl Serialize for ScoreboardTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let players = self.by_player();
        let mut map = serializer.serialize_map(Some(players.len()))?;
        for player in &players {
            map.serialize_entry(&player.slot, player)?;
        }
        map.end()
    }
}

/// Why a cleaned line did not become a category row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    TooShort { chars: usize },
    NoLabelGap,
    TooFewTokens { found: usize },
    TooManyTokens { found: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooShort { chars } => write!(f, "too short ({chars} chars)"),
            SkipReason::NoLabelGap => write!(f, "no gap between label and values"),
            SkipReason::TooFewTokens { found } => write!(f, "too few values ({found})"),
            SkipReason::TooManyTokens { found } => write!(f, "too many values ({found})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    pub line_index: usize,
    pub text: String,
    pub reason: SkipReason,
}

/// Parse result with diagnostics for the lines that were dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedScoreboard {
    pub table: ScoreboardTable,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped_lines: Vec<SkippedLine>,
}
