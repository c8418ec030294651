use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do with a row that has more values than there are player columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExcessTokens {
    /// Drop the row and record it as skipped.
    #[default]
    Skip,
    /// Keep the first `player_count` values, discard the rest.
    Truncate,
    /// Abort the whole parse with `ParseError::InconsistentColumnCount`.
    Fail,
}

impl fmt::Display for ExcessTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExcessTokens::Skip => write!(f, "skip"),
            ExcessTokens::Truncate => write!(f, "truncate"),
            ExcessTokens::Fail => write!(f, "fail"),
        }
    }
}

/// Tunables for the scoreboard text parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Lines shorter than this (in characters, after cleaning) are noise.
    #[serde(default = "default_min_line_chars")]
    pub min_line_chars: usize,
    /// Number of consecutive spaces that separates the label from the values.
    #[serde(default = "default_label_gap")]
    pub label_gap: usize,
    /// Player columns per row.
    #[serde(default = "default_player_count")]
    pub player_count: usize,
    #[serde(default)]
    pub excess_tokens: ExcessTokens,
}

fn default_name() -> String {
    "lol".to_string()
}

fn default_min_line_chars() -> usize {
    20
}

fn default_label_gap() -> usize {
    4
}

fn default_player_count() -> usize {
    10
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: None,
            min_line_chars: default_min_line_chars(),
            label_gap: default_label_gap(),
            player_count: default_player_count(),
            excess_tokens: ExcessTokens::default(),
        }
    }
}
