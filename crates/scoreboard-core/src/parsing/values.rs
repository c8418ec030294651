use serde::Serialize;
use std::fmt;

/// Typed reading of a single scoreboard cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StatValue {
    /// Plain number, e.g. creep score or gold ("12450").
    Count(u64),
    /// Slash-separated numbers, e.g. K/D/A ("5/2/7").
    Split(Vec<u64>),
    /// Anything else: champion names, summoner names, OCR garbage.
    Text(String),
}

impl StatValue {
    /// Interpret a cleaned token.
    ///
    /// Handles formats like:
    /// - "12450" -> Count(12450)
    /// - "5/2/7" -> Split([5, 2, 7])
    /// - "아리" or "5/x/7" -> Text(..)
    pub fn parse(token: &str) -> StatValue {
        let token = token.trim();

        if let Some(n) = parse_count(token) {
            return StatValue::Count(n);
        }

        if token.contains('/') {
            let parts: Option<Vec<u64>> = token.split('/').map(parse_count).collect();
            if let Some(parts) = parts {
                return StatValue::Split(parts);
            }
        }

        StatValue::Text(token.to_string())
    }

    pub fn as_count(&self) -> Option<u64> {
        match self {
            StatValue::Count(n) => Some(*n),
            _ => None,
        }
    }

    /// Kills/deaths/assists, if this is a three-part split.
    pub fn kda(&self) -> Option<(u64, u64, u64)> {
        match self {
            StatValue::Split(parts) if parts.len() == 3 => Some((parts[0], parts[1], parts[2])),
            _ => None,
        }
    }
}

fn parse_count(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{n}"),
            StatValue::Split(parts) => {
                let joined: Vec<String> = parts.iter().map(u64::to_string).collect();
                write!(f, "{}", joined.join("/"))
            }
            StatValue::Text(s) => write!(f, "{s}"),
        }
    }
}
