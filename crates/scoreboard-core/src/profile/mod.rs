pub mod builtin;
pub mod schema;

use crate::error::ScoreboardError;
use schema::ParserOptions;
use std::path::Path;

/// Upper bound on player columns; anything above is a typo, not a scoreboard.
pub const MAX_PLAYER_COUNT: usize = 64;

/// Load a parser profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<ParserOptions, ScoreboardError> {
    let content = std::fs::read_to_string(path).map_err(|e| ScoreboardError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<ParserOptions, ScoreboardError> {
    let options: ParserOptions =
        serde_json::from_str(json).map_err(|e| ScoreboardError::ProfileLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_profile(&options)?;
    Ok(options)
}

/// Parse a profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<ParserOptions, ScoreboardError> {
    let options: ParserOptions = serde_json::from_str(json).map_err(ScoreboardError::Json)?;
    validate_profile(&options)?;
    Ok(options)
}

/// Validate that a profile is usable.
pub fn validate_profile(options: &ParserOptions) -> Result<(), ScoreboardError> {
    if options.name.trim().is_empty() {
        return Err(ScoreboardError::ProfileInvalid(
            "name must not be empty".into(),
        ));
    }

    if options.label_gap == 0 {
        return Err(ScoreboardError::ProfileInvalid(
            "label_gap must be at least 1".into(),
        ));
    }

    if options.player_count == 0 || options.player_count > MAX_PLAYER_COUNT {
        return Err(ScoreboardError::ProfileInvalid(format!(
            "player_count must be between 1 and {}, got {}",
            MAX_PLAYER_COUNT, options.player_count
        )));
    }

    if options.min_line_chars == 0 {
        return Err(ScoreboardError::ProfileInvalid(
            "min_line_chars must be at least 1".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::schema::ExcessTokens;
    use std::io::Write;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let options = parse_profile_str(r#"{ "name": "custom" }"#).unwrap();
        assert_eq!(options.name, "custom");
        assert_eq!(options.min_line_chars, 20);
        assert_eq!(options.label_gap, 4);
        assert_eq!(options.player_count, 10);
        assert_eq!(options.excess_tokens, ExcessTokens::Skip);
    }

    #[test]
    fn test_excess_policy_lowercase() {
        let options =
            parse_profile_str(r#"{ "name": "t", "excess_tokens": "truncate" }"#).unwrap();
        assert_eq!(options.excess_tokens, ExcessTokens::Truncate);
    }

    #[test]
    fn test_reject_zero_players() {
        let err = parse_profile_str(r#"{ "name": "t", "player_count": 0 }"#).unwrap_err();
        assert!(matches!(err, ScoreboardError::ProfileInvalid(_)));
    }

    #[test]
    fn test_reject_too_many_players() {
        let err = parse_profile_str(r#"{ "name": "t", "player_count": 65 }"#).unwrap_err();
        assert!(matches!(err, ScoreboardError::ProfileInvalid(_)));
    }

    #[test]
    fn test_reject_zero_gap() {
        let err = parse_profile_str(r#"{ "name": "t", "label_gap": 0 }"#).unwrap_err();
        assert!(matches!(err, ScoreboardError::ProfileInvalid(_)));
    }

    #[test]
    fn test_reject_blank_name() {
        let err = parse_profile_str(r#"{ "name": "  " }"#).unwrap_err();
        assert!(matches!(err, ScoreboardError::ProfileInvalid(_)));
    }

    #[test]
    fn test_unknown_policy_is_json_error() {
        let err = parse_profile_str(r#"{ "excess_tokens": "pad" }"#).unwrap_err();
        assert!(matches!(err, ScoreboardError::Json(_)));
    }

    #[test]
    fn test_load_profile_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "name": "five-a-side", "player_count": 5 }}"#).unwrap();

        let options = load_profile(file.path()).unwrap();
        assert_eq!(options.name, "five-a-side");
        assert_eq!(options.player_count, 5);
    }

    #[test]
    fn test_load_profile_bad_json_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        match load_profile(file.path()).unwrap_err() {
            ScoreboardError::ProfileLoad { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_profile_missing_file() {
        let err = load_profile(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(matches!(err, ScoreboardError::ProfileLoad { .. }));
    }
}
