use crate::error::ScoreboardError;
use crate::profile::schema::ParserOptions;
use crate::profile::validate_profile;

const LOL_JSON: &str = include_str!("../../../../profiles/lol.json");
const LOL_STRICT_JSON: &str = include_str!("../../../../profiles/lol-strict.json");
const LOL_LENIENT_JSON: &str = include_str!("../../../../profiles/lol-lenient.json");

/// Available predefined profiles. The first one is the default.
pub const PRESETS: &[&str] = &["lol", "lol-strict", "lol-lenient"];

pub const DEFAULT_PRESET: &str = "lol";

/// Load a predefined profile by name.
pub fn load_preset(name: &str) -> Result<ParserOptions, ScoreboardError> {
    let json = match name {
        "lol" => LOL_JSON,
        "lol-strict" => LOL_STRICT_JSON,
        "lol-lenient" => LOL_LENIENT_JSON,
        _ => {
            return Err(ScoreboardError::ProfileInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let options: ParserOptions = serde_json::from_str(json)?;
    validate_profile(&options)?;
    Ok(options)
}
