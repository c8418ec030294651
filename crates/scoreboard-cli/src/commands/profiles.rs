use scoreboard_core::error::ScoreboardError;
use scoreboard_core::profile::{builtin, load_profile};
use std::path::Path;

pub fn list() -> Result<(), ScoreboardError> {
    println!("Available predefined profiles:\n");
    for name in builtin::PRESETS {
        let options = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {:<12} {} players, extra values: {}{}",
            name, options.player_count, options.excess_tokens, default_marker
        );
        if let Some(ref desc) = options.description {
            println!("               {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), ScoreboardError> {
    let options = builtin::load_preset(preset)?;
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), ScoreboardError> {
    let options = load_profile(file)?;
    println!(
        "OK: '{}' ({} players, label gap {}, min line {} chars, extra values: {})",
        options.name,
        options.player_count,
        options.label_gap,
        options.min_line_chars,
        options.excess_tokens
    );
    Ok(())
}
