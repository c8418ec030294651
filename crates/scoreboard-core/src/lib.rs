pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod profile;

use error::ScoreboardError;
use extraction::OcrEngine;
use model::ParsedScoreboard;
use profile::schema::ParserOptions;

pub use parsing::{parse, parse_detailed, parse_with};

/// Main API entry point: OCR a scoreboard capture and rebuild its stat table.
///
/// Image preprocessing is left to the caller; the bytes go to the engine as-is.
pub fn extract_scoreboard(
    image_bytes: &[u8],
    engine: &dyn OcrEngine,
    options: &ParserOptions,
) -> Result<ParsedScoreboard, ScoreboardError> {
    let text = engine.extract_text(image_bytes)?;
    tracing::info!(
        backend = engine.backend_name(),
        chars = text.chars().count(),
        "OCR text extracted"
    );

    let parsed = parsing::parse_detailed(&text, options)?;
    Ok(parsed)
}
