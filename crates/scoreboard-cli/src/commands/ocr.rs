use scoreboard_core::error::ScoreboardError;
use scoreboard_core::extraction::tesseract::TesseractEngine;
use scoreboard_core::extraction::OcrEngine;
use scoreboard_core::parsing::clean_lines;
use std::path::PathBuf;

pub fn run(
    image_file: PathBuf,
    clean: bool,
    lang: &str,
    psm: u8,
) -> Result<(), ScoreboardError> {
    if !TesseractEngine::is_available() {
        return Err(ScoreboardError::TesseractNotFound);
    }

    let image = std::fs::read(&image_file)?;
    let engine = TesseractEngine::new().with_lang(lang).with_psm(psm);
    let text = engine.extract_text(&image)?;

    if clean {
        for line in clean_lines(&text) {
            println!("{line}");
        }
    } else {
        print!("{text}");
    }

    Ok(())
}
