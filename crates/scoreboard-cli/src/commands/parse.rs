use scoreboard_core::error::{ParseError, ScoreboardError};
use scoreboard_core::extraction::tesseract::TesseractEngine;
use scoreboard_core::extraction::OcrEngine;
use scoreboard_core::model::ParsedScoreboard;
use scoreboard_core::profile::schema::ParserOptions;
use scoreboard_core::profile::{builtin, load_profile};
use std::path::{Path, PathBuf};

use crate::output::{self, Orientation, OutputFormat};

pub struct ParseArgs {
    pub input_file: PathBuf,
    pub force_text: bool,
    pub profile: Option<String>,
    pub config: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub orientation: Orientation,
    pub typed: bool,
    pub output_file: Option<PathBuf>,
    pub lang: String,
    pub psm: u8,
}

pub fn run(args: ParseArgs) -> Result<(), ScoreboardError> {
    let options = resolve_options(args.profile.as_deref(), args.config.as_deref())?;

    let raw_text = if args.force_text || is_text_file(&args.input_file) {
        std::fs::read_to_string(&args.input_file)?
    } else {
        let image = std::fs::read(&args.input_file)?;
        let engine = TesseractEngine::new()
            .with_lang(args.lang)
            .with_psm(args.psm);
        tracing::info!(backend = engine.backend_name(), file = %args.input_file.display(), "running OCR");
        engine.extract_text(&image)?
    };

    let parsed = match scoreboard_core::parse_detailed(&raw_text, &options) {
        Ok(parsed) => parsed,
        Err(err @ ParseError::NoValidRows { .. }) => {
            print_candidates(&err);
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    let output_str = render(&parsed, args.output_format, args.orientation, args.typed)?;

    match args.output_file {
        Some(path) => {
            std::fs::write(&path, &output_str)?;
            eprintln!(
                "Parsed {} categor{} for {} players, written to {}",
                parsed.table.category_major().len(),
                if parsed.table.category_major().len() == 1 { "y" } else { "ies" },
                parsed.table.player_count(),
                path.display()
            );
        }
        None => {
            print!("{output_str}");
        }
    }

    if !parsed.skipped_lines.is_empty() {
        eprintln!(
            "  {} line(s) skipped during parsing (use -vv to see why)",
            parsed.skipped_lines.len()
        );
    }

    Ok(())
}

/// Pick the profile: custom file, named preset, or the default preset.
fn resolve_options(
    preset: Option<&str>,
    config: Option<&Path>,
) -> Result<ParserOptions, ScoreboardError> {
    match (config, preset) {
        (Some(path), _) => load_profile(path),
        (None, Some(name)) => builtin::load_preset(name),
        (None, None) => builtin::load_preset(builtin::DEFAULT_PRESET),
    }
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}

fn render(
    parsed: &ParsedScoreboard,
    format: OutputFormat,
    orientation: Orientation,
    typed: bool,
) -> Result<String, ScoreboardError> {
    let rendered = match format {
        OutputFormat::Json if typed => output::json::format_typed(&parsed.table)?,
        OutputFormat::Json => output::json::format(parsed, orientation)?,
        OutputFormat::Csv => output::delimited::format(&parsed.table, orientation, ','),
        OutputFormat::Tsv => output::delimited::format(&parsed.table, orientation, '\t'),
        OutputFormat::Table => output::table::format(&parsed.table, orientation),
    };
    Ok(rendered)
}

/// Show the cleaned OCR lines so the table can be fixed up by hand.
fn print_candidates(err: &ParseError) {
    let Some(candidates) = err.candidates() else {
        return;
    };
    eprintln!("Could not build a table from the scoreboard. Cleaned OCR text:\n");
    for (i, line) in candidates.iter().enumerate() {
        eprintln!("  {:>3} | {}", i, line);
    }
    eprintln!();
}
