mod commands;
mod output;

use clap::{Parser, Subcommand};
use output::{Orientation, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "scoreboard",
    version,
    about = "Turn OCR'd game scoreboard captures into per-player stat tables"
)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a stat table from a scoreboard image or an OCR text dump
    Parse {
        /// Path to an image (PNG/JPEG) or a .txt file with OCR output
        input_file: PathBuf,

        /// Treat the input as OCR text regardless of its extension
        #[arg(long)]
        text: bool,

        /// Predefined profile: lol (default), lol-strict, lol-lenient
        #[arg(short, long = "profile", value_name = "NAME", conflicts_with = "config")]
        profile: Option<String>,

        /// Custom JSON profile file
        #[arg(short, long = "config", value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,

        /// Table orientation: one row per player, or one row per category
        #[arg(long, value_enum, default_value_t = Orientation::Player)]
        by: Orientation,

        /// JSON only: include typed values (counts, K/D/A splits)
        #[arg(long)]
        typed: bool,

        /// Write output to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        #[command(flatten)]
        ocr: OcrArgs,
    },
    /// Run OCR on an image and print the recognised text
    Ocr {
        /// Path to an image (PNG/JPEG)
        image_file: PathBuf,

        /// Print the cleaned lines the parser would see instead of raw text
        #[arg(long)]
        clean: bool,

        #[command(flatten)]
        ocr: OcrArgs,
    },
    /// Inspect and validate parser profiles
    Profiles {
        #[command(subcommand)]
        action: ProfilesAction,
    },
}

#[derive(clap::Args)]
struct OcrArgs {
    /// Tesseract language(s)
    #[arg(long, default_value = scoreboard_core::extraction::tesseract::DEFAULT_LANG)]
    lang: String,

    /// Tesseract page segmentation mode
    #[arg(long, default_value_t = scoreboard_core::extraction::tesseract::DEFAULT_PSM)]
    psm: u8,
}

#[derive(Subcommand)]
enum ProfilesAction {
    /// List predefined profiles
    List,
    /// Print a predefined profile as JSON
    Show {
        /// Preset name (e.g., "lol")
        preset: String,
    },
    /// Validate a custom profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse {
            input_file,
            text,
            profile,
            config,
            output,
            by,
            typed,
            out,
            ocr,
        } => commands::parse::run(commands::parse::ParseArgs {
            input_file,
            force_text: text,
            profile,
            config,
            output_format: output,
            orientation: by,
            typed,
            output_file: out,
            lang: ocr.lang,
            psm: ocr.psm,
        }),
        Commands::Ocr {
            image_file,
            clean,
            ocr,
        } => commands::ocr::run(image_file, clean, &ocr.lang, ocr.psm),
        Commands::Profiles { action } => match action {
            ProfilesAction::List => commands::profiles::list(),
            ProfilesAction::Show { preset } => commands::profiles::show(&preset),
            ProfilesAction::Validate { file } => commands::profiles::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
