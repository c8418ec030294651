use std::path::PathBuf;

/// Why OCR text could not be turned into a scoreboard table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No line survived filtering. Carries the cleaned lines so a caller can
    /// show them for manual correction.
    #[error("no scoreboard rows found in OCR text ({} candidate line(s))", .candidates.len())]
    NoValidRows { candidates: Vec<String> },

    #[error(
        "line {line_index} ('{category}') has {found} value(s), expected {expected}"
    )]
    InconsistentColumnCount {
        line_index: usize,
        category: String,
        expected: usize,
        found: usize,
    },
}

impl ParseError {
    /// Cleaned lines to fall back on when nothing parsed.
    pub fn candidates(&self) -> Option<&[String]> {
        match self {
            ParseError::NoValidRows { candidates } => Some(candidates),
            ParseError::InconsistentColumnCount { .. } => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoreboardError {
    #[error("OCR failed: {0}")]
    Extraction(String),

    #[error("tesseract not found. Install it: brew install tesseract tesseract-lang (macOS) or apt install tesseract-ocr tesseract-ocr-kor (Linux)")]
    TesseractNotFound,

    #[error("tesseract failed with exit code {code}: {stderr}")]
    TesseractFailed { code: i32, stderr: String },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to load profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid profile: {0}")]
    ProfileInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
