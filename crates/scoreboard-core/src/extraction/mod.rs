pub mod tesseract;

use crate::error::ScoreboardError;

/// Trait for OCR backends that turn a scoreboard image into raw text.
pub trait OcrEngine: Send + Sync {
    /// Recognise text in the encoded image (PNG, JPEG, ...).
    fn extract_text(&self, image_bytes: &[u8]) -> Result<String, ScoreboardError>;

    /// Name of this OCR backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
