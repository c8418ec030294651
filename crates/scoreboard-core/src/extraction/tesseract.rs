use crate::error::ScoreboardError;
use crate::extraction::OcrEngine;
use std::io::Write;
use std::process::Command;

/// Korean + English, which covers both client languages' scoreboards.
pub const DEFAULT_LANG: &str = "kor+eng";

/// Page segmentation mode 4: a single column of text of variable sizes.
/// Keeps each scoreboard row on one output line.
pub const DEFAULT_PSM: u8 = 4;

/// OCR backend that shells out to the `tesseract` command.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    pub lang: String,
    pub psm: u8,
}

impl TesseractEngine {
    pub fn new() -> Self {
        TesseractEngine {
            lang: DEFAULT_LANG.to_string(),
            psm: DEFAULT_PSM,
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_psm(mut self, psm: u8) -> Self {
        self.psm = psm;
        self
    }

    /// Check if tesseract is available on the system.
    pub fn is_available() -> bool {
        Command::new("tesseract")
            .arg("--version")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    fn args(&self, image_path: &std::path::Path) -> Vec<std::ffi::OsString> {
        vec![
            image_path.as_os_str().to_os_string(),
            "stdout".into(),
            "-l".into(),
            self.lang.clone().into(),
            "--psm".into(),
            self.psm.to_string().into(),
        ]
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractEngine {
    fn extract_text(&self, image_bytes: &[u8]) -> Result<String, ScoreboardError> {
        if image_bytes.is_empty() {
            return Err(ScoreboardError::Extraction("image is empty".into()));
        }

        // tesseract sniffs the format from content, the extension is cosmetic
        let mut tmpfile = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .map_err(|e| ScoreboardError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(image_bytes)
            .map_err(|e| ScoreboardError::Extraction(e.to_string()))?;
        tmpfile
            .flush()
            .map_err(|e| ScoreboardError::Extraction(e.to_string()))?;

        tracing::debug!(lang = %self.lang, psm = self.psm, bytes = image_bytes.len(), "running tesseract");

        let output = Command::new("tesseract")
            .args(self.args(tmpfile.path()))
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ScoreboardError::TesseractNotFound
                } else {
                    ScoreboardError::Extraction(format!("tesseract failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(ScoreboardError::TesseractFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout).to_string();
        tracing::debug!(chars = text.chars().count(), "tesseract finished");
        Ok(text)
    }

    fn backend_name(&self) -> &str {
        "tesseract"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_args() {
        let engine = TesseractEngine::new();
        let args: Vec<String> = engine
            .args(Path::new("/tmp/capture.png"))
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec!["/tmp/capture.png", "stdout", "-l", "kor+eng", "--psm", "4"]
        );
    }

    #[test]
    fn test_builder_overrides() {
        let engine = TesseractEngine::new().with_lang("eng").with_psm(6);
        assert_eq!(engine.lang, "eng");
        assert_eq!(engine.psm, 6);
        assert_eq!(engine.backend_name(), "tesseract");
    }

    #[test]
    fn test_empty_image_rejected() {
        let err = TesseractEngine::new().extract_text(&[]).unwrap_err();
        assert!(matches!(err, ScoreboardError::Extraction(_)));
    }
}
