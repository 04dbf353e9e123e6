//! OCR through the `tesseract` executable.

use crate::{normalize_to_png, OcrError, DEFAULT_LANGUAGE};
use deck_core::ImageTextExtractor;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Runs `tesseract stdin stdout` on each picture.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    binary: PathBuf,
    language: String,
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl TesseractOcr {
    /// Use `tesseract` from `PATH` with English.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific Tesseract executable.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Use other Tesseract language codes (e.g. "eng+deu").
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Recognize text, reporting why it failed.
    pub fn recognize(&self, image: &[u8]) -> Result<String, OcrError> {
        let png = normalize_to_png(image)?;

        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", &self.language])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // The child is always reaped, even when it stops reading stdin early.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(&png),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        written?;
        if !output.status.success() {
            return Err(OcrError::Recognition {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ImageTextExtractor for TesseractOcr {
    fn extract(&self, image: &[u8]) -> String {
        match self.recognize(image) {
            Ok(text) => text,
            Err(e) => {
                log::debug!("OCR skipped for {}-byte image: {}", image.len(), e);
                String::new()
            }
        }
    }
}
