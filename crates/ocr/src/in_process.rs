//! OCR through the in-process Tesseract bindings.

use crate::{normalize_to_png, OcrError, DEFAULT_LANGUAGE};
use deck_core::ImageTextExtractor;
use leptess::LepTess;

/// Recognizes text with libtesseract, loaded once per picture.
#[derive(Debug, Clone)]
pub struct LeptessOcr {
    language: String,
}

impl Default for LeptessOcr {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl LeptessOcr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Recognize text, reporting why it failed.
    pub fn recognize(&self, image: &[u8]) -> Result<String, OcrError> {
        let png = normalize_to_png(image)?;

        let mut lt = LepTess::new(None, &self.language).map_err(|e| {
            OcrError::Init(format!("language '{}': {}", self.language, e))
        })?;
        lt.set_image_from_mem(&png)
            .map_err(|e| OcrError::Decode(format!("Failed to set image from memory: {}", e)))?;

        lt.get_utf8_text()
            .map_err(|e| OcrError::Recognition {
                status: "utf8".to_string(),
                stderr: e.to_string(),
            })
    }
}

impl ImageTextExtractor for LeptessOcr {
    fn extract(&self, image: &[u8]) -> String {
        self.recognize(image).unwrap_or_else(|e| {
            log::debug!("OCR skipped for {}-byte image: {}", image.len(), e);
            String::new()
        })
    }
}
