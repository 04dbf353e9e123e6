//! Image text extraction with Tesseract.
//!
//! Pictures are decoded with the `image` crate, normalized to PNG, and handed
//! to Tesseract. [`deck_core::ImageTextExtractor::extract`] never fails: an undecodable
//! picture or a missing Tesseract install yields empty text, so one bad image
//! cannot stop a deck from being read.

pub mod error;
#[cfg(feature = "leptess")]
pub mod in_process;
pub mod tesseract;

pub use error::OcrError;
#[cfg(feature = "leptess")]
pub use in_process::LeptessOcr;
pub use tesseract::TesseractOcr;

use image::ImageFormat;
use std::io::Cursor;

/// Default Tesseract language.
pub const DEFAULT_LANGUAGE: &str = "eng";

/// Decode arbitrary image bytes and re-encode them as PNG.
pub fn normalize_to_png(image: &[u8]) -> Result<Vec<u8>, OcrError> {
    if image.is_empty() {
        return Err(OcrError::EmptyImage);
    }

    let decoded = image::load_from_memory(image).map_err(|e| OcrError::Decode(e.to_string()))?;
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(OcrError::InvalidDimensions(format!(
            "{}x{}",
            decoded.width(),
            decoded.height()
        )));
    }

    let mut png = Cursor::new(Vec::new());
    decoded
        .write_to(&mut png, ImageFormat::Png)
        .map_err(|e| OcrError::Decode(format!("Failed to encode image to PNG: {}", e)))?;
    Ok(png.into_inner())
}
