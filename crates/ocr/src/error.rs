//! OCR error types. These never leave the crate's extractors.

use thiserror::Error;

/// Errors that can occur while recognizing text in a picture.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The picture had no bytes (e.g. an unresolved media reference).
    #[error("Image is empty")]
    EmptyImage,

    /// The bytes are not an image format we can decode.
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// The image decoded to zero pixels.
    #[error("Invalid image dimensions: {0}")]
    InvalidDimensions(String),

    /// Tesseract could not be started or talked to.
    #[error("Failed to run Tesseract: {0}")]
    Engine(#[from] std::io::Error),

    /// Tesseract ran but reported a failure.
    #[error("Tesseract failed ({status}): {stderr}")]
    Recognition { status: String, stderr: String },

    /// In-process Tesseract could not be initialized.
    #[error("Failed to initialize Tesseract: {0}")]
    Init(String),
}
