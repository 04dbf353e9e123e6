//! Error types for slide-deck auditing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end an audit run.
///
/// Per-shape extraction failures, cache read failures, and analysis service
/// failures are absorbed elsewhere and never show up here.
#[derive(Error, Debug)]
pub enum Error {
    /// The presentation file does not exist.
    #[error("The file '{}' was not found.", path.display())]
    DocumentNotFound { path: PathBuf },

    /// The presentation file exists but its bytes could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a presentation the reader understands.
    #[error("Presentation parsing error: {0}")]
    DocumentParse(String),

    /// ZIP archive error (for PPTX).
    #[error("ZIP error: {0}")]
    Zip(String),

    /// XML parsing error (for PPTX).
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// No file was given on the command line or in the configuration.
    #[error("No presentation file specified. Provide one with --file or in the config file.")]
    NoFileSpecified,

    /// The analysis service credential is absent or still the placeholder.
    #[error("API key not found. Set GEMINI_API_KEY or add api_key to the config file.")]
    MissingCredential,

    /// Every slide of the deck came out empty.
    #[error("Could not extract any content from the presentation.")]
    NoContent,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A cache entry is valid JSON but not a successful analysis.
    #[error("Corrupt cache entry '{}': {reason}", path.display())]
    CorruptCacheEntry { path: PathBuf, reason: String },

    /// Failed to write the exported report.
    #[error("Failed to write report to '{}': {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
