//! Errors talking to the Gemini API.

use thiserror::Error;

/// Everything that can go wrong with one analysis request.
#[derive(Error, Debug)]
pub enum GeminiError {
    /// The client could not be set up (missing key, bad TLS backend).
    #[error("Failed to configure Gemini API: {0}")]
    Config(String),

    /// The request never got a response.
    #[error("An error occurred during the Gemini API call: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("An error occurred during the Gemini API call: HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The API answered but produced no text.
    #[error("An error occurred during the Gemini API call: empty response ({0})")]
    EmptyResponse(String),
}
