//! Gemini-backed analysis of a slide corpus.
//!
//! Sends the whole corpus in one `generateContent` request and turns the
//! reply into a [`deck_core::AnalysisResult`]. No retries: re-running the
//! audit is the retry, and only successful results are cached.

pub mod client;
pub mod error;
pub mod prompts;

pub use client::{GeminiClient, GeminiConfig};
pub use error::GeminiError;
