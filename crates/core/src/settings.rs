//! Run settings, resolved once at startup and passed by reference.

use crate::report::DEFAULT_BOX_WIDTH;
use crate::{Error, Result};
use std::path::PathBuf;

/// The value shipped in sample config files; treated as "no key".
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

/// Default analysis model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Default cache directory, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = ".cache";

/// Everything a run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Presentation to audit.
    pub file: Option<PathBuf>,

    /// Credential for the analysis service.
    pub api_key: Option<String>,

    /// Analysis model name.
    pub model: String,

    /// Whether to read and write the analysis cache.
    pub caching: bool,

    /// Where cache entries live.
    pub cache_dir: PathBuf,

    /// Width of the decorated report.
    pub box_width: usize,

    /// Analysis request timeout, in seconds.
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file: None,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            caching: true,
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            box_width: DEFAULT_BOX_WIDTH,
            timeout_secs: 120,
        }
    }
}

impl Settings {
    /// The presentation path, or [`Error::NoFileSpecified`].
    pub fn file(&self) -> Result<&PathBuf> {
        self.file.as_ref().ok_or(Error::NoFileSpecified)
    }

    /// The credential, or [`Error::MissingCredential`] when absent, blank, or
    /// still the placeholder.
    pub fn api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() && key != API_KEY_PLACEHOLDER => Ok(key),
            _ => Err(Error::MissingCredential),
        }
    }
}
