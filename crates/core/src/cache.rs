//! Content-addressed cache of successful analyses.
//!
//! Entries live at `<cache dir>/<file name>_<md5 of file bytes>.json`. Any
//! change to the presentation's bytes yields a new key, so an entry is never
//! updated in place.

use crate::analysis::AnalysisResult;
use crate::{Error, Result};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Identity of one version of one presentation file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Base name of the file, e.g. `q3-review.pptx`.
    pub file_name: String,

    /// Hex MD5 of the file contents.
    pub content_hash: String,
}

impl CacheKey {
    /// Compute the key of the file at `path`.
    pub fn for_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => Error::DocumentNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::FileUnreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string());

        Ok(Self::from_bytes(file_name, &bytes))
    }

    /// Compute the key from a file name and the file's bytes.
    pub fn from_bytes(file_name: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            file_name: file_name.into(),
            content_hash: format!("{:x}", md5::compute(bytes)),
        }
    }

    /// File name of the entry for this key.
    pub fn entry_name(&self) -> String {
        format!("{}_{}.json", self.file_name, self.content_hash)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.file_name, self.content_hash)
    }
}

/// Directory-backed store of analysis results.
#[derive(Debug, Clone)]
pub struct ContentCache {
    dir: PathBuf,
}

impl ContentCache {
    /// Create a cache rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The backing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the entry for `key` lives.
    pub fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(key.entry_name())
    }

    /// Compute the key for the file at `path`.
    pub fn key(&self, path: &Path) -> Result<CacheKey> {
        CacheKey::for_file(path)
    }

    /// Look up an entry, distinguishing a miss from an unreadable entry.
    ///
    /// An entry that parses but does not hold a successful analysis is an
    /// error, like one that does not parse.
    pub fn try_get(&self, key: &CacheKey) -> Result<Option<AnalysisResult>> {
        let path = self.entry_path(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value: serde_json::Value = serde_json::from_str(&content)?;
        match AnalysisResult::from_value(&value) {
            // Only successes are ever written, so anything else is damage.
            AnalysisResult::Failure { message } => Err(Error::CorruptCacheEntry { path, reason: message }),
            result => Ok(Some(result)),
        }
    }

    /// Look up an entry; an unreadable or corrupt entry counts as a miss.
    pub fn get(&self, key: &CacheKey) -> Option<AnalysisResult> {
        match self.try_get(key) {
            Ok(hit) => hit,
            Err(e) => {
                log::warn!("Ignoring unreadable cache entry for {}: {}", key, e);
                None
            }
        }
    }

    /// Store a successful result under `key`.
    ///
    /// Failures are not stored, so a transient service error is retried on
    /// the next run. Returns whether anything was written.
    pub fn put(&self, key: &CacheKey, result: &AnalysisResult) -> Result<bool> {
        if result.is_failure() {
            log::debug!("Not caching failed analysis for {}", key);
            return Ok(false);
        }

        fs::create_dir_all(&self.dir)?;
        let path = self.entry_path(key);
        fs::write(&path, result.to_json_pretty()?)?;
        log::info!("Cached analysis at {}", path.display());
        Ok(true)
    }
}
