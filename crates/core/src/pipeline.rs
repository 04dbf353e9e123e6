//! The audit run: cache lookup, extraction, analysis, cache write.

use crate::analysis::{AnalysisResult, Analyzer};
use crate::cache::ContentCache;
use crate::extract::{DocumentSource, ImageTextExtractor, SlideCorpusBuilder};
use crate::progress::ProgressSink;
use crate::report::Report;
use crate::settings::Settings;
use crate::{Error, Result};
use std::path::PathBuf;

/// Where the final result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// Loaded from a cache entry; nothing was extracted or analyzed.
    Cache,
    /// Produced by the analysis service during this run.
    Analysis,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// The analysis to report.
    pub result: AnalysisResult,

    /// Where `result` came from.
    pub source: ResultSource,

    /// Cache entry the result was read from or written to, if any.
    pub cache_entry: Option<PathBuf>,

    /// Cache problems that were worked around during the run.
    pub cache_warnings: Vec<String>,
}

impl RunOutcome {
    /// The logical report for this outcome.
    pub fn report(&self) -> Report {
        Report::from(&self.result)
    }
}

/// Wires the collaborators of one audit run together.
pub struct Orchestrator<'a> {
    settings: &'a Settings,
    documents: &'a dyn DocumentSource,
    images: &'a dyn ImageTextExtractor,
    analyzer: &'a dyn Analyzer,
    progress: &'a dyn ProgressSink,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        settings: &'a Settings,
        documents: &'a dyn DocumentSource,
        images: &'a dyn ImageTextExtractor,
        analyzer: &'a dyn Analyzer,
        progress: &'a dyn ProgressSink,
    ) -> Self {
        Self {
            settings,
            documents,
            images,
            analyzer,
            progress,
        }
    }

    /// Run the audit up to (not including) rendering.
    ///
    /// Fails on a missing file, an unparsable document, or a deck with no
    /// text at all. Analysis failures are not errors here; they come back
    /// inside [`RunOutcome::result`].
    pub fn run(&self) -> Result<RunOutcome> {
        let path = self.settings.file()?;
        if !path.exists() {
            return Err(Error::DocumentNotFound { path: path.clone() });
        }

        let cache = ContentCache::new(&self.settings.cache_dir);
        let mut warnings = Vec::new();
        let mut key = None;

        if self.settings.caching {
            let k = cache.key(path)?;
            match cache.try_get(&k) {
                Ok(Some(result)) => {
                    let entry = cache.entry_path(&k);
                    log::info!("Loading results from cache: {}", entry.display());
                    return Ok(RunOutcome {
                        result,
                        source: ResultSource::Cache,
                        cache_entry: Some(entry),
                        cache_warnings: warnings,
                    });
                }
                Ok(None) => log::debug!("Cache miss for {}", k),
                Err(e) => {
                    log::warn!("Could not read cache entry for {}: {}", k, e);
                    warnings.push(format!(
                        "Could not read cache, proceeding with analysis. Error: {}",
                        e
                    ));
                }
            }
            key = Some(k);
        }

        let document = self.documents.open(path)?;
        let corpus = SlideCorpusBuilder::new(self.images, self.progress).build(&document);
        if corpus.is_blank() {
            return Err(Error::NoContent);
        }

        self.progress.on_analysis_start();
        let result = self.analyzer.analyze(&corpus);
        self.progress.on_analysis_complete();

        let mut cache_entry = None;
        if let Some(key) = key {
            match cache.put(&key, &result) {
                Ok(true) => cache_entry = Some(cache.entry_path(&key)),
                Ok(false) => {}
                Err(e) => {
                    log::warn!("Could not write cache entry for {}: {}", key, e);
                    warnings.push(format!("Could not save results to cache: {}", e));
                }
            }
        }

        Ok(RunOutcome {
            result,
            source: ResultSource::Analysis,
            cache_entry,
            cache_warnings: warnings,
        })
    }
}
