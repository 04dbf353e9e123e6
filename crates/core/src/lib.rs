//! Core domain types, slide corpus extraction, analysis caching, and report
//! rendering for slide-deck consistency audits.

pub mod analysis;
pub mod cache;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod progress;
pub mod report;
pub mod settings;
pub mod types;

pub use analysis::{AnalysisResult, Analyzer, Issue};
pub use cache::{CacheKey, ContentCache};
pub use error::{Error, Result};
pub use extract::{DocumentSource, ImageTextExtractor, NoImageText, SlideCorpusBuilder};
pub use pipeline::{Orchestrator, ResultSource, RunOutcome};
pub use progress::{NoopProgress, ProgressSink};
pub use report::{PlainStyle, Report, Styler, Tone};
pub use settings::Settings;
pub use types::{Corpus, Document, Shape, Slide};
