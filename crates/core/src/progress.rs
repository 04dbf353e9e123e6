//! Progress events emitted while a deck is extracted and analyzed.
//!
//! Events are cosmetic: nothing in the pipeline depends on what a sink does
//! with them.

/// Receives pipeline progress. Every method defaults to a no-op.
pub trait ProgressSink {
    /// Called once before the first slide is processed.
    fn on_extraction_start(&self, total_slides: usize) {
        let _ = total_slides;
    }

    /// Called after each slide has been processed (1-based).
    fn on_slide(&self, slide_number: usize, total_slides: usize) {
        let _ = (slide_number, total_slides);
    }

    /// Called once after the last slide.
    fn on_extraction_complete(&self) {}

    /// Called just before the analysis request is sent.
    fn on_analysis_start(&self) {}

    /// Called once the analysis request has returned, successfully or not.
    fn on_analysis_complete(&self) {}
}

/// A sink that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {}
