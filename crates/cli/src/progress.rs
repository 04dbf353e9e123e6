//! Terminal progress bars for extraction and the analysis wait.

use deck_core::ProgressSink;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Draws a slide bar during extraction and a spinner while waiting on the model.
pub struct CliProgress {
    slides: ProgressBar,
    waiting: ProgressBar,
}

impl CliProgress {
    pub fn new() -> Self {
        let slides = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden());
        slides.set_style(
            ProgressStyle::with_template("{prefix:.bold} [{bar:40.cyan/blue}] {pos}/{len} slides ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        slides.set_prefix("Processing Slides");

        let waiting = ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden());
        waiting.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        waiting.set_message("Waiting for Gemini analysis");

        Self { slides, waiting }
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for CliProgress {
    fn on_extraction_start(&self, total_slides: usize) {
        eprintln!("Extracting content from presentation...");
        self.slides.set_length(total_slides as u64);
        self.slides.set_draw_target(ProgressDrawTarget::stderr());
    }

    fn on_slide(&self, slide_number: usize, _total_slides: usize) {
        self.slides.set_position(slide_number as u64);
    }

    fn on_extraction_complete(&self) {
        self.slides.finish();
    }

    fn on_analysis_start(&self) {
        eprintln!("\nConnecting to Google AI for analysis...");
        self.waiting.set_draw_target(ProgressDrawTarget::stderr());
        self.waiting.enable_steady_tick(Duration::from_millis(100));
    }

    fn on_analysis_complete(&self) {
        self.waiting.finish_and_clear();
    }
}
