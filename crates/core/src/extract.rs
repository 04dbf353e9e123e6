//! Slide corpus construction.
//!
//! Walks every slide of a [`Document`] and flattens its text frames, the
//! text recognized in its pictures, and its speaker notes into one block of
//! plain text per slide.

use crate::progress::ProgressSink;
use crate::types::{Corpus, Document, Shape, Slide};
use crate::Result;
use std::path::Path;

/// Separator line placed between the segments of one slide.
pub const SEGMENT_SEPARATOR: &str = "\n---\n";

/// In-band marker preceding text recognized in a picture.
pub const IMAGE_TEXT_MARKER: &str = "[Text from Image]:";

/// In-band marker preceding speaker notes.
pub const SPEAKER_NOTES_MARKER: &str = "[Speaker Notes]:";

/// Recognizes text in encoded image bytes.
///
/// Implementations are total: an undecodable image or an OCR failure yields
/// an empty string, never a panic or an error.
pub trait ImageTextExtractor {
    /// Return the text found in the image, or `""`.
    fn extract(&self, image: &[u8]) -> String;
}

/// An extractor that never finds any text.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoImageText;

impl ImageTextExtractor for NoImageText {
    fn extract(&self, _image: &[u8]) -> String {
        String::new()
    }
}

/// Opens a presentation file into a [`Document`].
pub trait DocumentSource {
    /// Parse the file at `path`.
    fn open(&self, path: &Path) -> Result<Document>;
}

/// Builds the per-slide text corpus of a document.
pub struct SlideCorpusBuilder<'a> {
    images: &'a dyn ImageTextExtractor,
    progress: &'a dyn ProgressSink,
}

impl<'a> SlideCorpusBuilder<'a> {
    /// Create a builder that runs pictures through `images`.
    pub fn new(images: &'a dyn ImageTextExtractor, progress: &'a dyn ProgressSink) -> Self {
        Self { images, progress }
    }

    /// Extract the text of every slide, in slide order.
    ///
    /// A slide without any text, recognizable picture, or notes gets an
    /// empty entry rather than no entry.
    pub fn build(&self, document: &Document) -> Corpus {
        let total = document.slides.len();
        self.progress.on_extraction_start(total);

        let mut corpus = Corpus::new();
        for (idx, slide) in document.slides.iter().enumerate() {
            corpus.push(self.slide_text(slide));
            log::debug!("Slide {}/{} extracted", idx + 1, total);
            self.progress.on_slide(idx + 1, total);
        }

        self.progress.on_extraction_complete();
        corpus
    }

    /// Join the segments of a single slide.
    fn slide_text(&self, slide: &Slide) -> String {
        let mut segments: Vec<String> = Vec::new();

        for shape in &slide.shapes {
            match shape {
                Shape::TextFrame { text } if shape.has_text() => segments.push(text.clone()),
                Shape::Picture { image } => {
                    let recognized = self.images.extract(image);
                    if !recognized.trim().is_empty() {
                        segments.push(format!("{}\n{}", IMAGE_TEXT_MARKER, recognized));
                    }
                }
                _ => {}
            }
        }

        if let Some(notes) = slide.notes.as_deref() {
            if !notes.trim().is_empty() {
                segments.push(format!("{}\n{}", SPEAKER_NOTES_MARKER, notes));
            }
        }

        segments.join(SEGMENT_SEPARATOR)
    }
}
