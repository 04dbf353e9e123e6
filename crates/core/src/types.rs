//! Domain types for presentations and the text corpus extracted from them.

use std::fmt;

/// A parsed presentation: slides in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Document {
    /// Create a document from its slides.
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }
}

/// A single slide with its shapes and optional speaker notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slide {
    /// Shapes in document (z) order.
    pub shapes: Vec<Shape>,

    /// Text of the notes page body, if the slide has one.
    pub notes: Option<String>,
}

impl Slide {
    /// Create an empty slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape to this slide.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Set the speaker notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// The kinds of shape the corpus builder cares about.
#[derive(Clone, PartialEq, Eq)]
pub enum Shape {
    /// A shape with a text frame.
    TextFrame { text: String },

    /// A picture with its raw encoded image bytes.
    Picture { image: Vec<u8> },

    /// Anything else (tables, connectors, charts).
    Other,
}

impl Shape {
    /// Create a text-frame shape.
    pub fn text(text: impl Into<String>) -> Self {
        Self::TextFrame { text: text.into() }
    }

    /// Create a picture shape.
    pub fn picture(image: impl Into<Vec<u8>>) -> Self {
        Self::Picture {
            image: image.into(),
        }
    }

    /// Whether the shape carries non-whitespace text.
    pub fn has_text(&self) -> bool {
        matches!(self, Self::TextFrame { text } if !text.trim().is_empty())
    }

    /// Whether the shape is a picture.
    pub fn is_picture(&self) -> bool {
        matches!(self, Self::Picture { .. })
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextFrame { text } => f.debug_struct("TextFrame").field("text", text).finish(),
            Self::Picture { image } => f
                .debug_struct("Picture")
                .field("bytes", &image.len())
                .finish(),
            Self::Other => f.write_str("Other"),
        }
    }
}

/// Text of every slide, keyed by 1-based slide number in slide order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<(usize, String)>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next slide's text. Slide numbers follow insertion order.
    pub fn push(&mut self, text: impl Into<String>) {
        let number = self.entries.len() + 1;
        self.entries.push((number, text.into()));
    }

    /// Iterate `(slide number, text)` pairs in slide order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries.iter().map(|(n, t)| (*n, t.as_str()))
    }

    /// Text of a slide by its 1-based number.
    pub fn get(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|idx| self.entries.get(idx))
            .map(|(_, t)| t.as_str())
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus has no slides at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether there is nothing to analyze: no slides, or only empty ones.
    pub fn is_blank(&self) -> bool {
        self.entries.iter().all(|(_, t)| t.is_empty())
    }
}

impl FromIterator<String> for Corpus {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for text in iter {
            corpus.push(text);
        }
        corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_capabilities() {
        assert!(Shape::text("Revenue").has_text());
        assert!(!Shape::text("   \n\t").has_text());
        assert!(!Shape::text("Revenue").is_picture());
        assert!(Shape::picture(vec![1, 2, 3]).is_picture());
        assert!(!Shape::picture(vec![1, 2, 3]).has_text());
        assert!(!Shape::Other.has_text());
        assert!(!Shape::Other.is_picture());
    }

    #[test]
    fn test_corpus_numbers_slides_from_one() {
        let corpus: Corpus = vec!["a".to_string(), String::new(), "c".to_string()]
            .into_iter()
            .collect();

        let numbers: Vec<usize> = corpus.iter().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(corpus.get(1), Some("a"));
        assert_eq!(corpus.get(2), Some(""));
        assert_eq!(corpus.get(0), None);
        assert_eq!(corpus.get(4), None);
    }

    #[test]
    fn test_corpus_blank() {
        assert!(Corpus::new().is_blank());

        let empty_slides: Corpus = vec![String::new(), String::new()].into_iter().collect();
        assert!(empty_slides.is_blank());
        assert!(!empty_slides.is_empty());

        let with_text: Corpus = vec![String::new(), "x".to_string()].into_iter().collect();
        assert!(!with_text.is_blank());
    }

    #[test]
    fn test_picture_debug_hides_bytes() {
        let shape = Shape::picture(vec![0u8; 2048]);
        assert_eq!(format!("{:?}", shape), "Picture { bytes: 2048 }");
    }
}
