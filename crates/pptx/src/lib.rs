//! PPTX (Office Open XML) reader.
//!
//! Parses .pptx files, which are ZIP archives of XML parts, into the
//! slides, shapes, pictures, and speaker notes of a [`deck_core::Document`].

pub mod parser;

pub use parser::PptxParser;
