//! PPTX file parser implementation.

use deck_core::{Document, DocumentSource, Error, Result, Shape, Slide};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek};
use std::path::Path;
use unicode_normalization::UnicodeNormalization;
use zip::ZipArchive;

const PRESENTATION_PART: &str = "ppt/presentation.xml";
const SLIDE_REL_SUFFIX: &str = "/slide";
const NOTES_REL_SUFFIX: &str = "/notesSlide";

/// Parser for PPTX (Office Open XML) files.
pub struct PptxParser;

impl PptxParser {
    /// Create a new PPTX parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a PPTX file from a reader.
    pub fn parse<R: Read + Seek>(&self, reader: R) -> Result<Document> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| Error::Zip(format!("Failed to open ZIP: {}", e)))?;

        let slide_order = self.get_slide_order(&mut archive)?;
        log::debug!("Found {} slides", slide_order.len());

        let mut slides = Vec::with_capacity(slide_order.len());
        for slide_path in &slide_order {
            slides.push(self.parse_slide(&mut archive, slide_path)?);
        }

        Ok(Document::new(slides))
    }

    /// Get the ordered list of slide part names.
    ///
    /// Uses the `sldIdLst` of `presentation.xml` when present, otherwise the
    /// numeric suffix of each slide relationship.
    fn get_slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels_content = self.read_file_from_archive(archive, &rels_path_for(PRESENTATION_PART))?;
        let slide_rels: Vec<Relationship> = parse_relationships(&rels_content)?
            .into_iter()
            .filter(|rel| rel.rel_type.ends_with(SLIDE_REL_SUFFIX))
            .collect();

        if let Ok(presentation) = self.read_file_from_archive(archive, PRESENTATION_PART) {
            let listed = slide_id_list(&presentation)?;
            if !listed.is_empty() {
                let by_id: HashMap<&str, &Relationship> =
                    slide_rels.iter().map(|rel| (rel.id.as_str(), rel)).collect();
                return Ok(listed
                    .iter()
                    .filter_map(|id| by_id.get(id.as_str()))
                    .map(|rel| resolve_part(PRESENTATION_PART, &rel.target))
                    .collect());
            }
        }

        let mut slides: Vec<(String, Option<usize>)> = slide_rels
            .iter()
            .map(|rel| {
                let order_num = extract_slide_number(&rel.target).or_else(|| extract_slide_number(&rel.id));
                (resolve_part(PRESENTATION_PART, &rel.target), order_num)
            })
            .collect();

        slides.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(slides.into_iter().map(|(path, _)| path).collect())
    }

    /// Parse a single slide, resolving its pictures and notes.
    fn parse_slide<R: Read + Seek>(&self, archive: &mut ZipArchive<R>, slide_path: &str) -> Result<Slide> {
        let content = self.read_file_from_archive(archive, slide_path)?;
        let raw_shapes = extract_shapes_from_xml(&content)?;

        // A slide without a rels part simply has no pictures or notes.
        let rels = match self.read_file_from_archive(archive, &rels_path_for(slide_path)) {
            Ok(xml) => parse_relationships(&xml)?,
            Err(_) => Vec::new(),
        };

        let mut slide = Slide::new();
        for raw in raw_shapes {
            let shape = match raw.kind {
                ShapeKind::Text => Shape::text(raw.text),
                ShapeKind::Picture => {
                    let image = raw
                        .embed
                        .as_deref()
                        .and_then(|id| rels.iter().find(|rel| rel.id == id))
                        .map(|rel| resolve_part(slide_path, &rel.target))
                        .map(|part| self.read_media(archive, &part))
                        .unwrap_or_default();
                    Shape::picture(image)
                }
                ShapeKind::Other => Shape::Other,
            };
            slide.shapes.push(shape);
        }

        if let Some(notes_rel) = rels.iter().find(|rel| rel.rel_type.ends_with(NOTES_REL_SUFFIX)) {
            let notes_path = resolve_part(slide_path, &notes_rel.target);
            match self.read_file_from_archive(archive, &notes_path) {
                Ok(xml) => slide.notes = notes_text(&xml)?,
                Err(e) => log::warn!("Skipping notes for {}: {}", slide_path, e),
            }
        }

        Ok(slide)
    }

    /// Read picture bytes; an unreadable part becomes an empty image.
    fn read_media<R: Read + Seek>(&self, archive: &mut ZipArchive<R>, path: &str) -> Vec<u8> {
        let mut file = match archive.by_name(path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Picture '{}' not found in archive: {}", path, e);
                return Vec::new();
            }
        };

        let mut bytes = Vec::new();
        if let Err(e) = file.read_to_end(&mut bytes) {
            log::warn!("Could not read picture '{}': {}", path, e);
            return Vec::new();
        }
        bytes
    }

    /// Read a file from the ZIP archive.
    fn read_file_from_archive<R: Read + Seek>(&self, archive: &mut ZipArchive<R>, path: &str) -> Result<String> {
        let mut file = archive
            .by_name(path)
            .map_err(|e| Error::Zip(format!("File not found in archive '{}': {}", path, e)))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::Zip(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }
}

impl Default for PptxParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSource for PptxParser {
    fn open(&self, path: &Path) -> Result<Document> {
        let file = File::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => Error::DocumentNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::FileUnreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;

        self.parse(BufReader::new(file)).map_err(|e| match e {
            Error::Zip(msg) => Error::DocumentParse(format!("'{}' is not a readable PPTX: {}", path.display(), msg)),
            other => other,
        })
    }
}

/// One entry of a `.rels` part.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Relationship {
    id: String,
    rel_type: String,
    target: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum ShapeKind {
    Text,
    Picture,
    #[default]
    Other,
}

/// A shape as read from slide XML, before pictures are resolved.
#[derive(Debug, Default)]
struct RawShape {
    kind: ShapeKind,
    /// Whether the element was `p:sp`, the only one with a text frame of its own.
    is_sp: bool,
    text: String,
    paragraphs: usize,
    placeholder: Option<String>,
    embed: Option<String>,
}

impl RawShape {
    fn start_paragraph(&mut self) {
        if self.paragraphs > 0 {
            self.text.push('\n');
        }
        self.paragraphs += 1;
    }
}

/// Parse the relationships of a `.rels` part.
fn parse_relationships(xml: &str) -> Result<Vec<Relationship>> {
    let mut rels = Vec::new();
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) if local_name(e.name().as_ref()) == b"Relationship" => {
                rels.push(Relationship {
                    id: attribute(e, b"Id").unwrap_or_default(),
                    rel_type: attribute(e, b"Type").unwrap_or_default(),
                    target: attribute(e, b"Target").unwrap_or_default(),
                });
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(format!("Error parsing relationships: {}", e))),
            _ => {}
        }
    }

    Ok(rels)
}

/// Relationship ids of `p:sldId` entries, in presentation order.
fn slide_id_list(xml: &str) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) if local_name(e.name().as_ref()) == b"sldId" => {
                // The relationship id is the namespaced `r:id`, not the numeric `id`.
                let rel_id = e.attributes().flatten().find_map(|attr| {
                    let key = attr.key.as_ref();
                    (key != b"id" && local_name(key) == b"id").then(|| String::from_utf8_lossy(&attr.value).to_string())
                });
                if let Some(rel_id) = rel_id {
                    ids.push(rel_id);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(format!("Error parsing presentation: {}", e))),
            _ => {}
        }
    }

    Ok(ids)
}

/// Extract shapes in document order from slide (or notes) XML.
///
/// Group shapes are flattened. Table cells and other text outside a `p:sp`
/// text body are not collected.
fn extract_shapes_from_xml(xml_content: &str) -> Result<Vec<RawShape>> {
    let mut shapes = Vec::new();
    let mut reader = Reader::from_str(xml_content);
    reader.trim_text(false);

    let mut current: Option<RawShape> = None;
    let mut in_text_body = false;
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                match local_name(name.as_ref()) {
                    b"sp" => {
                        current = Some(RawShape {
                            is_sp: true,
                            ..RawShape::default()
                        });
                    }
                    b"pic" => {
                        current = Some(RawShape {
                            kind: ShapeKind::Picture,
                            ..RawShape::default()
                        });
                    }
                    b"graphicFrame" | b"cxnSp" => current = Some(RawShape::default()),
                    b"txBody" => {
                        if let Some(shape) = current.as_mut().filter(|s| s.is_sp) {
                            shape.kind = ShapeKind::Text;
                            in_text_body = true;
                        }
                    }
                    b"p" if in_text_body => {
                        if let Some(shape) = current.as_mut() {
                            shape.start_paragraph();
                        }
                    }
                    b"t" if in_text_body => in_run_text = true,
                    other => apply_leaf(other, e, current.as_mut(), in_text_body),
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = e.name();
                match local_name(name.as_ref()) {
                    b"p" if in_text_body => {
                        if let Some(shape) = current.as_mut() {
                            shape.start_paragraph();
                        }
                    }
                    other => apply_leaf(other, e, current.as_mut(), in_text_body),
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_run_text {
                    if let Some(shape) = current.as_mut() {
                        let text = e.unescape().unwrap_or_default();
                        shape.text.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                match local_name(name.as_ref()) {
                    b"sp" | b"pic" | b"graphicFrame" | b"cxnSp" => {
                        if let Some(mut shape) = current.take() {
                            shape.text = shape.text.nfc().collect();
                            shapes.push(shape);
                        }
                        in_text_body = false;
                        in_run_text = false;
                    }
                    b"txBody" => in_text_body = false,
                    b"t" => in_run_text = false,
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!(
                    "Error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(shapes)
}

/// Handle elements that only carry attributes: placeholders, image
/// references, and line breaks.
fn apply_leaf(name: &[u8], e: &BytesStart<'_>, current: Option<&mut RawShape>, in_text_body: bool) {
    let Some(shape) = current else {
        return;
    };

    match name {
        b"ph" => shape.placeholder = Some(attribute(e, b"type").unwrap_or_else(|| "obj".to_string())),
        b"blip" if shape.kind == ShapeKind::Picture => {
            shape.embed = e.attributes().flatten().find_map(|attr| {
                (local_name(attr.key.as_ref()) == b"embed").then(|| String::from_utf8_lossy(&attr.value).to_string())
            });
        }
        b"br" if in_text_body => shape.text.push('\n'),
        _ => {}
    }
}

/// Text of the notes page body placeholder.
fn notes_text(xml: &str) -> Result<Option<String>> {
    Ok(extract_shapes_from_xml(xml)?
        .into_iter()
        .find(|shape| shape.kind == ShapeKind::Text && shape.placeholder.as_deref() == Some("body"))
        .map(|shape| shape.text))
}

/// Value of an unprefixed attribute.
fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

/// Part name of the `.rels` part belonging to `part`.
fn rels_path_for(part: &str) -> String {
    match part.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part),
    }
}

/// Resolve a relationship target against the part that declares it.
fn resolve_part(base_part: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = match base_part.rsplit_once('/') {
        Some((dir, _)) => dir.split('/').collect(),
        None => Vec::new(),
    };

    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    segments.join("/")
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Extract a slide number from a string like "rId2" or "slide3.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::FileOptions;

    const PRESENTATION_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide2.xml"/>
</Relationships>"#;

    const PRESENTATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <p:sldIdLst><p:sldId id="256" r:id="rId3"/><p:sldId id="257" r:id="rId2"/></p:sldIdLst>
</p:presentation>"#;

    const SLIDE1: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <p:cSld><p:spTree>
    <p:sp><p:nvSpPr><p:cNvPr id="2" name="Title"/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>
      <p:txBody><a:bodyPr/><a:p><a:r><a:t>Revenue: </a:t></a:r><a:r><a:t>$10M &amp; growing</a:t></a:r></a:p><a:p><a:r><a:t>Line</a:t></a:r><a:br/><a:r><a:t>break</a:t></a:r></a:p></p:txBody>
    </p:sp>
    <p:pic><p:nvPicPr><p:cNvPr id="3" name="Chart"/></p:nvPicPr><p:blipFill><a:blip r:embed="rId5"/></p:blipFill></p:pic>
    <p:graphicFrame><a:graphic><a:graphicData><a:tbl><a:tr><a:tc><a:txBody><a:p><a:r><a:t>cell</a:t></a:r></a:p></a:txBody></a:tc></a:tr></a:tbl></a:graphicData></a:graphic></p:graphicFrame>
    <p:grpSp><p:sp><p:txBody><a:p><a:r><a:t>Grouped</a:t></a:r></a:p></p:txBody></p:sp></p:grpSp>
    <p:sp><p:nvSpPr><p:cNvPr id="9" name="Rect"/></p:nvSpPr></p:sp>
  </p:spTree></p:cSld>
</p:sld>"#;

    const SLIDE1_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId5" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="../media/image1.png"/>
  <Relationship Id="rId6" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide" Target="../notesSlides/notesSlide1.xml"/>
</Relationships>"#;

    const NOTES1: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:notes xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld><p:spTree>
    <p:sp><p:nvSpPr><p:nvPr><p:ph type="sldImg"/></p:nvPr></p:nvSpPr></p:sp>
    <p:sp><p:nvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr>
      <p:txBody><a:p><a:r><a:t>Stress the 10M figure</a:t></a:r></a:p></p:txBody></p:sp>
    <p:sp><p:nvSpPr><p:nvPr><p:ph type="sldNum" idx="5"/></p:nvPr></p:nvSpPr>
      <p:txBody><a:p><a:fld type="slidenum"><a:t>1</a:t></a:fld></a:p></p:txBody></p:sp>
  </p:spTree></p:cSld>
</p:notes>"#;

    const SLIDE2: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld><p:spTree>
    <p:sp><p:txBody><a:p><a:r><a:t>Regional total: $9.8M</a:t></a:r></a:p></p:txBody></p:sp>
  </p:spTree></p:cSld>
</p:sld>"#;

    fn build_pptx(parts: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, bytes) in parts {
            writer.start_file(*name, FileOptions::default()).unwrap();
            writer.write_all(bytes).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn sample_deck() -> Vec<u8> {
        build_pptx(&[
            ("ppt/presentation.xml", PRESENTATION.as_bytes()),
            ("ppt/_rels/presentation.xml.rels", PRESENTATION_RELS.as_bytes()),
            ("ppt/slides/slide1.xml", SLIDE1.as_bytes()),
            ("ppt/slides/_rels/slide1.xml.rels", SLIDE1_RELS.as_bytes()),
            ("ppt/slides/slide2.xml", SLIDE2.as_bytes()),
            ("ppt/notesSlides/notesSlide1.xml", NOTES1.as_bytes()),
            ("ppt/media/image1.png", b"\x89PNG fake"),
        ])
    }

    #[test]
    fn test_parse_sample_deck() {
        let doc = PptxParser::new().parse(Cursor::new(sample_deck())).unwrap();

        // sldIdLst puts slide2.xml first
        assert_eq!(doc.slides.len(), 2);
        assert_eq!(doc.slides[0].shapes, vec![Shape::text("Regional total: $9.8M")]);
        assert_eq!(doc.slides[0].notes, None);

        let slide = &doc.slides[1];
        assert_eq!(
            slide.shapes,
            vec![
                Shape::text("Revenue: $10M & growing\nLine\nbreak"),
                Shape::picture(b"\x89PNG fake".to_vec()),
                Shape::Other,
                Shape::text("Grouped"),
                Shape::Other,
            ]
        );
        assert_eq!(slide.notes.as_deref(), Some("Stress the 10M figure"));
    }

    #[test]
    fn test_order_without_slide_id_list() {
        let deck = build_pptx(&[
            ("ppt/_rels/presentation.xml.rels", PRESENTATION_RELS.as_bytes()),
            ("ppt/slides/slide1.xml", SLIDE1.as_bytes()),
            ("ppt/slides/slide2.xml", SLIDE2.as_bytes()),
        ]);
        let doc = PptxParser::new().parse(Cursor::new(deck)).unwrap();

        assert_eq!(doc.slides[1].shapes, vec![Shape::text("Regional total: $9.8M")]);
        // No rels part: the picture resolves to no bytes and there are no notes
        assert_eq!(doc.slides[0].shapes[1], Shape::picture(Vec::new()));
        assert_eq!(doc.slides[0].notes, None);
    }

    #[test]
    fn test_missing_media_is_empty_picture() {
        let deck = build_pptx(&[
            ("ppt/_rels/presentation.xml.rels", PRESENTATION_RELS.as_bytes()),
            ("ppt/slides/slide1.xml", SLIDE1.as_bytes()),
            ("ppt/slides/_rels/slide1.xml.rels", SLIDE1_RELS.as_bytes()),
            ("ppt/slides/slide2.xml", SLIDE2.as_bytes()),
        ]);
        let doc = PptxParser::new().parse(Cursor::new(deck)).unwrap();
        assert_eq!(doc.slides[0].shapes[1], Shape::picture(Vec::new()));
    }

    #[test]
    fn test_not_a_zip() {
        let err = PptxParser::new().parse(Cursor::new(b"plain text".to_vec())).unwrap_err();
        assert!(matches!(err, Error::Zip(_)));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = PptxParser::new().open(&dir.path().join("missing.pptx")).unwrap_err();
        assert!(matches!(err, Error::DocumentNotFound { .. }));
    }

    #[test]
    fn test_open_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("deck.pptx");
        std::fs::write(&path, sample_deck()).unwrap();

        let doc = PptxParser::new().open(&path).unwrap();
        assert_eq!(doc.slides.len(), 2);
    }

    #[test]
    fn test_open_non_pptx_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = PptxParser::new().open(&path).unwrap_err();
        assert!(matches!(err, Error::DocumentParse(_)));
    }

    #[test]
    fn test_text_is_nfc_normalized() {
        let xml = r#"<p:sld xmlns:a="a" xmlns:p="p"><p:sp><p:txBody><a:p><a:r><a:t>Cafe&#x301;</a:t></a:r></a:p></p:txBody></p:sp></p:sld>"#;
        let shapes = extract_shapes_from_xml(xml).unwrap();
        assert_eq!(shapes[0].text, "Café");
    }

    #[test]
    fn test_empty_paragraphs_keep_line_structure() {
        let xml = r#"<p:sld xmlns:a="a" xmlns:p="p"><p:sp><p:txBody><a:p><a:r><a:t>one</a:t></a:r></a:p><a:p/><a:p><a:r><a:t>three</a:t></a:r></a:p></p:txBody></p:sp></p:sld>"#;
        let shapes = extract_shapes_from_xml(xml).unwrap();
        assert_eq!(shapes[0].text, "one\n\nthree");
    }

    #[test]
    fn test_notes_without_body_placeholder() {
        let xml = r#"<p:notes xmlns:a="a" xmlns:p="p"><p:sp><p:txBody><a:p><a:r><a:t>x</a:t></a:r></a:p></p:txBody></p:sp></p:notes>"#;
        assert_eq!(notes_text(xml).unwrap(), None);
    }

    #[test]
    fn test_resolve_part() {
        assert_eq!(resolve_part("ppt/presentation.xml", "slides/slide1.xml"), "ppt/slides/slide1.xml");
        assert_eq!(resolve_part("ppt/slides/slide1.xml", "../media/image1.png"), "ppt/media/image1.png");
        assert_eq!(resolve_part("ppt/slides/slide1.xml", "/ppt/media/a.jpeg"), "ppt/media/a.jpeg");
        assert_eq!(resolve_part("ppt/slides/slide1.xml", "./x.png"), "ppt/slides/x.png");
    }

    #[test]
    fn test_rels_path_for() {
        assert_eq!(rels_path_for("ppt/presentation.xml"), "ppt/_rels/presentation.xml.rels");
        assert_eq!(rels_path_for("ppt/slides/slide7.xml"), "ppt/slides/_rels/slide7.xml.rels");
    }

    #[test]
    fn test_slide_id_list_uses_relationship_id() {
        assert_eq!(slide_id_list(PRESENTATION).unwrap(), vec!["rId3", "rId2"]);
    }

    #[test]
    fn test_extract_slide_number() {
        assert_eq!(extract_slide_number("rId1"), Some(1));
        assert_eq!(extract_slide_number("rId12"), Some(12));
        assert_eq!(extract_slide_number("slide1.xml"), Some(1));
        assert_eq!(extract_slide_number("slide123.xml"), Some(123));
        assert_eq!(extract_slide_number("nodigits"), None);
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"p:sp"), b"sp");
        assert_eq!(local_name(b"a:t"), b"t");
        assert_eq!(local_name(b"sp"), b"sp");
    }
}
