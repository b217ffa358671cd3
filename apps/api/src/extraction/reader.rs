//! Docx container reader: produces the ordered paragraph stream the parser
//! operates on. A docx file is a zip archive whose main part is
//! `word/document.xml`; paragraphs are `<w:p>` elements and their visible
//! text lives in `<w:t>` runs.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::Event;
use thiserror::Error;

/// Unreadable or corrupt input container. Fatal to the whole request.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a valid docx container: {0}")]
    Container(#[from] zip::result::ZipError),

    #[error("document has no word/document.xml part")]
    MissingDocumentPart,

    #[error("invalid document xml: {0}")]
    Xml(String),
}

/// Reads a docx file and returns its non-empty paragraphs, in order.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>, DocumentError> {
    let bytes = std::fs::read(path)?;
    extract_paragraphs(&bytes)
}

/// Extracts the paragraph stream from raw docx bytes.
pub fn extract_paragraphs(bytes: &[u8]) -> Result<Vec<String>, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut part = match archive.by_name("word/document.xml") {
        Ok(part) => part,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(DocumentError::MissingDocumentPart)
        }
        Err(e) => return Err(e.into()),
    };

    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    parse_document_xml(&xml)
}

/// Pulls `<w:p>` paragraph text out of the main document part.
fn parse_document_xml(xml: &str) -> Result<Vec<String>, DocumentError> {
    let mut reader = quick_xml::Reader::from_reader(xml.as_bytes());
    let mut paragraphs = Vec::new();
    let mut buf = Vec::new();
    let mut paragraph = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => paragraph.clear(),
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => {
                let text = e.unescape().map_err(|e| DocumentError::Xml(e.to_string()))?;
                paragraph.push_str(&text);
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    let trimmed = paragraph.trim();
                    if !trimmed.is_empty() {
                        paragraphs.push(trimmed.to_string());
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(DocumentError::Xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

/// Builds an in-memory docx with one `<w:p>` per paragraph. Test fixture.
#[cfg(test)]
pub(crate) fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Write;

    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut cursor);
        let options = zip::write::FileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        zip.start_file("word/document.xml", options).unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
        zip.finish().unwrap();
    }
    cursor.into_inner()
}
