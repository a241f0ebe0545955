//! Word document text extraction.
//!
//! A `.docx` package stores the document body in `word/document.xml`; each
//! `<w:p>` paragraph becomes one text line, the concatenation of its
//! `<w:t>` text runs. Non-text content is ignored.

use std::io::Cursor;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::ExtractError;
use crate::opc::OpcContainer;

pub(crate) fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut container = OpcContainer::open(Cursor::new(bytes))?;
    let document_xml = container.read_part("word/document.xml")?;
    let paragraphs = parse_paragraphs(&document_xml)?;
    Ok(paragraphs.join("\n"))
}

fn parse_paragraphs(xml: &[u8]) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);
    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:p" => {
                current.clear();
                in_paragraph = true;
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:p" => {
                // Self-closing paragraphs are empty lines
                paragraphs.push(String::new());
            }
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" && in_paragraph => {
                let text = reader
                    .read_text(e.name())
                    .map_err(|e| ExtractError::Xml(e.to_string()))?;
                current.push_str(&text);
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => {
                paragraphs.push(std::mem::take(&mut current));
                in_paragraph = false;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}
