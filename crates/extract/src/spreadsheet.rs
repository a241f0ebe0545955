//! Spreadsheet text serialization.
//!
//! A workbook is reduced to text the way the comparison expects to see it:
//! the first worksheet rendered as CSV, one line per row. Cell values come
//! from the shared string table, inline strings, or the cached cell value.

use std::collections::HashMap;
use std::io::Cursor;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::ExtractError;
use crate::opc::OpcContainer;

pub(crate) fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut container = OpcContainer::open(Cursor::new(bytes))?;

    let shared_strings = match container.read_part_optional("xl/sharedStrings.xml")? {
        Some(xml) => parse_shared_strings(&xml)?,
        None => Vec::new(),
    };

    let workbook_xml = container.read_part("xl/workbook.xml")?;
    let sheets = parse_workbook_sheets(&workbook_xml)?;
    let (_name, rel_id) = sheets
        .into_iter()
        .next()
        .ok_or_else(|| ExtractError::Xml("workbook lists no sheets".to_string()))?;

    let relationships = match container.read_part_optional("xl/_rels/workbook.xml.rels")? {
        Some(xml) => parse_relationships(&xml)?,
        None => HashMap::new(),
    };

    let sheet_path = rel_id
        .as_ref()
        .and_then(|id| relationships.get(id))
        .map(|target| resolve_sheet_target(target))
        .unwrap_or_else(|| "xl/worksheets/sheet1.xml".to_string());

    let sheet_xml = container.read_part(&sheet_path)?;
    let rows = parse_sheet_rows(&sheet_xml, &shared_strings)?;

    // Rows are padded to a common width so every line has the same number
    // of fields, as a tabular CSV dump would.
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let lines: Vec<String> = rows.iter().map(|row| csv_line(row, width)).collect();
    Ok(lines.join("\n"))
}

fn xml_err(err: impl ToString) -> ExtractError {
    ExtractError::Xml(err.to_string())
}

fn parse_shared_strings(xml: &[u8]) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);
    let mut buf = Vec::new();
    let mut strings = Vec::new();
    let mut current = String::new();
    let mut in_si = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"si" => {
                current.clear();
                in_si = true;
            }
            Ok(Event::Start(e)) if e.name().as_ref() == b"t" && in_si => {
                let text = reader.read_text(e.name()).map_err(xml_err)?;
                current.push_str(&text);
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"si" => {
                strings.push(std::mem::take(&mut current));
                in_si = false;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(strings)
}

fn parse_workbook_sheets(xml: &[u8]) -> Result<Vec<(String, Option<String>)>, ExtractError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);
    let mut buf = Vec::new();
    let mut sheets = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.name().as_ref() == b"sheet" => {
                let mut name = String::new();
                let mut rel_id = None;
                for attr in e.attributes() {
                    let attr = attr.map_err(xml_err)?;
                    match attr.key.as_ref() {
                        b"name" => name = attr.unescape_value().map_err(xml_err)?.into_owned(),
                        b"r:id" => {
                            rel_id = Some(attr.unescape_value().map_err(xml_err)?.into_owned())
                        }
                        _ => {}
                    }
                }
                sheets.push((name, rel_id));
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(sheets)
}

fn parse_relationships(xml: &[u8]) -> Result<HashMap<String, String>, ExtractError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);
    let mut buf = Vec::new();
    let mut relationships = HashMap::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e))
                if e.name().as_ref() == b"Relationship" =>
            {
                let mut id = None;
                let mut target = None;
                for attr in e.attributes() {
                    let attr = attr.map_err(xml_err)?;
                    match attr.key.as_ref() {
                        b"Id" => id = Some(attr.unescape_value().map_err(xml_err)?.into_owned()),
                        b"Target" => {
                            target = Some(attr.unescape_value().map_err(xml_err)?.into_owned())
                        }
                        _ => {}
                    }
                }
                if let (Some(id), Some(target)) = (id, target) {
                    relationships.insert(id, target);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(relationships)
}

/// Workbook relationship targets are relative to `xl/` unless absolute
fn resolve_sheet_target(target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        absolute.to_string()
    } else {
        format!("xl/{}", target)
    }
}

fn parse_sheet_rows(xml: &[u8], shared: &[String]) -> Result<Vec<Vec<String>>, ExtractError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);
    let mut buf = Vec::new();
    let mut rows = Vec::new();
    let mut current: Option<Vec<String>> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"row" => {
                current = Some(Vec::new());
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"row" => {
                rows.push(Vec::new());
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"row" => {
                if let Some(row) = current.take() {
                    rows.push(row);
                }
            }
            Ok(Event::Start(e)) if e.name().as_ref() == b"c" => {
                let mut address = None;
                let mut cell_type = None;
                for attr in e.attributes() {
                    let attr = attr.map_err(xml_err)?;
                    match attr.key.as_ref() {
                        b"r" => {
                            address = Some(attr.unescape_value().map_err(xml_err)?.into_owned())
                        }
                        b"t" => {
                            cell_type =
                                Some(attr.unescape_value().map_err(xml_err)?.into_owned())
                        }
                        _ => {}
                    }
                }

                let value = read_cell_value(&mut reader, cell_type.as_deref(), shared)?;

                if let Some(row) = current.as_mut() {
                    match address.as_deref().and_then(column_index) {
                        Some(col) => {
                            while row.len() <= col {
                                row.push(String::new());
                            }
                            row[col] = value;
                        }
                        None => row.push(value),
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(rows)
}

/// Read the remaining events of a `<c>` element and produce its text value
fn read_cell_value(
    reader: &mut Reader<&[u8]>,
    cell_type: Option<&str>,
    shared: &[String],
) -> Result<String, ExtractError> {
    let mut buf = Vec::new();
    let mut value_text: Option<String> = None;
    let mut inline_text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"v" => {
                let text = reader.read_text(e.name()).map_err(xml_err)?;
                value_text = Some(text.into_owned());
            }
            Ok(Event::Start(e)) if e.name().as_ref() == b"t" => {
                let text = reader.read_text(e.name()).map_err(xml_err)?;
                inline_text.push_str(&text);
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"c" => break,
            Ok(Event::Eof) => {
                return Err(ExtractError::Xml("unexpected EOF inside cell".to_string()))
            }
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
        buf.clear();
    }

    match cell_type {
        Some("s") => {
            let raw = value_text.unwrap_or_default();
            let index: usize = raw
                .trim()
                .parse()
                .map_err(|_| ExtractError::Xml(format!("invalid shared string index: {raw}")))?;
            shared.get(index).cloned().ok_or_else(|| {
                ExtractError::Xml(format!("shared string index {index} out of bounds"))
            })
        }
        Some("inlineStr") => Ok(inline_text),
        Some("b") => Ok(match value_text.as_deref().map(str::trim) {
            Some("1") => "True".to_string(),
            _ => "False".to_string(),
        }),
        _ => Ok(value_text.unwrap_or_default()),
    }
}

/// Map the column letters of an A1-style address to a zero-based index
fn column_index(address: &str) -> Option<usize> {
    let mut col: usize = 0;
    let mut saw_letter = false;

    for ch in address.chars() {
        if ch.is_ascii_alphabetic() {
            saw_letter = true;
            col = col * 26 + (ch.to_ascii_uppercase() as usize - 'A' as usize + 1);
        } else {
            break;
        }
    }

    if saw_letter {
        Some(col - 1)
    } else {
        None
    }
}

fn csv_line(row: &[String], width: usize) -> String {
    let mut fields: Vec<String> = row.iter().map(|value| csv_field(value)).collect();
    while fields.len() < width {
        fields.push(String::new());
    }
    fields.join(",")
}

/// Quote a field per RFC 4180 when it contains a delimiter, quote, or break
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
