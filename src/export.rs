// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use crate::ast::{Document, Value};
use crate::lexer::{needs_quoting, quote};
use crate::locator::IniFileLocator;
use crate::parser::parse_ini_string;
use crate::typed::leaves;
use crate::IniError;

/// Render a [`Document`] as INI text.
///
/// Sections become `[name]` headers and items become `key = value` lines.
/// Lists are written as one `key[] = value` line per element. Sections are
/// separated by a blank line and everything stays in insertion order, so the
/// same document always renders to the same bytes.
///
/// Strings that would not read back unchanged (empty, padded with spaces,
/// starting with a quote, holding line breaks) are written double-quoted,
/// with `\n` and `\r` escaped so every item stays on one line.
///
/// # Examples
/// ```
/// use ini_cfg::{parse_ini_string, render};
///
/// let doc = parse_ini_string("[a]\nx = 1\nx = 2\n").unwrap();
/// assert_eq!(render(&doc), "[a]\nx[] = 1\nx[] = 2\n");
/// ```
pub fn render(doc: &Document) -> String {
    let mut out = String::new();

    for (index, section) in doc.sections().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push('[');
        out.push_str(section.name());
        out.push_str("]\n");

        for (key, value) in section.iter() {
            match value {
                Value::List(items) => {
                    for item in leaves(items) {
                        out.push_str(&format!("{}[] = {}\n", key, render_scalar(item)));
                    }
                }
                scalar => out.push_str(&format!("{} = {}\n", key, render_scalar(scalar))),
            }
        }
    }

    tracing::debug!(sections = doc.len(), bytes = out.len(), "Rendered INI text");
    out
}

fn render_scalar(value: &Value) -> String {
    let text = value.to_string();
    match value {
        Value::String(_) if needs_quoting(&text) => quote(&text),
        _ => text,
    }
}

/// Export a document to pretty-printed JSON.
///
/// The output is an object of sections, each an object of items. Values
/// map onto their JSON counterparts and lists become arrays.
pub fn export_document_to_json(doc: &Document) -> Result<String, IniError> {
    let mut top = serde_json::Map::new();

    for section in doc.sections() {
        let mut items = serde_json::Map::new();
        for (key, value) in section.iter() {
            // Non-finite floats have no JSON form and serialize as null.
            items.insert(key.to_string(), serde_json::to_value(value).map_err(json_error)?);
        }
        top.insert(section.name().to_string(), serde_json::Value::Object(items));
    }

    serde_json::to_string_pretty(&serde_json::Value::Object(top)).map_err(json_error)
}

fn json_error(e: serde_json::Error) -> IniError {
    IniError::InvalidData {
        message: format!("Failed to serialize document to JSON: {}", e),
        line: 0,
        hint: None,
        code: Some(500),
    }
}

/// Export an INI file directly to JSON.
///
/// Convenience function that locates, reads, parses, and exports in one call.
///
/// # Examples
/// ```no_run
/// use ini_cfg::export::export_ini_file;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let json = export_ini_file("config.ini")?;
/// println!("{}", json);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Returns error if the file doesn't exist or contains invalid INI.
pub fn export_ini_file<P: AsRef<Path>>(path: P) -> Result<String, IniError> {
    let input = IniFileLocator::new().read_to_string(path)?;
    let doc = parse_ini_string(&input)?;
    export_document_to_json(&doc)
}
