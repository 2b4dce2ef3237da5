use super::*;
use crate::typed::cast_item_value;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, IniError> {
    let mut document = Document::new();
    let mut current: Option<String> = None;

    loop {
        match parser.bump()? {
            Token::Eof => {
                break;
            }
            Token::Blank | Token::Comment(_) => {}
            Token::Section(name) => {
                ensure_valid_name(&name, None, parser.line())?;
                tracing::trace!(section = %name, line = parser.line(), "Section header");
                document.section_entry(&name);
                current = Some(name);
            }
            Token::Assign { key, append, value } => {
                let section = current.as_deref().ok_or_else(|| IniError::InvalidData {
                    message: format!("Assignment to '{}' appears before any section header", key),
                    line: parser.line(),
                    hint: Some("Every key must belong to a [section]".into()),
                    code: Some(205),
                })?;
                ensure_valid_name(&key, Some(section), parser.line())?;

                document
                    .section_entry(section)
                    .accumulate(&key, cast_item_value(&value), append);
            }
        }
    }

    Ok(document)
}
