use super::*;
use super::scanner::unquote;

pub(super) fn classify_line(raw: &str, line: usize) -> Result<Token, IniError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(Token::Blank);
    }
    if let Some(text) = trimmed.strip_prefix(';').or_else(|| trimmed.strip_prefix('#')) {
        return Ok(Token::Comment(text.trim().to_string()));
    }
    if trimmed.starts_with('[') {
        return tokenize_section(trimmed, line);
    }
    if let Some((key, value)) = trimmed.split_once('=') {
        return tokenize_assignment(key, value, line);
    }

    Err(IniError::InvalidData {
        message: format!("Unrecognised line '{}'", trimmed),
        line,
        hint: Some("Expected a [section] header, a key = value assignment, or a comment".into()),
        code: Some(201),
    })
}

fn tokenize_section(trimmed: &str, line: usize) -> Result<Token, IniError> {
    match trimmed.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        Some(name) => Ok(Token::Section(name.trim().to_string())),
        None => Err(IniError::InvalidData {
            message: format!("Unterminated section header '{}'", trimmed),
            line,
            hint: Some("Section headers look like [name]".into()),
            code: Some(202),
        }),
    }
}

fn tokenize_assignment(key: &str, value: &str, line: usize) -> Result<Token, IniError> {
    let key = key.trim();
    let (key, append) = match key.strip_suffix("[]") {
        Some(base) => (base.trim_end(), true),
        None => (key, false),
    };

    if key.is_empty() {
        return Err(IniError::InvalidData {
            message: "Assignment without a key".into(),
            line,
            hint: Some("Write key = value".into()),
            code: Some(201),
        });
    }

    Ok(Token::Assign {
        key: key.to_string(),
        append,
        value: unquote(value.trim(), line)?,
    })
}
