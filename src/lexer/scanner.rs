use crate::IniError;

/// Strip one pair of enclosing quotes from a trimmed value.
///
/// Double-quoted values understand `\"`, `\\`, `\n` and `\r`; single-quoted
/// values are taken verbatim. A value that opens a quote without closing it is an error.
pub(super) fn unquote(raw: &str, line: usize) -> Result<String, IniError> {
    let quote = match raw.chars().next() {
        Some(q @ ('"' | '\'')) => q,
        _ => return Ok(raw.to_string()),
    };

    let inner = raw
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .filter(|_| raw.len() >= 2 && !(quote == '"' && ends_with_escape(&raw[..raw.len() - 1])))
        .ok_or_else(|| IniError::InvalidData {
            message: format!("Unclosed string starting with {} in value {}", quote, raw),
            line,
            hint: Some(format!("Close the value with a matching {}", quote)),
            code: Some(203),
        })?;

    if quote == '\'' {
        Ok(inner.to_string())
    } else {
        Ok(unescape(inner))
    }
}

/// True if the text ends in an odd run of backslashes, i.e. its last
/// character escapes whatever follows.
fn ends_with_escape(text: &str) -> bool {
    text.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn unescape(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next @ ('"' | '\\')) => out.push(next),
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Inverse of [`unquote`] for double quotes.
pub(crate) fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Whether a string must be quoted to read back unchanged.
pub(crate) fn needs_quoting(text: &str) -> bool {
    text.is_empty()
        || text.trim() != text
        || text.starts_with('"')
        || text.starts_with('\'')
        || text.contains(['\n', '\r'])
}
