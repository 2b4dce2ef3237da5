use once_cell::sync::Lazy;
use regex::Regex;

use crate::typed::literals::{is_reserved_word, reserved_words};
use crate::IniError;

static INVALID_CHAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.\-]").expect("name pattern compiles"));

/// Check a section or item name.
///
/// Names are non-empty, use only letters, digits, `_`, `.` and `-`, and may
/// not be one of the boolean/null words (`true`, `no`, `none`, ...). The
/// returned message explains the verdict either way.
///
/// # Examples
/// ```
/// use ini_cfg::validate_item_name;
///
/// assert!(validate_item_name("hello").0);
/// let (ok, reason) = validate_item_name("hello!");
/// assert!(!ok && !reason.is_empty());
/// ```
pub fn validate_item_name(name: &str) -> (bool, String) {
    if name.is_empty() {
        return (false, "Name must not be empty".into());
    }

    let mut invalid: Vec<&str> = INVALID_CHAR_RE.find_iter(name).map(|m| m.as_str()).collect();
    if !invalid.is_empty() {
        invalid.sort();
        invalid.dedup();
        return (
            false,
            format!(
                "Name '{}' contains invalid characters: {}",
                name,
                invalid.join(" ")
            ),
        );
    }

    if is_reserved_word(name) {
        let words: Vec<&str> = reserved_words().collect();
        return (
            false,
            format!(
                "Name '{}' is a reserved word ({})",
                name,
                words.join(", ")
            ),
        );
    }

    (true, format!("Name '{}' is valid", name))
}

/// Turn a failed name check into an `InvalidData` error.
pub(crate) fn ensure_valid_name(name: &str, section: Option<&str>, line: usize) -> Result<(), IniError> {
    let (valid, reason) = validate_item_name(name);
    if valid {
        return Ok(());
    }

    let message = match section {
        Some(section) => format!("Invalid key '{}' in section '{}': {}", name, section, reason),
        None => format!("Invalid section name '{}': {}", name, reason),
    };
    Err(IniError::InvalidData {
        message,
        line,
        hint: Some("Use letters, digits, '_', '.' or '-', and avoid boolean/null words".into()),
        code: Some(206),
    })
}
