//! Literal spellings shared by value coercion and name validation.
//!
//! A name that collides with one of these words would read back as a
//! boolean or null, so the reserved-name set is derived from this table.

pub const TRUE_WORDS: &[&str] = &["true", "yes", "on", "1"];
pub const FALSE_WORDS: &[&str] = &["false", "no", "off", "0", ""];
pub const NULL_WORDS: &[&str] = &["null", "none"];

/// Words a section or item name may not take. Numeric and empty spellings
/// are excluded; those are already handled by the name grammar.
pub fn reserved_words() -> impl Iterator<Item = &'static str> {
    TRUE_WORDS
        .iter()
        .chain(FALSE_WORDS)
        .chain(NULL_WORDS)
        .copied()
        .filter(|w| !w.is_empty() && !w.chars().all(|c| c.is_ascii_digit()))
}

pub fn is_reserved_word(name: &str) -> bool {
    let lower = name.to_lowercase();
    reserved_words().any(|w| w == lower)
}

pub(crate) fn lookup_bool(lower: &str) -> Option<bool> {
    if TRUE_WORDS.contains(&lower) {
        Some(true)
    } else if FALSE_WORDS.contains(&lower) {
        Some(false)
    } else {
        None
    }
}

pub(crate) fn is_null_word(lower: &str) -> bool {
    NULL_WORDS.contains(&lower)
}
