use once_cell::sync::Lazy;
use regex::Regex;

use super::literals::{is_null_word, lookup_bool};
use crate::ast::Value;

// ASCII digits only; `str::parse` rejects other Unicode digits.
static INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("integer pattern compiles"));

static FLOAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?([0-9]+\.[0-9]*|\.[0-9]+)([eE][-+]?[0-9]+)?$")
        .expect("float pattern compiles")
});

/// Convert a raw token into its typed value.
///
/// Rules are tried in order and the first match wins:
/// 1. integer literal (falls back to a float when it does not fit in `i64`)
/// 2. float literal with a mandatory decimal point
/// 3. boolean words (`true`/`yes`/`on`/`1`, `false`/`no`/`off`/`0`/empty)
/// 4. null words (`null`/`none`)
/// 5. anything else stays a string
///
/// Because integers are checked first, `"1"` and `"0"` come back as
/// integers, never booleans. A numeric literal beyond the `f64` range
/// stays a string, since `inf` would not read back as a number.
pub fn cast_item_value(raw: &str) -> Value {
    if INTEGER_RE.is_match(raw) {
        return match raw.parse::<i64>() {
            Ok(n) => Value::Integer(n),
            Err(_) => finite_float(raw),
        };
    }

    if FLOAT_RE.is_match(raw) {
        return finite_float(raw);
    }

    let lower = raw.to_lowercase();
    if let Some(b) = lookup_bool(&lower) {
        return Value::Boolean(b);
    }
    if is_null_word(&lower) {
        return Value::Null;
    }

    Value::String(raw.to_string())
}

fn finite_float(raw: &str) -> Value {
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() => Value::Float(f),
        _ => Value::String(raw.to_string()),
    }
}
