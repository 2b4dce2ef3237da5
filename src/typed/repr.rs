use std::fmt;

use indexmap::IndexMap;

use crate::ast::Value;

/// Textual form of a value: one string for scalars, one per element for lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringRepr {
    Scalar(String),
    List(Vec<String>),
}

impl StringRepr {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            StringRepr::Scalar(s) => Some(s),
            StringRepr::List(_) => None,
        }
    }

    /// Every string in order; a scalar yields one.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            StringRepr::Scalar(s) => vec![s],
            StringRepr::List(items) => items,
        }
    }
}

/// Convert a typed value back to text.
///
/// Lists are converted element-wise; nested lists are flattened.
pub fn item_value_to_string(value: &Value) -> StringRepr {
    match value {
        Value::List(items) => StringRepr::List(leaves(items).iter().map(|v| v.to_string()).collect()),
        scalar => StringRepr::Scalar(scalar.to_string()),
    }
}

/// Apply [`item_value_to_string`] to every value of a mapping. Keys are kept as-is.
pub fn stringify_items(items: &IndexMap<String, Value>) -> IndexMap<String, StringRepr> {
    items
        .iter()
        .map(|(k, v)| (k.clone(), item_value_to_string(v)))
        .collect()
}

/// Scalar leaves of a list, depth first.
pub(crate) fn leaves(items: &[Value]) -> Vec<&Value> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::List(inner) => out.extend(leaves(inner)),
            scalar => out.push(scalar),
        }
    }
    out
}

/// Integral floats keep a trailing `.0` so they read back as floats.
pub(crate) fn format_float(f: f64) -> String {
    let text = f.to_string();
    if f.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Boolean(true) => f.write_str("true"),
            Value::Boolean(false) => f.write_str("false"),
            Value::Null => f.write_str("null"),
            Value::List(items) => {
                let parts: Vec<String> = leaves(items).iter().map(|v| v.to_string()).collect();
                f.write_str(&parts.join(","))
            }
        }
    }
}
