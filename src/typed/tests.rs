use indexmap::IndexMap;

use super::literals::{is_reserved_word, reserved_words};
use super::*;
use crate::ast::Value;

#[test]
fn test_cast_basic_table() {
    assert_eq!(cast_item_value("hello world"), Value::String("hello world".into()));
    assert_eq!(cast_item_value("1"), Value::Integer(1));
    assert_eq!(cast_item_value("1.5"), Value::Float(1.5));
    assert_eq!(cast_item_value("true"), Value::Boolean(true));
    assert_eq!(cast_item_value("null"), Value::Null);
}

#[test]
fn test_cast_integers_win_over_booleans() {
    assert_eq!(cast_item_value("0"), Value::Integer(0));
    assert_eq!(cast_item_value("1"), Value::Integer(1));
    assert_eq!(cast_item_value("-42"), Value::Integer(-42));
}

#[test]
fn test_cast_integer_overflow_becomes_float() {
    match cast_item_value("99999999999999999999") {
        Value::Float(f) => assert_eq!(f, 1e20),
        other => panic!("Expected float, got {:?}", other),
    }
    assert_eq!(cast_item_value("9223372036854775807"), Value::Integer(i64::MAX));
}

#[test]
fn test_cast_out_of_range_numbers_stay_strings() {
    let huge = "9".repeat(400);
    assert_eq!(cast_item_value(&huge), Value::String(huge.clone()));
    assert_eq!(cast_item_value("1.0e999"), Value::String("1.0e999".into()));
    assert_eq!(cast_item_value("-1.5e400"), Value::String("-1.5e400".into()));
    assert_eq!(cast_item_value("1.0e300"), Value::Float(1.0e300));
}

#[test]
fn test_cast_float_grammar() {
    assert_eq!(cast_item_value("-0.25"), Value::Float(-0.25));
    assert_eq!(cast_item_value("+2.5"), Value::Float(2.5));
    assert_eq!(cast_item_value(".5"), Value::Float(0.5));
    assert_eq!(cast_item_value("3."), Value::Float(3.0));
    assert_eq!(cast_item_value("1.5e3"), Value::Float(1500.0));

    // No decimal point, no float.
    assert_eq!(cast_item_value("1e3"), Value::String("1e3".into()));
    assert_eq!(cast_item_value("1.2.3"), Value::String("1.2.3".into()));
}

#[test]
fn test_cast_boolean_and_null_words_ignore_case() {
    for word in ["TRUE", "Yes", "on"] {
        assert_eq!(cast_item_value(word), Value::Boolean(true), "{}", word);
    }
    for word in ["False", "NO", "off", ""] {
        assert_eq!(cast_item_value(word), Value::Boolean(false), "{:?}", word);
    }
    assert_eq!(cast_item_value("None"), Value::Null);
    assert_eq!(cast_item_value("NULL"), Value::Null);
}

#[test]
fn test_cast_keeps_string_casing() {
    assert_eq!(cast_item_value("Hello"), Value::String("Hello".into()));
    assert_eq!(cast_item_value("nullable"), Value::String("nullable".into()));
    assert_eq!(cast_item_value("١٢"), Value::String("١٢".into()));
}

#[test]
fn test_to_string_basic_table() {
    assert_eq!(item_value_to_string(&Value::String("hello world".into())).as_scalar(), Some("hello world"));
    assert_eq!(item_value_to_string(&Value::Integer(1)).as_scalar(), Some("1"));
    assert_eq!(item_value_to_string(&Value::Float(1.5)).as_scalar(), Some("1.5"));
    assert_eq!(item_value_to_string(&Value::Boolean(true)).as_scalar(), Some("true"));
    assert_eq!(item_value_to_string(&Value::Boolean(false)).as_scalar(), Some("false"));
    assert_eq!(item_value_to_string(&Value::Null).as_scalar(), Some("null"));
}

#[test]
fn test_to_string_integral_float_keeps_decimal_point() {
    assert_eq!(item_value_to_string(&Value::Float(2.0)).as_scalar(), Some("2.0"));
    assert_eq!(cast_item_value("2.0"), Value::Float(2.0));
}

#[test]
fn test_to_string_list_is_element_wise() {
    let list = Value::List(vec![
        Value::Integer(1),
        Value::List(vec![Value::Boolean(false), Value::Null]),
        Value::String("x".into()),
    ]);
    assert_eq!(
        item_value_to_string(&list),
        StringRepr::List(vec!["1".into(), "false".into(), "null".into(), "x".into()])
    );
}

#[test]
fn test_stringify_items_keeps_keys() {
    let mut items = IndexMap::new();
    items.insert("string".to_string(), Value::String("hello world".into()));
    items.insert("int".to_string(), Value::Integer(1));
    items.insert("float".to_string(), Value::Float(1.5));
    items.insert("bool".to_string(), Value::Boolean(true));
    items.insert("null".to_string(), Value::Null);

    let out = stringify_items(&items);
    let expected: Vec<(&str, &str)> = vec![
        ("string", "hello world"),
        ("int", "1"),
        ("float", "1.5"),
        ("bool", "true"),
        ("null", "null"),
    ];
    assert_eq!(out.len(), expected.len());
    for ((key, repr), (want_key, want_text)) in out.iter().zip(expected) {
        assert_eq!(key, want_key);
        assert_eq!(repr, &StringRepr::Scalar(want_text.to_string()));
    }
}

#[test]
fn test_reserved_words_match_coercion_vocabulary() {
    let mut words: Vec<&str> = reserved_words().collect();
    words.sort();
    assert_eq!(words, vec!["false", "no", "none", "null", "off", "on", "true", "yes"]);

    for word in &words {
        assert!(!matches!(cast_item_value(word), Value::String(_)), "{} should not be a string", word);
    }
    assert!(is_reserved_word("Yes"));
    assert!(!is_reserved_word("1"));
    assert!(!is_reserved_word("hello"));
}
