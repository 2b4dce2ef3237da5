pub mod ast;
pub mod error;
pub mod export;
pub mod lexer;
pub mod locator;
pub mod parser;
pub mod typed;
pub mod config;

pub use ast::{Document, Section, Value};
pub use error::IniError;
pub use config::IniConfig;
pub use export::{export_document_to_json, render};
pub use locator::IniFileLocator;
pub use parser::{parse_array, parse_ini_string, validate_item_name};
pub use typed::{cast_item_value, item_value_to_string, stringify_items, StringRepr};
