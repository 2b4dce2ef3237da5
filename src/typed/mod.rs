//! Scalar coercion in both directions: text to typed [`Value`](crate::Value)
//! and back.

mod cast;
pub mod literals;
mod repr;

pub use cast::cast_item_value;
pub use repr::{item_value_to_string, stringify_items, StringRepr};

pub(crate) use repr::leaves;

#[cfg(test)]
mod tests;
