// Author: Dustin Pilgrim
// License: MIT

use crate::{Value, IniError};

fn type_error(expected: &str, value: &Value, hint: &str, code: u32) -> IniError {
    IniError::TypeError {
        message: format!("Expected {}, got {} `{}`", expected, value.kind(), value),
        line: 0,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_error("string", &value, "Use a text value in your config", 401)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Integer(n) => Ok(n as f64),
            _ => Err(type_error("number", &value, "Use a number value in your config", 402)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|f| f as f32)
    }
}

impl TryFrom<Value> for i64 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            Value::Float(_) => Err(type_error(
                "integer",
                &value,
                "Write the value without a decimal point",
                403,
            )),
            _ => Err(type_error("integer", &value, "Use an integer value in your config", 403)),
        }
    }
}

// Narrower integers go through i64 and are range-checked.
macro_rules! try_from_integer {
    ($($ty:ty => $code:expr),* $(,)?) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = IniError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = i64::try_from(value)?;
                    <$ty>::try_from(n).map_err(|_| IniError::TypeError {
                        message: format!("Number {} out of range for {}", n, stringify!($ty)),
                        line: 0,
                        hint: Some(format!(
                            "Use a number between {} and {}",
                            <$ty>::MIN,
                            <$ty>::MAX
                        )),
                        code: Some($code),
                    })
                }
            }
        )*
    };
}

try_from_integer! {
    i32 => 406,
    u8 => 407,
    u16 => 407,
    u32 => 408,
    u64 => 408,
    usize => 409,
}

impl TryFrom<Value> for bool {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            // `1` and `0` are read as integers; accept them where a flag is wanted.
            Value::Integer(1) => Ok(true),
            Value::Integer(0) => Ok(false),
            _ => Err(type_error(
                "boolean",
                &value,
                "Use true/false, yes/no, or on/off",
                404,
            )),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = IniError>,
{
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => items.into_iter().map(T::try_from).collect(),
            _ => Err(type_error(
                "list",
                &value,
                "Repeat the key or use key[] = value lines",
                405,
            )),
        }
    }
}

impl<T> TryFrom<Value> for Option<T>
where
    T: TryFrom<Value, Error = IniError>,
{
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(None),
            v => Ok(Some(T::try_from(v)?)),
        }
    }
}
