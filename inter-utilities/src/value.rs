//! Scalar values accepted in theme configuration.

use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// A string, number or boolean supplied by a theme.
///
/// When rendered as CSS, booleans become `1` or `0` and numbers use their
/// shortest representation, so `1.0` and `1` both render as `1`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl ScalarValue {
    /// Interpret the value as a plain number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Number(number) => number.as_f64(),
            ScalarValue::Text(text) => text.trim().parse().ok(),
            ScalarValue::Bool(_) => None,
        }
    }
}

impl Display for ScalarValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarValue::Bool(value) => write!(f, "{}", u8::from(*value)),
            ScalarValue::Number(number) => match (number.as_i64(), number.as_f64()) {
                (Some(int), _) => write!(f, "{int}"),
                (None, Some(float)) => write!(f, "{float}"),
                (None, None) => write!(f, "{number}"),
            },
            ScalarValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(src: &str) -> Self {
        ScalarValue::Text(src.to_owned())
    }
}

impl From<String> for ScalarValue {
    fn from(src: String) -> Self {
        ScalarValue::Text(src)
    }
}

impl From<bool> for ScalarValue {
    fn from(src: bool) -> Self {
        ScalarValue::Bool(src)
    }
}

impl From<i64> for ScalarValue {
    fn from(src: i64) -> Self {
        ScalarValue::Number(src.into())
    }
}
