//! Scalar values carried by enumeration members
//!
//! Equality between values is strict: two values are equal only when they
//! have the same kind and the same payload. `Integer(0)`, `Float(0.0)` and
//! `Text("0")` are three distinct values.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A member value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(Cow<'static, str>),
    Boolean(bool),
}

/// The kind of a scalar value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Integer,
    Float,
    Text,
    Boolean,
}

impl ValueKind {
    /// Returns a human-readable name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Build a text value from a string known at compile time
    pub const fn text(text: &'static str) -> Self {
        Value::Text(Cow::Borrowed(text))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Type-sensitive equality.
    ///
    /// Identical to `==`; spelled out for call sites where the strictness is
    /// the point. `Float(NaN)` is never strictly equal to anything.
    pub fn strictly_equals(&self, other: &Value) -> bool {
        self == other
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Render the value the way it is written in a declaration.
    ///
    /// Unlike `Display`, text is quoted and floats always keep a fractional
    /// part, so the literal form never loses its kind.
    pub fn to_literal(&self) -> String {
        match self {
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => format!("{:?}", f),
            Value::Text(t) => {
                let mut out = String::with_capacity(t.len() + 2);
                out.push('"');
                for ch in t.chars() {
                    match ch {
                        '"' => out.push_str("\\\""),
                        '\\' => out.push_str("\\\\"),
                        '\n' => out.push_str("\\n"),
                        '\t' => out.push_str("\\t"),
                        '\r' => out.push_str("\\r"),
                        other => out.push(other),
                    }
                }
                out.push('"');
                out
            }
            Value::Boolean(b) => b.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(t) => write!(f, "{}", t),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

macro_rules! impl_from_integer {
    ($($int:ty),+) => {
        $(
            impl From<$int> for Value {
                fn from(value: $int) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Value::Text(Cow::Borrowed(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(Cow::Owned(value))
    }
}
