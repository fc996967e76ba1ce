//! Cache Value Module
//!
//! Defines the value domain accepted by the cache and its canonical byte
//! representation.

use std::fmt;

// == Value ==
/// A value accepted by the cache: raw bytes, text, integer or float.
///
/// Every variant is stored through one canonical byte representation:
/// bytes and text verbatim, numbers as decimal text. Reading a value back
/// yields those bytes; typed accessors decode on top.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bytes(Vec<u8>),
    Str(String),
    Int(i64),
    Float(f64),
}

impl Value {
    // == To Bytes ==
    /// Returns the canonical byte representation used for storage.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Value::Bytes(bytes) => bytes.clone(),
            Value::Str(text) => text.clone().into_bytes(),
            Value::Int(n) => n.to_string().into_bytes(),
            Value::Float(x) => x.to_string().into_bytes(),
        }
    }

    // == Tuple Repr ==
    /// Renders the value as a one-element argument tuple for call-history
    /// logs, e.g. `('foo',)` or `(42,)`.
    ///
    /// Text is single-quoted, bytes use a `b'..'` form with non-printable
    /// bytes escaped as `\xNN`, numbers appear as bare literals. The
    /// rendering is lossy for exotic text but stable; replay output is
    /// built from it.
    pub fn tuple_repr(&self) -> String {
        format!("({},)", self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bytes(bytes) => {
                write!(f, "b'")?;
                for &b in bytes {
                    if (0x20..0x7f).contains(&b) && b != b'\'' && b != b'\\' {
                        write!(f, "{}", b as char)?;
                    } else {
                        write!(f, "\\x{:02x}", b)?;
                    }
                }
                write!(f, "'")
            }
            Value::Str(text) => write!(f, "'{}'", text),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

// == Conversions ==
impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Str(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Str(text)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}
