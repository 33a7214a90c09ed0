//! Reply values
//!
//! The decoded representation of a single reply frame.

use std::fmt;

/// A single decoded reply value.
///
/// Arrays may nest to arbitrary depth; each array's element count is fixed by
/// its count prefix at decode time. Bulk payloads are carried as text: the
/// wire handling is not binary-safe beyond length checking, so payloads that
/// are not valid UTF-8 are decoded lossily.
///
/// `Error` is part of the value domain (it has a wire form and can be
/// encoded), but the decoder never yields it: an error line aborts decoding
/// with [`ProtocolError::Remote`](crate::ProtocolError::Remote) instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Simple string reply (`+OK`)
    SimpleString(String),

    /// Error reply (`-ERR message`)
    Error(String),

    /// Integer reply (`:1000`)
    Integer(i64),

    /// Bulk string reply (`$6` followed by the payload line)
    BulkString(String),

    /// Null bulk string (`$-1`)
    Null,

    /// Array reply (`*2` followed by two elements)
    Array(Vec<Value>),

    /// Null array (`*-1`)
    NullArray,
}

impl Value {
    /// Returns true if this value is a null bulk string or a null array.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null | Value::NullArray)
    }

    /// If this is a simple or bulk string, returns its text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::SimpleString(s) | Value::BulkString(s) => Some(s),
            _ => None,
        }
    }

    /// If this is an integer reply, returns the value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If this is a (non-null) array reply, returns its elements.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

/// Renders the value the way interactive clients conventionally do:
/// `(nil)`, `(integer) n`, quoted bulk strings, and numbered array lines
/// with nested arrays indented under their position.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl Value {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        match self {
            Value::SimpleString(s) => write!(f, "{s}"),
            Value::Error(e) => write!(f, "(error) {e}"),
            Value::Integer(i) => write!(f, "(integer) {i}"),
            Value::BulkString(s) => write!(f, "{s:?}"),
            Value::Null | Value::NullArray => write!(f, "(nil)"),
            Value::Array(items) if items.is_empty() => write!(f, "(empty array)"),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                        write!(f, "{:width$}", "", width = indent)?;
                    }
                    write!(f, "{}) ", i + 1)?;
                    item.fmt_indented(f, indent + 3)?;
                }
                Ok(())
            }
        }
    }
}
