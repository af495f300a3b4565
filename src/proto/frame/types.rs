use std::fmt;

use bytes::Bytes;

/// A RESP (Redis Serialization Protocol) frame.
///
/// This is the generic reply tree handed over by the execution layer:
/// - SimpleString: Status responses like "OK"
/// - Error: Error responses from the server
/// - Integer: Numeric responses
/// - BulkString: Binary-safe string data
/// - Array: Command arguments and nested array responses
/// - Null: NULL value
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Simple string (+OK).
    SimpleString(Vec<u8>),
    /// Error (-ERR).
    Error(Vec<u8>),
    /// Integer (:1000).
    Integer(i64),
    /// Bulk string ($6\r\nfoobar).
    BulkString(Option<Bytes>),
    /// Array (*2\r\n...).
    Array(Vec<Frame>),
    /// Null ($-1 or *-1).
    Null,
}

impl Frame {
    /// Creates a bulk string frame from anything convertible to [`Bytes`].
    pub fn bulk(data: impl Into<Bytes>) -> Self {
        Frame::BulkString(Some(data.into()))
    }

    /// Returns the integer if this is an Integer frame.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Frame::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the text of a bulk or simple string frame.
    ///
    /// Returns `None` for other frame types, null bulk strings, and
    /// payloads that are not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Frame::BulkString(Some(b)) => std::str::from_utf8(b).ok(),
            Frame::SimpleString(s) => std::str::from_utf8(s).ok(),
            _ => None,
        }
    }

    /// Returns the elements if this is an Array frame.
    pub fn as_array(&self) -> Option<&[Frame]> {
        match self {
            Frame::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns true if this frame is Null.
    pub fn is_null(&self) -> bool {
        matches!(self, Frame::Null | Frame::BulkString(None))
    }
}

/// Compact, bracketed rendering used in error messages,
/// e.g. `[0 5460 [127.0.0.1 7000]]`.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::SimpleString(s) => write!(f, "{}", String::from_utf8_lossy(s)),
            Frame::Error(e) => write!(f, "-{}", String::from_utf8_lossy(e)),
            Frame::Integer(i) => write!(f, "{}", i),
            Frame::BulkString(Some(b)) => write!(f, "{}", String::from_utf8_lossy(b)),
            Frame::BulkString(None) | Frame::Null => write!(f, "nil"),
            Frame::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
