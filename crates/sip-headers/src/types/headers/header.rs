use serde::{Deserialize, Serialize};
use std::fmt;

use super::header_name::HeaderName;
use super::header_value::HeaderValue;

/// SIP header, consisting of a name and value
///
/// This is the untyped form a header takes straight off the wire, and the
/// common currency of [`TypedHeaderTrait`](super::TypedHeaderTrait) conversions.
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
///
/// let header = Header::integer(HeaderName::RSeq, 988789);
/// assert_eq!(header.to_wire_format(), "RSeq: 988789");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name
    pub name: HeaderName,
    /// Header value
    pub value: HeaderValue,
}

impl Header {
    /// Create a new header
    pub fn new(name: HeaderName, value: HeaderValue) -> Self {
        Header { name, value }
    }

    /// Create a new text header
    pub fn text(name: HeaderName, value: impl Into<String>) -> Self {
        Header::new(name, HeaderValue::text(value))
    }

    /// Create a new integer header
    pub fn integer(name: HeaderName, value: i64) -> Self {
        Header::new(name, HeaderValue::integer(value))
    }

    /// Get the header as a formatted string, ready for wire transmission
    pub fn to_wire_format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
