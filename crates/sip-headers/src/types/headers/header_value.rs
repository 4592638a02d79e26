use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of an untyped SIP header.
///
/// Values are kept as the raw bytes that followed the colon, with folding
/// already removed. Typed headers parse these bytes on demand.
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
///
/// let value = HeaderValue::integer(42);
/// assert_eq!(value.as_text(), Some("42"));
/// assert_eq!(value.as_integer(), Some(42));
///
/// let value = HeaderValue::text("100rel");
/// assert_eq!(value.as_integer(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderValue {
    /// Raw value for unknown or unparsed headers
    Raw(Vec<u8>),
}

impl HeaderValue {
    pub fn text(value: impl Into<String>) -> Self {
        HeaderValue::Raw(value.into().into_bytes())
    }

    pub fn integer(value: i64) -> Self {
        HeaderValue::Raw(value.to_string().into_bytes())
    }

    /// Returns the raw bytes of the value
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            HeaderValue::Raw(bytes) => bytes,
        }
    }

    /// Returns the value as text, if it is valid UTF-8
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Returns the value as a signed integer, if it is one
    pub fn as_integer(&self) -> Option<i64> {
        self.as_text().and_then(|s| s.trim().parse().ok())
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}
