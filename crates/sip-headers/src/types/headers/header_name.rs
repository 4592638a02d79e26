use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::str::FromStr;

/// SIP header names known to this crate
///
/// The set covers the headers that travel alongside `RSeq` in a reliable
/// provisional response. Any other name is kept verbatim in the `Other` variant,
/// so a header list never drops a header it does not understand.
///
/// Header names are case-insensitive in SIP. Parsing is case-insensitive and
/// understands compact forms; `as_str` yields the canonical spelling for known
/// names and the original spelling for `Other`. Two `Other` names are equal
/// (and hash alike) when they differ only in ASCII case.
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
/// use std::str::FromStr;
///
/// assert_eq!(HeaderName::from_str("rseq").unwrap(), HeaderName::RSeq);
/// assert_eq!(HeaderName::RSeq.as_str(), "RSeq");
///
/// // Compact form
/// assert_eq!(HeaderName::from_str("k").unwrap(), HeaderName::Supported);
///
/// // Unknown headers are preserved as written
/// let custom = HeaderName::from_str("X-Custom-Header").unwrap();
/// assert_eq!(custom, HeaderName::Other("X-Custom-Header".to_string()));
/// ```
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub enum HeaderName {
    /// Call-ID: Unique identifier for this call
    CallId,
    /// Contact: Where subsequent requests should be sent
    Contact,
    /// Content-Length: Size of the message body
    ContentLength,
    /// Content-Type: Media type of the message body
    ContentType,
    /// CSeq: Command sequence number
    CSeq,
    /// From: Initiator of the request
    From,
    /// To: Logical recipient of the request
    To,
    /// Via: Path taken by the request so far
    Via,
    /// Require: Options the recipient must support
    Require,
    /// Supported: Options supported by the sender
    Supported,
    /// Unsupported: Options the server does not support
    Unsupported,
    /// Proxy-Require: Options a proxy must support
    ProxyRequire,
    /// RAck: Acknowledges a reliable provisional response (RFC 3262)
    RAck,
    /// RSeq: Response sequence number for reliable provisional responses (RFC 3262)
    RSeq,
    /// Custom header name
    Other(String),
}

impl HeaderName {
    /// Returns the canonical name of the header
    pub fn as_str(&self) -> &str {
        match self {
            HeaderName::CallId => "Call-ID",
            HeaderName::Contact => "Contact",
            HeaderName::ContentLength => "Content-Length",
            HeaderName::ContentType => "Content-Type",
            HeaderName::CSeq => "CSeq",
            HeaderName::From => "From",
            HeaderName::To => "To",
            HeaderName::Via => "Via",
            HeaderName::Require => "Require",
            HeaderName::Supported => "Supported",
            HeaderName::Unsupported => "Unsupported",
            HeaderName::ProxyRequire => "Proxy-Require",
            HeaderName::RAck => "RAck",
            HeaderName::RSeq => "RSeq",
            HeaderName::Other(s) => s,
        }
    }

    /// Returns true for names that have no dedicated variant
    pub fn is_extension(&self) -> bool {
        matches!(self, HeaderName::Other(_))
    }
}

impl PartialEq for HeaderName {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (HeaderName::Other(a), HeaderName::Other(b)) => a.eq_ignore_ascii_case(b),
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }
}

impl Hash for HeaderName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        if let HeaderName::Other(name) = self {
            for b in name.bytes() {
                state.write_u8(b.to_ascii_lowercase());
            }
        }
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::ParseError("Empty header name is not allowed".to_string()));
        }

        let name = match s.to_ascii_lowercase().as_str() {
            "call-id" | "i" => HeaderName::CallId,
            "contact" | "m" => HeaderName::Contact,
            "content-length" | "l" => HeaderName::ContentLength,
            "content-type" | "c" => HeaderName::ContentType,
            "cseq" => HeaderName::CSeq,
            "from" | "f" => HeaderName::From,
            "to" | "t" => HeaderName::To,
            "via" | "v" => HeaderName::Via,
            "require" => HeaderName::Require,
            "supported" | "k" => HeaderName::Supported,
            "unsupported" => HeaderName::Unsupported,
            "proxy-require" => HeaderName::ProxyRequire,
            "rack" => HeaderName::RAck,
            "rseq" => HeaderName::RSeq,
            _ => HeaderName::Other(s.to_string()),
        };
        Ok(name)
    }
}
