use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::parser::header_line::parse_header_line;
use crate::parser::whitespace::crlf;
use crate::types::rseq::RSeq;

use super::header::Header;
use super::header_name::HeaderName;
use super::header_value::HeaderValue;
use super::typed_header::{TypedHeader, TypedHeaderTrait};

/// Read access to the headers a message carries.
///
/// Anything that owns a list of [`TypedHeader`]s gets name lookups and
/// typed lookups from this trait.
pub trait HeaderAccess {
    /// All headers in wire order
    fn headers(&self) -> &[TypedHeader];

    /// First header with the given name
    fn header(&self, name: &HeaderName) -> Option<&TypedHeader> {
        self.headers().iter().find(|h| h.name() == *name)
    }

    /// Every header with the given name, in wire order
    fn headers_by_name(&self, name: &HeaderName) -> Vec<&TypedHeader> {
        self.headers().iter().filter(|h| h.name() == *name).collect()
    }

    fn has_header(&self, name: &HeaderName) -> bool {
        self.header(name).is_some()
    }

    /// First header that holds a `T`
    fn typed_header<T: TypedHeaderTrait + 'static>(&self) -> Option<&T> {
        self.headers().iter().find_map(|h| h.as_typed_ref::<T>())
    }
}

/// The ordered header collection of one SIP message.
///
/// Insertion order is wire order. The list owns its headers; a transaction
/// layer that shares it across threads must wrap it in its own lock.
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
///
/// let mut headers = HeaderList::parse_lines("Require: 100rel\r\nRSeq: 988789\r\n").unwrap();
/// assert_eq!(headers.rseq_header().map(|r| r.sequence_number()), Some(988789));
///
/// // The transaction layer bumps the value for the next reliable response
/// headers.rseq_header_mut().unwrap().set_sequence_number(988790).unwrap();
/// assert_eq!(headers.to_wire_format(), "Require: 100rel\r\nRSeq: 988790\r\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderList {
    headers: Vec<TypedHeader>,
}

impl HeaderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypedHeader> {
        self.headers.iter()
    }

    /// Appends a header, keeping any existing headers of the same name
    pub fn push(&mut self, header: impl Into<TypedHeader>) {
        self.headers.push(header.into());
    }

    /// Replaces every header of the same name with `header`.
    ///
    /// The new header takes the position of the first one it replaces, or is
    /// appended when the name is not present yet.
    pub fn set(&mut self, header: impl Into<TypedHeader>) {
        let header = header.into();
        let name = header.name();
        match self.headers.iter().position(|h| h.name() == name) {
            Some(pos) => {
                self.headers[pos] = header;
                let mut idx = 0;
                self.headers.retain(|h| {
                    let keep = idx <= pos || h.name() != name;
                    idx += 1;
                    keep
                });
            }
            None => self.headers.push(header),
        }
    }

    /// Removes every header with the given name, returning how many were removed
    pub fn remove(&mut self, name: &HeaderName) -> usize {
        let before = self.headers.len();
        self.headers.retain(|h| h.name() != *name);
        before - self.headers.len()
    }

    /// The RSeq header, if the message carries one
    pub fn rseq_header(&self) -> Option<&RSeq> {
        self.typed_header::<RSeq>()
    }

    /// Mutable access to the RSeq header, for the transaction layer to update
    /// through [`RSeq::set_sequence_number`]
    pub fn rseq_header_mut(&mut self) -> Option<&mut RSeq> {
        self.headers.iter_mut().find_map(|h| h.as_typed_mut::<RSeq>())
    }

    /// Parses a block of header lines.
    ///
    /// Input is the header section of a message without its start line. Parsing
    /// stops at the first empty line or at end of input. Headers this crate does
    /// not model are kept as [`TypedHeader::Other`].
    ///
    /// A known header with an invalid value (for instance `RSeq: -1`) fails the
    /// whole block. With the `lenient_parsing` feature it is kept as `Other`
    /// instead.
    ///
    /// A response carries at most one RSeq. Extra RSeq headers are kept in wire
    /// order with a warning, and [`rseq_header`](Self::rseq_header) returns the
    /// first.
    pub fn parse_lines(input: &str) -> Result<Self> {
        let mut list = HeaderList::new();
        let mut rest = input.as_bytes();

        while !rest.is_empty() {
            if let Ok((after_blank, _)) = crlf(rest) {
                if !after_blank.is_empty() {
                    debug!(remaining = after_blank.len(), "stopping at end of header section");
                }
                break;
            }

            let (rem, (name, value)) = parse_header_line(rest).map_err(|e| {
                Error::ParseError(format!("Malformed header line: {}", Error::from(e)))
            })?;
            rest = rem;

            let header = Self::type_header(Header::new(name, HeaderValue::Raw(value)))?;
            if let TypedHeader::RSeq(extra) = &header {
                if let Some(first) = list.rseq_header() {
                    warn!(
                        first = first.sequence_number(),
                        extra = extra.sequence_number(),
                        "more than one RSeq header, the first one wins"
                    );
                }
            }
            list.headers.push(header);
        }

        debug!(count = list.len(), "parsed header section");
        Ok(list)
    }

    #[cfg(not(feature = "lenient_parsing"))]
    fn type_header(header: Header) -> Result<TypedHeader> {
        TypedHeader::try_from(header)
    }

    #[cfg(feature = "lenient_parsing")]
    fn type_header(header: Header) -> Result<TypedHeader> {
        match TypedHeader::try_from(header.clone()) {
            Ok(typed) => Ok(typed),
            Err(e) => {
                warn!(name = %header.name, error = %e, "keeping unparseable header as raw value");
                Ok(TypedHeader::Other(header.name, header.value))
            }
        }
    }

    /// Formats every header as `Name: value` followed by CRLF
    pub fn to_wire_format(&self) -> String {
        self.to_string()
    }
}

impl HeaderAccess for HeaderList {
    fn headers(&self) -> &[TypedHeader] {
        &self.headers
    }
}

impl fmt::Display for HeaderList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for header in &self.headers {
            write!(f, "{}\r\n", header)?;
        }
        Ok(())
    }
}

impl FromStr for HeaderList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        HeaderList::parse_lines(s)
    }
}

impl FromIterator<TypedHeader> for HeaderList {
    fn from_iter<I: IntoIterator<Item = TypedHeader>>(iter: I) -> Self {
        Self {
            headers: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for HeaderList {
    type Item = TypedHeader;
    type IntoIter = std::vec::IntoIter<TypedHeader>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.into_iter()
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = &'a TypedHeader;
    type IntoIter = std::slice::Iter<'a, TypedHeader>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::require::Require;

    const PROVISIONAL_HEADERS: &str = "Via: SIP/2.0/UDP client.example.com:5060;branch=z9hG4bK74bf9\r\n\
                                       From: Alice <sip:alice@example.com>;tag=9fxced76sl\r\n\
                                       To: Bob <sip:bob@example.com>;tag=8321234356\r\n\
                                       Call-ID: 3848276298220188511@client.example.com\r\n\
                                       CSeq: 1 INVITE\r\n\
                                       Require: 100rel\r\n\
                                       RSeq: 988789\r\n\
                                       Content-Length: 0\r\n\
                                       \r\n";

    #[test]
    fn test_parse_provisional_headers() {
        let headers = HeaderList::parse_lines(PROVISIONAL_HEADERS).unwrap();
        assert_eq!(headers.len(), 8);
        assert_eq!(headers.rseq_header(), Some(&RSeq::new(988789)));
        assert!(headers.typed_header::<Require>().unwrap().requires_100rel());

        match headers.header(&HeaderName::CSeq) {
            Some(TypedHeader::Other(_, value)) => assert_eq!(value.as_text(), Some("1 INVITE")),
            other => panic!("Expected untyped CSeq, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_stops_at_blank_line() {
        let headers = HeaderList::parse_lines("RSeq: 1\r\n\r\nv=0\r\n").unwrap();
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_parse_empty() {
        assert!(HeaderList::parse_lines("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_line() {
        assert!(matches!(
            HeaderList::parse_lines("RSeq 1\r\n"),
            Err(Error::ParseError(_))
        ));
    }

    #[cfg(not(feature = "lenient_parsing"))]
    #[test]
    fn test_parse_invalid_rseq_value_fails() {
        assert!(HeaderList::parse_lines("RSeq: -1\r\n").is_err());
    }

    #[cfg(feature = "lenient_parsing")]
    #[test]
    fn test_parse_invalid_rseq_value_kept_raw() {
        let headers = HeaderList::parse_lines("RSeq: -1\r\n").unwrap();
        assert!(headers.rseq_header().is_none());
        assert!(headers.has_header(&HeaderName::RSeq));
    }

    #[test]
    fn test_set_replaces_all_of_a_name() {
        let mut headers = HeaderList::new();
        headers.push(RSeq::new(1));
        headers.push(Require::with_tag("100rel"));
        headers.push(RSeq::new(2));

        headers.set(RSeq::new(3));
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.headers_by_name(&HeaderName::RSeq).len(), 1);
        assert_eq!(headers.to_wire_format(), "RSeq: 3\r\nRequire: 100rel\r\n");

        headers.set(TypedHeader::Other(HeaderName::CSeq, HeaderValue::text("1 INVITE")));
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn test_parse_duplicate_rseq_keeps_first() {
        let headers = HeaderList::parse_lines("RSeq: 1\r\nRSeq: 2\r\n").unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.headers_by_name(&HeaderName::RSeq).len(), 2);
        assert_eq!(headers.rseq_header(), Some(&RSeq::new(1)));
    }

    #[test]
    fn test_extension_names_match_case_insensitively() {
        let mut headers = HeaderList::new();
        headers.push(TypedHeader::Other(
            HeaderName::Other("X-Foo".to_string()),
            HeaderValue::text("one"),
        ));
        headers.push(RSeq::new(1));

        headers.set(TypedHeader::Other(
            HeaderName::Other("x-foo".to_string()),
            HeaderValue::text("two"),
        ));
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.to_wire_format(), "x-foo: two\r\nRSeq: 1\r\n");

        let upper = HeaderName::Other("X-FOO".to_string());
        assert!(headers.has_header(&upper));
        assert_eq!(headers.headers_by_name(&upper).len(), 1);

        let parsed = HeaderList::parse_lines("X-Foo: a\r\nx-FOO: b\r\n").unwrap();
        assert_eq!(parsed.headers_by_name(&upper).len(), 2);
        assert_eq!(parsed.header(&upper).unwrap().to_string(), "X-Foo: a");
    }

    #[test]
    fn test_remove() {
        let mut headers: HeaderList = vec![
            TypedHeader::RSeq(RSeq::new(1)),
            TypedHeader::RSeq(RSeq::new(2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(headers.remove(&HeaderName::RSeq), 2);
        assert!(headers.is_empty());
        assert_eq!(headers.remove(&HeaderName::RSeq), 0);
    }

    #[test]
    fn test_rseq_mut_goes_through_setter() {
        let mut headers = HeaderList::new();
        assert!(headers.rseq_header_mut().is_none());

        headers.push(RSeq::new(5));
        let rseq = headers.rseq_header_mut().unwrap();
        assert!(rseq.set_sequence_number(-5).is_err());
        rseq.set_sequence_number(6).unwrap();
        assert_eq!(headers.rseq_header(), Some(&RSeq::new(6)));
    }
}
