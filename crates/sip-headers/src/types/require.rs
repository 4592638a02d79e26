use nom::combinator::all_consuming;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::parser::headers::parse_require;
use crate::types::headers::typed_header::expect_name;
use crate::types::headers::{Header, HeaderName, HeaderValue, TypedHeaderTrait};

/// Option tag that marks a provisional response as reliable (RFC 3262)
pub const OPTION_TAG_100REL: &str = "100rel";

/// Require header (RFC 3261 Section 20.32)
///
/// Lists the extensions the recipient must support to process the message.
/// A reliable provisional response carries `Require: 100rel` next to its RSeq.
///
/// Example:
///   Require: 100rel, precondition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Require {
    option_tags: Vec<String>,
}

impl Require {
    /// Create a new Require header with the given option tags
    pub fn new(option_tags: Vec<String>) -> Self {
        Self { option_tags }
    }

    /// Create a new Require header with a single option tag
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            option_tags: vec![tag.into()],
        }
    }

    pub fn option_tags(&self) -> &[String] {
        &self.option_tags
    }

    /// Check if a specific tag is required
    pub fn requires(&self, tag: &str) -> bool {
        self.option_tags.iter().any(|t| t == tag)
    }

    /// True if the message must be delivered reliably
    pub fn requires_100rel(&self) -> bool {
        self.requires(OPTION_TAG_100REL)
    }

    /// Add an option tag unless it is already listed
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.requires(&tag) {
            self.option_tags.push(tag);
        }
    }

    /// Remove an option tag if it exists
    pub fn remove_tag(&mut self, tag: &str) {
        self.option_tags.retain(|t| t != tag);
    }
}

impl fmt::Display for Require {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.option_tags.join(", "))
    }
}

impl FromStr for Require {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (_, tags) = all_consuming(parse_require)(s.as_bytes()).map_err(Error::from)?;
        Ok(Require::new(tags))
    }
}

impl TypedHeaderTrait for Require {
    type Name = HeaderName;

    fn header_name() -> Self::Name {
        HeaderName::Require
    }

    fn to_header(&self) -> Header {
        Header::new(Self::header_name(), HeaderValue::text(self.to_string()))
    }

    fn from_header(header: &Header) -> Result<Self> {
        expect_name::<Self>(header)?;
        let (_, tags) = all_consuming(parse_require)(header.value.as_bytes())
            .map_err(|e| Error::InvalidHeader(format!("Invalid Require value: {}", Error::from(e))))?;
        Ok(Require::new(tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_tags() {
        let mut require = Require::with_tag(OPTION_TAG_100REL);
        assert!(require.requires_100rel());

        require.add_tag("precondition");
        require.add_tag("100rel");
        assert_eq!(require.option_tags(), ["100rel", "precondition"]);

        require.remove_tag("100rel");
        assert!(!require.requires_100rel());
        assert_eq!(require.to_string(), "precondition");
    }

    #[test]
    fn test_require_from_str() {
        let require = Require::from_str("100rel, precondition").unwrap();
        assert_eq!(require.option_tags(), ["100rel", "precondition"]);
        assert!(Require::from_str("").is_err());
    }

    #[test]
    fn test_require_header_conversion() {
        let header = Header::text(HeaderName::Require, "100rel");
        let require = Require::from_header(&header).unwrap();
        assert!(require.requires_100rel());
        assert_eq!(require.to_header(), header);

        let wrong = Header::text(HeaderName::Supported, "100rel");
        assert!(matches!(Require::from_header(&wrong), Err(Error::InvalidHeader(_))));
    }
}
