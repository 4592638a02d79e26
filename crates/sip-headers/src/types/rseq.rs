//! # SIP RSeq Header
//!
//! This module provides an implementation of the SIP RSeq header as defined in
//! [RFC 3262](https://datatracker.ietf.org/doc/html/rfc3262), the extension for
//! reliable provisional responses. RSeq is not part of RFC 3261.
//!
//! A UAS sends RSeq in each provisional response (other than 100) it wants
//! delivered reliably. The UAC acknowledges each one with a PRACK whose RAck
//! header echoes the RSeq value.
//!
//! ## Numbering rules
//!
//! - The value is a 32-bit unsigned integer, 1 to 2**32 - 1.
//! - The first value for a request is chosen below 2**31 - 1.
//! - Each later reliable provisional response for the same request carries a
//!   value greater by exactly one, and the numbering never wraps around.
//! - The numbering space is per transaction, so responses to different requests
//!   may reuse the same values.
//!
//! Only the 32-bit range is enforced by [`RSeq`]. Increment-by-one and no-wrap are
//! the transaction layer's job: [`RSeq::next`] and [`RSeq::is_valid_initial`] are
//! there to help it, nothing calls them implicitly.
//!
//! ## Format
//!
//! ```text
//! RSeq: 988789
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//! use std::str::FromStr;
//!
//! let mut rseq = RSeq::from_str("988789").unwrap();
//! assert_eq!(rseq.sequence_number(), 988789);
//!
//! rseq.set_sequence_number(988790).unwrap();
//! assert_eq!(rseq.to_string(), "988790");
//!
//! // Negative values are rejected and leave the header untouched
//! assert!(rseq.set_sequence_number(-1).is_err());
//! assert_eq!(rseq.sequence_number(), 988790);
//! ```

use nom::combinator::all_consuming;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::headers::parse_rseq;
use crate::types::headers::typed_header::expect_name;
use crate::types::headers::{Header, HeaderName, HeaderValue, TypedHeaderTrait};

/// Typed RSeq header.
///
/// Holds the response sequence number of one reliable provisional response.
/// Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RSeq {
    value: u32,
}

impl RSeq {
    /// Largest value an RSeq can carry (2**32 - 1)
    pub const MAX: u32 = u32::MAX;

    /// Exclusive upper bound for the first RSeq of a transaction (2**31 - 1)
    pub const MAX_INITIAL: u32 = (1 << 31) - 1;

    /// Creates a new RSeq header.
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Creates an RSeq with a random starting value in `1..MAX_INITIAL`.
    ///
    /// RFC 3262 recommends a random initial value so that retransmissions of
    /// an earlier dialog are not mistaken for new responses.
    ///
    /// ```rust
    /// use rvoip_sip_headers::prelude::*;
    ///
    /// let rseq = RSeq::random_initial();
    /// assert!(rseq.is_valid_initial());
    /// ```
    pub fn random_initial() -> Self {
        Self::new(rand::thread_rng().gen_range(1..Self::MAX_INITIAL))
    }

    /// Returns the sequence number.
    pub fn sequence_number(&self) -> u32 {
        self.value
    }

    /// Replaces the sequence number.
    ///
    /// The value must be expressible as a 32-bit unsigned integer. Anything else
    /// is rejected with [`Error::InvalidArgument`] and the stored value is left
    /// as it was.
    ///
    /// This does not check the increment-by-one rule, so any jump is accepted.
    ///
    /// ```rust
    /// use rvoip_sip_headers::prelude::*;
    ///
    /// let mut rseq = RSeq::new(100);
    /// rseq.set_sequence_number(105).unwrap();
    /// assert_eq!(rseq.sequence_number(), 105);
    ///
    /// assert!(matches!(rseq.set_sequence_number(-1), Err(Error::InvalidArgument(_))));
    /// assert_eq!(rseq.sequence_number(), 105);
    /// ```
    pub fn set_sequence_number(&mut self, sequence_number: i64) -> Result<()> {
        if sequence_number < 0 {
            debug!(sequence_number, "rejecting negative RSeq sequence number");
            return Err(Error::InvalidArgument(format!(
                "RSeq sequence number must not be negative, got {}",
                sequence_number
            )));
        }
        let value = u32::try_from(sequence_number).map_err(|_| {
            debug!(sequence_number, "rejecting RSeq sequence number wider than 32 bits");
            Error::InvalidArgument(format!(
                "RSeq sequence number {} does not fit in 32 bits",
                sequence_number
            ))
        })?;
        self.value = value;
        Ok(())
    }

    /// Returns true if this value may start a new RSeq numbering space.
    pub fn is_valid_initial(&self) -> bool {
        self.value >= 1 && self.value < Self::MAX_INITIAL
    }

    /// The RSeq for the next reliable provisional response of the same
    /// transaction, or `None` once the numbering space is exhausted.
    ///
    /// ```rust
    /// use rvoip_sip_headers::prelude::*;
    ///
    /// assert_eq!(RSeq::new(1).next(), Some(RSeq::new(2)));
    /// assert_eq!(RSeq::new(RSeq::MAX).next(), None);
    /// ```
    pub fn next(&self) -> Option<RSeq> {
        self.value.checked_add(1).map(RSeq::new)
    }
}

impl fmt::Display for RSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for RSeq {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (_, value) = all_consuming(parse_rseq)(s.as_bytes()).map_err(Error::from)?;
        Ok(RSeq::new(value))
    }
}

impl TypedHeaderTrait for RSeq {
    type Name = HeaderName;

    fn header_name() -> Self::Name {
        HeaderName::RSeq
    }

    fn to_header(&self) -> Header {
        Header::new(Self::header_name(), HeaderValue::integer(self.value.into()))
    }

    fn from_header(header: &Header) -> Result<Self> {
        expect_name::<Self>(header)?;
        RSeq::try_from(&header.value)
    }
}

impl TryFrom<&HeaderValue> for RSeq {
    type Error = Error;

    fn try_from(value: &HeaderValue) -> Result<Self> {
        let (_, value) = all_consuming(parse_rseq)(value.as_bytes()).map_err(|e| {
            Error::InvalidHeader(format!("Invalid RSeq value: {}", Error::from(e)))
        })?;
        Ok(RSeq::new(value))
    }
}

impl From<u32> for RSeq {
    fn from(value: u32) -> Self {
        RSeq::new(value)
    }
}

impl From<RSeq> for u32 {
    fn from(rseq: RSeq) -> Self {
        rseq.value
    }
}
