use serde::{Deserialize, Serialize};
use std::any::Any;
use std::convert::TryFrom;
use std::fmt;
use tracing::trace;

use crate::error::{Error, Result};
use crate::types::require::Require;
use crate::types::rseq::RSeq;

use super::header::Header;
use super::header_name::HeaderName;
use super::header_value::HeaderValue;

/// A strongly-typed representation of a SIP header.
///
/// A message keeps its headers as a list of `TypedHeader`s. Headers this crate
/// models get their own variant; everything else is carried through untouched
/// in [`TypedHeader::Other`].
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
/// use std::convert::TryFrom;
///
/// let header = TypedHeader::RSeq(RSeq::new(988789));
/// assert_eq!(header.name(), HeaderName::RSeq);
/// assert_eq!(header.to_string(), "RSeq: 988789");
///
/// // Dispatch from an untyped header
/// let parsed = TypedHeader::try_from(Header::text(HeaderName::RSeq, "7")).unwrap();
/// assert_eq!(parsed, TypedHeader::RSeq(RSeq::new(7)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypedHeader {
    RSeq(RSeq),
    Require(Require),

    /// Represents an unknown or unparsed header.
    Other(HeaderName, HeaderValue),
}

impl TypedHeader {
    /// Returns the name of the header
    pub fn name(&self) -> HeaderName {
        match self {
            TypedHeader::RSeq(_) => HeaderName::RSeq,
            TypedHeader::Require(_) => HeaderName::Require,
            TypedHeader::Other(name, _) => name.clone(),
        }
    }

    /// Try to view this header as a specific typed header
    ///
    /// Returns `None` for `Other` headers and for variants that do not hold a `T`.
    pub fn as_typed_ref<T: TypedHeaderTrait + 'static>(&self) -> Option<&T> {
        let inner: &dyn Any = match self {
            TypedHeader::RSeq(h) => h,
            TypedHeader::Require(h) => h,
            TypedHeader::Other(..) => return None,
        };
        inner.downcast_ref::<T>()
    }

    /// Mutable counterpart of [`as_typed_ref`](Self::as_typed_ref)
    pub fn as_typed_mut<T: TypedHeaderTrait + 'static>(&mut self) -> Option<&mut T> {
        let inner: &mut dyn Any = match self {
            TypedHeader::RSeq(h) => h,
            TypedHeader::Require(h) => h,
            TypedHeader::Other(..) => return None,
        };
        inner.downcast_mut::<T>()
    }

    /// Converts back to the untyped form
    pub fn to_header(&self) -> Header {
        match self {
            TypedHeader::RSeq(h) => h.to_header(),
            TypedHeader::Require(h) => h.to_header(),
            TypedHeader::Other(name, value) => Header::new(name.clone(), value.clone()),
        }
    }
}

impl fmt::Display for TypedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedHeader::RSeq(rseq) => write!(f, "{}: {}", HeaderName::RSeq, rseq),
            TypedHeader::Require(require) => write!(f, "{}: {}", HeaderName::Require, require),
            TypedHeader::Other(name, value) => write!(f, "{}: {}", name, value),
        }
    }
}

/// Trait for header types that can be converted to/from the generic `Header` type.
///
/// This is the header capability every typed header exposes: a canonical name,
/// conversion to a wire-ready [`Header`], and validated conversion back.
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
///
/// struct TraceId(String);
///
/// impl TypedHeaderTrait for TraceId {
///     type Name = HeaderName;
///
///     fn header_name() -> Self::Name {
///         HeaderName::Other("X-Trace-Id".to_string())
///     }
///
///     fn to_header(&self) -> Header {
///         Header::text(Self::header_name(), &self.0)
///     }
///
///     fn from_header(header: &Header) -> Result<Self> {
///         header.value.as_text()
///             .map(|s| TraceId(s.to_string()))
///             .ok_or_else(|| Error::InvalidHeader("X-Trace-Id is not UTF-8".to_string()))
///     }
/// }
///
/// let header = TraceId("abc".to_string()).to_header();
/// assert_eq!(header.to_wire_format(), "X-Trace-Id: abc");
/// ```
pub trait TypedHeaderTrait: Sized {
    /// Type of header name
    type Name: Into<HeaderName> + Clone;

    /// Header name
    fn header_name() -> Self::Name;

    /// Convert to an untyped Header
    fn to_header(&self) -> Header;

    /// Try to convert from an untyped Header
    fn from_header(header: &Header) -> Result<Self>;
}

/// Rejects a header whose name does not belong to `T`.
pub(crate) fn expect_name<T: TypedHeaderTrait>(header: &Header) -> Result<()> {
    let expected: HeaderName = T::header_name().into();
    if header.name != expected {
        return Err(Error::InvalidHeader(format!(
            "Expected {} header, got {}",
            expected, header.name
        )));
    }
    Ok(())
}

impl TryFrom<Header> for TypedHeader {
    type Error = Error;

    fn try_from(header: Header) -> Result<Self> {
        match header.name {
            HeaderName::RSeq => RSeq::from_header(&header).map(TypedHeader::RSeq),
            HeaderName::Require => Require::from_header(&header).map(TypedHeader::Require),
            _ => {
                trace!(name = %header.name, "keeping header untyped");
                Ok(TypedHeader::Other(header.name, header.value))
            }
        }
    }
}

impl From<RSeq> for TypedHeader {
    fn from(rseq: RSeq) -> Self {
        TypedHeader::RSeq(rseq)
    }
}

impl From<Require> for TypedHeader {
    fn from(require: Require) -> Self {
        TypedHeader::Require(require)
    }
}

impl From<&TypedHeader> for HeaderName {
    fn from(header: &TypedHeader) -> HeaderName {
        header.name()
    }
}
