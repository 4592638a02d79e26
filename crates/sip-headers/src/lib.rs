//! Typed SIP headers for reliable provisional responses.
//!
//! This crate implements the `RSeq` header of
//! [RFC 3262](https://datatracker.ietf.org/doc/html/rfc3262) together with the
//! header model it plugs into: header names, raw and typed header values, a
//! per-message header list, nom parsers for header lines, and builder
//! extensions for outgoing provisional responses.
//!
//! Parsing whole messages, transports, PRACK retransmission timers and dialog
//! state live in other crates of the stack.
//!
//! # Example
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! // Receiving side: pick the RSeq out of a provisional response
//! let headers = HeaderList::parse_lines(
//!     "CSeq: 1 INVITE\r\nRequire: 100rel\r\nRSeq: 988789\r\n",
//! ).unwrap();
//! let rseq = headers.rseq_header().unwrap();
//! assert_eq!(rseq.sequence_number(), 988789);
//!
//! // Sending side: the next reliable provisional response
//! let next = HeaderList::new()
//!     .require_100rel()
//!     .rseq_next(rseq.sequence_number());
//! assert_eq!(next.to_wire_format(), "Require: 100rel\r\nRSeq: 988790\r\n");
//! ```

pub mod builder;
pub mod error;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    Header, HeaderAccess, HeaderList, HeaderName, HeaderValue, RSeq, Require, TypedHeader,
    TypedHeaderTrait,
};

/// Re-export of common types and traits
pub mod prelude {
    pub use crate::builder::{HeaderSetter, RSeqBuilderExt, RequireBuilderExt};
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        Header, HeaderAccess, HeaderList, HeaderName, HeaderValue, RSeq, Require, TypedHeader,
        TypedHeaderTrait, OPTION_TAG_100REL,
    };
}
