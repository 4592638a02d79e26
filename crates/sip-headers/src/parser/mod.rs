//! nom parsers for SIP header lines and the value grammars of the typed headers.
//!
//! Every parser works on `&[u8]` and follows the ABNF of RFC 3261 Section 25
//! (and RFC 3262 Section 7 for `RSeq`).

use nom::IResult;

/// Result type shared by all byte-level parsers
pub type ParseResult<'a, O> = IResult<&'a [u8], O>;

pub mod header_line;
pub mod headers;
pub mod separators;
pub mod token;
pub mod whitespace;

pub use header_line::parse_header_line;
pub use headers::{parse_require, parse_rseq, parse_rseq_header};
