// Generic header line:
//   message-header = header-name HCOLON header-value CRLF
//   header-name    = token
// Folded continuation lines (CRLF followed by whitespace) belong to the value.

use nom::{
    branch::alt,
    bytes::complete::{take_till1, take_while1},
    combinator::{map_res, opt, recognize},
    multi::many0,
    sequence::{pair, terminated, tuple},
};
use std::str::{self, FromStr};

use crate::parser::separators::hcolon;
use crate::parser::token::token;
use crate::parser::whitespace::{crlf, is_wsp};
use crate::parser::ParseResult;
use crate::types::headers::HeaderName;

fn is_line_end(c: u8) -> bool {
    c == b'\r' || c == b'\n'
}

fn header_name(input: &[u8]) -> ParseResult<HeaderName> {
    map_res(token, |name: &[u8]| {
        str::from_utf8(name)
            .map_err(|_| ())
            .and_then(|s| HeaderName::from_str(s).map_err(|_| ()))
    })(input)
}

fn folded_value(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(many0(alt((
        take_till1(is_line_end),
        recognize(pair(crlf, take_while1(is_wsp))),
    ))))(input)
}

/// Collapses folding whitespace into a single space and trims both ends.
fn unfold(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut pending_space = false;
    for &c in raw {
        if is_wsp(c) || is_line_end(c) {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(b' ');
            pending_space = false;
        }
        out.push(c);
    }
    out
}

/// Parses one header line into its name and unfolded raw value.
///
/// The terminating CRLF is consumed when present, so a block of headers can be
/// parsed by calling this repeatedly.
pub fn parse_header_line(input: &[u8]) -> ParseResult<(HeaderName, Vec<u8>)> {
    let (rem, (name, _, value)) = terminated(tuple((header_name, hcolon, folded_value)), opt(crlf))(input)?;
    Ok((rem, (name, unfold(value))))
}
