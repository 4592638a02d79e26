// Whitespace rules from RFC 3261 Section 25.1
//
// WSP  = SP / HTAB
// LWS  = [*WSP CRLF] 1*WSP
// SWS  = [LWS]

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    combinator::{opt, recognize},
    sequence::tuple,
};

use super::ParseResult;

pub(crate) fn is_wsp(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

/// Parses a single whitespace character (SP or HTAB)
pub fn wsp(input: &[u8]) -> ParseResult<&[u8]> {
    alt((tag(b" "), tag(b"\t")))(input)
}

/// Parses optional whitespace (0 or more SP or HTAB)
pub fn owsp(input: &[u8]) -> ParseResult<&[u8]> {
    take_while(is_wsp)(input)
}

/// Parses CRLF. A bare LF is accepted as well.
pub fn crlf(input: &[u8]) -> ParseResult<&[u8]> {
    alt((tag(b"\r\n"), tag(b"\n")))(input)
}

/// Parses linear whitespace, including a folded line continuation.
pub fn lws(input: &[u8]) -> ParseResult<&[u8]> {
    alt((
        recognize(tuple((owsp, crlf, take_while1(is_wsp)))),
        take_while1(is_wsp),
    ))(input)
}

/// Parses optional linear whitespace; never fails.
pub fn sws(input: &[u8]) -> ParseResult<&[u8]> {
    let (rem, ws) = opt(lws)(input)?;
    Ok((rem, ws.unwrap_or(&input[..0])))
}
