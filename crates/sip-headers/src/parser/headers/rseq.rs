// Parser for RSeq header (RFC 3262)
// RSeq = "RSeq" HCOLON response-num
// response-num = 1*DIGIT

use nom::{
    bytes::complete::tag_no_case,
    character::complete::digit1,
    combinator::map_res,
    sequence::{delimited, preceded},
};
use std::str;

use crate::parser::separators::hcolon;
use crate::parser::whitespace::owsp;
use crate::parser::ParseResult;

fn response_num(input: &[u8]) -> ParseResult<u32> {
    // Anything above u32::MAX fails here rather than wrapping
    map_res(digit1, |digits: &[u8]| {
        str::from_utf8(digits)
            .map_err(|_| ())
            .and_then(|s| s.parse::<u32>().map_err(|_| ()))
    })(input)
}

/// Parse an RSeq value, a decimal response number with optional surrounding whitespace
pub fn parse_rseq(input: &[u8]) -> ParseResult<u32> {
    delimited(owsp, response_num, owsp)(input)
}

/// Parse a complete RSeq header, including the header name and colon
pub fn parse_rseq_header(input: &[u8]) -> ParseResult<u32> {
    preceded(tag_no_case(b"RSeq"), preceded(hcolon, parse_rseq))(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nom::combinator::all_consuming;

    fn parse_value(input: &[u8]) -> Option<u32> {
        all_consuming(parse_rseq)(input).ok().map(|(_, v)| v)
    }

    #[test]
    fn test_parse_rseq_value() {
        assert_eq!(parse_value(b"1"), Some(1));
        assert_eq!(parse_value(b"988789"), Some(988789));
        assert_eq!(parse_value(b" 42\t"), Some(42));
        assert_eq!(parse_value(b"0007"), Some(7));
    }

    #[test]
    fn test_parse_rseq_bounds() {
        assert_eq!(parse_value(b"4294967295"), Some(u32::MAX));
        assert_eq!(parse_value(b"4294967296"), None);
        assert_eq!(parse_value(b"99999999999999999999"), None);
    }

    #[test]
    fn test_parse_rseq_invalid() {
        assert_eq!(parse_value(b""), None);
        assert_eq!(parse_value(b"abc"), None);
        assert_eq!(parse_value(b"-1"), None);
        assert_eq!(parse_value(b"+1"), None);
        assert_eq!(parse_value(b"1.5"), None);
        assert_eq!(parse_value(b"12 34"), None);
    }

    #[test]
    fn test_parse_rseq_header() {
        let (rem, v) = parse_rseq_header(b"RSeq: 988789").unwrap();
        assert!(rem.is_empty());
        assert_eq!(v, 988789);

        let (rem, v) = parse_rseq_header(b"rseq :123\r\n").unwrap();
        assert_eq!(rem, b"\r\n");
        assert_eq!(v, 123);

        assert!(parse_rseq_header(b"RAck: 776656 1 INVITE").is_err());
        assert!(parse_rseq_header(b"RSeq 5").is_err());
    }
}
