use nom::{
    bytes::complete::{tag, take_while},
    combinator::recognize,
    sequence::tuple,
};

use super::whitespace::{is_wsp, sws};
use super::ParseResult;

/// HCOLON = *( SP / HTAB ) ":" SWS
pub fn hcolon(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(tuple((take_while(is_wsp), tag(b":"), sws)))(input)
}

/// COMMA = SWS "," SWS
pub fn comma(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(tuple((sws, tag(b","), sws)))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hcolon() {
        assert_eq!(hcolon(b": 42").unwrap().0, b"42");
        assert_eq!(hcolon(b" \t:42").unwrap().0, b"42");
        assert_eq!(hcolon(b":\r\n 42").unwrap().0, b"42");
        assert!(hcolon(b"42").is_err());
    }

    #[test]
    fn test_comma() {
        assert_eq!(comma(b" , precondition").unwrap().0, b"precondition");
        assert_eq!(comma(b",timer").unwrap().0, b"timer");
        assert!(comma(b"; timer").is_err());
    }
}
