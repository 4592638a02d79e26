// token = 1*(alphanum / "-" / "." / "!" / "%" / "*" / "_" / "+" / "`" / "'" / "~")

use nom::{bytes::complete::take_while1, combinator::map_res};
use std::str;

use super::ParseResult;

pub(crate) fn is_token_char(c: u8) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, b'-' | b'.' | b'!' | b'%' | b'*' | b'_' | b'+' | b'`' | b'\'' | b'~')
}

/// Parses an RFC 3261 token, returning the raw bytes
pub fn token(input: &[u8]) -> ParseResult<&[u8]> {
    take_while1(is_token_char)(input)
}

/// Parses an RFC 3261 token into an owned string
pub fn token_string(input: &[u8]) -> ParseResult<String> {
    map_res(token, |bytes: &[u8]| str::from_utf8(bytes).map(|s| s.to_string()))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token() {
        let (rem, tok) = token(b"100rel, timer").unwrap();
        assert_eq!(tok, b"100rel");
        assert_eq!(rem, b", timer");

        let (rem, tok) = token_string(b"Session-Expires:").unwrap();
        assert_eq!(tok, "Session-Expires");
        assert_eq!(rem, b":");

        assert!(token(b"").is_err());
        assert!(token(b":RSeq").is_err());
    }
}
