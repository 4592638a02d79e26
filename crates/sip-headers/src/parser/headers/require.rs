// Parser for Require header (RFC 3261 Section 20.32)
// Require = "Require" HCOLON option-tag *(COMMA option-tag)
// option-tag = token

use nom::{
    multi::separated_list1,
    sequence::delimited,
};

use crate::parser::separators::comma;
use crate::parser::token::token_string;
use crate::parser::whitespace::owsp;
use crate::parser::ParseResult;

/// Parses the value of a Require header into its option tags
pub fn parse_require(input: &[u8]) -> ParseResult<Vec<String>> {
    delimited(owsp, separated_list1(comma, token_string), owsp)(input)
}
