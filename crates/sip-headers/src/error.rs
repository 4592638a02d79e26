use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, parsing or updating SIP headers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value handed to a setter is outside the range the header can carry
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid SIP header syntax, or a header of the wrong name
    #[error("Invalid SIP header: {0}")]
    InvalidHeader(String),

    /// Malformed wire text: a header line, a header name or a value the nom
    /// parsers reject
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match err {
            nom::Err::Incomplete(_) => Error::ParseError("Parsing failed: incomplete input".to_string()),
            nom::Err::Error(e) | nom::Err::Failure(e) => Error::ParseError(format!(
                "Parsing failed at \"{}\": {:?}",
                String::from_utf8_lossy(e.input),
                e.code
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nom_error_conversion() {
        let err: nom::Err<nom::error::Error<&[u8]>> =
            nom::Err::Error(nom::error::Error::new(b"abc", nom::error::ErrorKind::Digit));
        let converted = Error::from(err);
        match converted {
            Error::ParseError(msg) => {
                assert!(msg.contains("abc"));
                assert!(msg.contains("Digit"));
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_incomplete_input_conversion() {
        let err: nom::Err<nom::error::Error<&[u8]>> = nom::Err::Incomplete(nom::Needed::Unknown);
        assert_eq!(
            Error::from(err),
            Error::ParseError("Parsing failed: incomplete input".to_string())
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument("sequence number -1 is negative".to_string());
        assert_eq!(err.to_string(), "Invalid argument: sequence number -1 is negative");
    }
}
