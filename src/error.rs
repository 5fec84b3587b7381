use std::error::Error as StdError;
use std::fmt;

/// A specialized `Result` for header parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors when parsing or building header records.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The `Link` value is structurally invalid at the current token.
    InvalidLink,
    /// A `Link` attribute was not followed by `;` or the end of input.
    MissingSemicolon,
    /// A quoted `Link` attribute value was never closed.
    MissingClosingQuote,
    /// A `Link` attribute had no value after `=`.
    MissingAttrValue,
    /// The `Link` target could not be parsed as a URI.
    InvalidUri(url::ParseError),
    /// The `Accept` value is structurally invalid at the current token.
    InvalidMediaRange,
    /// A `q` parameter was not a number.
    QMustBeNumberBetween0And1,
    /// An extension key collides with a reserved field name.
    ReservedKey(String),
    /// A reserved JSON field held a value of the wrong kind.
    FieldKindMismatch {
        /// The record being decoded.
        record: &'static str,
        /// The reserved field name.
        field: &'static str,
        /// The kind of value the field requires.
        expected: &'static str,
    },
    /// The input exceeded the configured maximum length.
    TooLong {
        /// Length of the input, in bytes.
        len: usize,
        /// The configured limit, in bytes.
        max: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLink => write!(f, "invalid link"),
            Error::MissingSemicolon => write!(f, "invalid link: missing semicolon"),
            Error::MissingClosingQuote => write!(f, "invalid link: missing closing quote"),
            Error::MissingAttrValue => write!(f, "invalid link: missing attribute value"),
            Error::InvalidUri(err) => write!(f, "invalid link: {}", err),
            Error::InvalidMediaRange => write!(f, "invalid media range"),
            Error::QMustBeNumberBetween0And1 => write!(
                f,
                "invalid media range: q must be a number between 0 and 1"
            ),
            Error::ReservedKey(key) => write!(
                f,
                "the extension key {:?} is reserved, please choose another name",
                key
            ),
            Error::FieldKindMismatch {
                record,
                field,
                expected,
            } => write!(f, "{}.{} must be a {}", record, field, expected),
            Error::TooLong { len, max } => write!(
                f,
                "header value is {} bytes, should be at most {} bytes",
                len, max
            ),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::InvalidUri(err) => Some(err),
            _ => None,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUri(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_errors_keep_their_source() {
        let err = Error::from(url::ParseError::RelativeUrlWithoutBase);
        assert!(err.source().is_some());
        assert!(Error::InvalidLink.source().is_none());
    }

    #[test]
    fn mismatch_names_the_field() {
        let err = Error::FieldKindMismatch {
            record: "Problem",
            field: "status",
            expected: "number",
        };
        assert_eq!(err.to_string(), "Problem.status must be a number");
    }
}
