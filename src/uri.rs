//! URI references: an absolute URI, or a reference relative to one.

use std::fmt;
use std::str::FromStr;

use http_types::Url;
use url::ParseError;

/// Base used only to check that a relative reference resolves.
const CHECK_BASE: &str = "http://relative.invalid/";

/// A URI reference (RFC 3986, section 4.1).
///
/// Absolute references are parsed into a [`Url`]. Relative ones such as
/// `/page/2` or `?q=1` are checked by resolving them against a throwaway
/// base, then kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriRef {
    /// An absolute URI.
    Absolute(Url),
    /// A relative reference, as written.
    Relative(String),
}

impl UriRef {
    /// Parse a URI reference.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match Url::parse(input) {
            Ok(url) => Ok(UriRef::Absolute(url)),
            Err(ParseError::RelativeUrlWithoutBase) => {
                // a header can't carry these verbatim
                if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
                    return Err(ParseError::RelativeUrlWithoutBase);
                }
                Url::parse(CHECK_BASE)?.join(input)?;
                Ok(UriRef::Relative(input.to_owned()))
            }
            Err(err) => Err(err),
        }
    }

    /// The reference as text.
    pub fn as_str(&self) -> &str {
        match self {
            UriRef::Absolute(url) => url.as_str(),
            UriRef::Relative(reference) => reference,
        }
    }

    /// The absolute URI, if this is one.
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            UriRef::Absolute(url) => Some(url),
            UriRef::Relative(_) => None,
        }
    }

    /// Whether this is a relative reference.
    pub fn is_relative(&self) -> bool {
        matches!(self, UriRef::Relative(_))
    }

    /// Resolve against `base`. Absolute references ignore the base.
    pub fn resolve(&self, base: &Url) -> Result<Url, ParseError> {
        match self {
            UriRef::Absolute(url) => Ok(url.clone()),
            UriRef::Relative(reference) => base.join(reference),
        }
    }
}

impl From<Url> for UriRef {
    fn from(url: Url) -> Self {
        UriRef::Absolute(url)
    }
}

impl FromStr for UriRef {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        UriRef::parse(s)
    }
}

impl fmt::Display for UriRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
