//! The `Link` header (RFC 8288 web linking).
//!
//! A single link value is `<uri>` followed by `;`-separated attributes:
//!
//! ```txt
//! <https://example.com/page/2>; rel="next"; title*=UTF-8'en'Next
//! ```
//!
//! The reserved attributes are first-class fields of [`Link`]; any other
//! attribute becomes an extension, kept in the order it was declared.

use std::fmt;
use std::str::FromStr;

use http_types::headers::Headers;
use serde_json::Value;

use crate::extensions::Extensions;
use crate::{ParseOptions, Result, UriRef};

mod json;
mod parser;
mod scanner;

/// Names that can't be used as extension keys, compared ASCII
/// case-insensitively.
pub const RESERVED_KEYS: &[&str] = &["href", "rel", "hreflang", "media", "title", "title*", "type"];

/// Parse a single `Link` header value.
pub fn parse(input: &str) -> Result<Link> {
    parse_with_opts(input, ParseOptions::default())
}

/// Parse a single `Link` header value.
pub fn parse_with_opts(input: &str, opts: ParseOptions) -> Result<Link> {
    log::trace!("parsing link {:?}", input);
    opts.check(input)?;
    parser::Parser::new(input).parse()
}

/// A typed link.
///
/// String fields are absent when empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// The link target, absolute or relative to the resource.
    pub href: UriRef,
    /// The relation type.
    pub rel: String,
    /// Language of the target resource.
    pub hreflang: String,
    /// Media the target resource is intended for.
    pub media: String,
    /// Human-readable label.
    pub title: String,
    /// Human-readable label in RFC 8187 extended notation.
    pub title_star: String,
    /// Media type hint for the target resource.
    pub r#type: String,
    extensions: Extensions,
}

impl Link {
    /// Create a link to `href` with no attributes.
    pub fn new(href: impl Into<UriRef>) -> Self {
        Self {
            href: href.into(),
            rel: String::new(),
            hreflang: String::new(),
            media: String::new(),
            title: String::new(),
            title_star: String::new(),
            r#type: String::new(),
            extensions: Extensions::new(RESERVED_KEYS),
        }
    }

    /// Parse every `Link` header in `headers`, one link per header value.
    pub fn from_headers(headers: impl AsRef<Headers>) -> Result<Vec<Link>> {
        match headers.as_ref().get("link") {
            Some(values) => values.iter().map(|value| parse(value.as_str())).collect(),
            None => Ok(vec![]),
        }
    }

    /// Add, replace, or remove an extension attribute.
    ///
    /// `Value::Null` removes the key. Reserved names fail with
    /// [`Error::ReservedKey`](crate::Error::ReservedKey) and leave the link
    /// untouched.
    pub fn extend(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        self.extensions.extend(key.into(), value.into())
    }

    /// The value of an extension, if present.
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    /// Extension keys in the order they were added.
    pub fn extension_keys(&self) -> &[String] {
        self.extensions.keys()
    }

    /// The non-empty reserved attributes, in rendering order.
    fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        vec![
            ("rel", self.rel.as_str()),
            ("hreflang", self.hreflang.as_str()),
            ("media", self.media.as_str()),
            ("title", self.title.as_str()),
            ("title*", self.title_star.as_str()),
            ("type", self.r#type.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
    }
}

/// Write `value` as an RFC 7230 quoted-string.
fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in value.chars() {
        if c == '"' || c == '\\' {
            write!(f, "\\")?;
        }
        write!(f, "{}", c)?;
    }
    write!(f, "\"")
}

/// Renders header text with every value quoted; string extensions are
/// written raw, other extensions as compact JSON.
///
/// `"` and `\` inside values are backslash-escaped. The parser in this
/// crate reads single-word values only, and reads `""` only as the last
/// attribute. Values holding whitespace, quotes or backslashes, and empty
/// extension values followed by other attributes, render valid header text
/// that [`parse`] will not read back.
impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.href)?;
        for (name, value) in self.attributes() {
            write!(f, "; {}=", name)?;
            write_quoted(f, value)?;
        }
        for (key, value) in self.extensions.iter() {
            write!(f, "; {}=", key)?;
            match value {
                Value::String(s) => write_quoted(f, s)?,
                other => write_quoted(f, &other.to_string())?,
            }
        }
        Ok(())
    }
}

impl FromStr for Link {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
