//! The `Accept` header and content negotiation (RFC 7231, section 5.3.2).
//!
//! # Examples
//!
//! ```
//! use http_rfcx::accept;
//!
//! let accept = accept::parse("text/plain; q=0.5, text/html, text/x-dvi; q=0.8, text/x-c")?;
//! let candidates = ["text/plain", "text/x-dvi", "text/html"];
//! assert_eq!(accept.most_acceptable(&candidates), Some(&"text/html"));
//! assert!(!accept.acceptable("application/json"));
//! # Ok::<(), http_rfcx::Error>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use http_types::headers::{Headers, ACCEPT};

use crate::{ParseOptions, Result};

mod media_range;
mod parser;
mod scanner;

pub use media_range::{MediaRange, DEFAULT_Q};

/// Parse an `Accept` header value. Empty input accepts anything.
pub fn parse(input: &str) -> Result<Accept> {
    parse_with_opts(input, ParseOptions::default())
}

/// Parse an `Accept` header value. Empty input accepts anything.
pub fn parse_with_opts(input: &str, opts: ParseOptions) -> Result<Accept> {
    log::trace!("parsing accept {:?}", input);
    opts.check(input)?;
    parser::Parser::new(input).parse()
}

/// The media ranges of an `Accept` header, in declaration order.
///
/// A record without ranges accepts anything, like `*/*`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accept {
    media_ranges: Vec<MediaRange>,
}

impl Accept {
    /// Create a record from its ranges.
    pub fn new(media_ranges: Vec<MediaRange>) -> Self {
        Self { media_ranges }
    }

    /// The ranges, in declaration order.
    pub fn media_ranges(&self) -> &[MediaRange] {
        &self.media_ranges
    }

    /// Read the `Accept` headers of a request or response.
    ///
    /// Multiple headers are combined as if they were one comma-separated
    /// list. A missing header accepts anything.
    pub fn from_headers(headers: impl AsRef<Headers>) -> Result<Self> {
        match headers.as_ref().get(ACCEPT) {
            Some(values) => {
                let joined = values
                    .iter()
                    .map(|value| value.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                parse(&joined)
            }
            None => parse(""),
        }
    }

    /// Whether any range supports `media_type`.
    pub fn acceptable(&self, media_type: &str) -> bool {
        self.media_ranges.is_empty()
            || self
                .media_ranges
                .iter()
                .any(|range| range.supports(media_type))
    }

    /// Pick the candidate preferred by the client.
    ///
    /// Ranges are tried from the heaviest down, ties keeping declaration
    /// order; the first candidate the current range supports wins.
    pub fn most_acceptable<'m, S: AsRef<str>>(&self, candidates: &'m [S]) -> Option<&'m S> {
        let any = [MediaRange::any()];
        let ranges = if self.media_ranges.is_empty() {
            &any[..]
        } else {
            &self.media_ranges[..]
        };

        let mut ranges: Vec<&MediaRange> = ranges.iter().collect();
        ranges.sort_by(|a, b| {
            b.weight()
                .partial_cmp(&a.weight())
                .unwrap_or(Ordering::Equal)
        });

        for range in ranges {
            let found = candidates
                .iter()
                .find(|candidate| range.supports(candidate.as_ref()));
            if let Some(candidate) = found {
                log::debug!(
                    "accept: selected {:?} via {} (weight {})",
                    candidate.as_ref(),
                    range,
                    range.weight()
                );
                return Some(candidate);
            }
        }

        log::debug!("accept: no acceptable candidate");
        None
    }
}

impl fmt::Display for Accept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.media_ranges.is_empty() {
            return write!(f, "*/*");
        }

        for (i, range) in self.media_ranges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", range)?;
        }
        Ok(())
    }
}

impl FromStr for Accept {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
