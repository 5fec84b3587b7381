//! Parsers for three small HTTP grammars.
//!
//! - `link` parses and renders a single `Link` header value (RFC 8288).
//! - `accept` parses an `Accept` header value and negotiates a media type
//!   against it (RFC 7231, section 5.3.2).
//! - `problem` models a JSON problem details body (RFC 7807).
//!
//! ```txt
//!   &str -> scanner -> (token, literal) -> parser -> record
//!                                                     |
//!                           Display / serde / negotiation
//! ```
//!
//! # Example
//!
//! ```
//! let accept: http_rfcx::Accept = "text/plain; q=0.5, text/html".parse()?;
//! assert_eq!(accept.most_acceptable(&["text/plain", "text/html"]), Some(&"text/html"));
//!
//! let link: http_rfcx::Link = r#"<https://example.com/2>; rel="next""#.parse()?;
//! assert_eq!(link.rel, "next");
//! # Ok::<(), http_rfcx::Error>(())
//! ```

#![forbid(unsafe_code, future_incompatible, rust_2018_idioms)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

/// The default maximum length, in bytes, of a header value accepted by the parsers.
pub const MAX_HEADER_LENGTH: usize = 8 * 1024;

pub use accept::{Accept, MediaRange};
pub use error::{Error, Result};
pub use link::Link;
pub use problem::Problem;
pub use uri::UriRef;

mod error;
mod extensions;
mod json;
mod token;
mod uri;

pub mod accept;
pub mod link;
pub mod problem;

/// Configure the parsers.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Longest input accepted, in bytes. Defaults to 8kb.
    max_length: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_length: Some(MAX_HEADER_LENGTH),
        }
    }
}

impl ParseOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the longest input accepted. `None` removes the limit.
    pub fn max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    // Prevent CWE-400 with oversized header values.
    pub(crate) fn check(&self, input: &str) -> Result<()> {
        match self.max_length {
            Some(max) if input.len() > max => {
                log::trace!("rejecting {} byte header value, limit is {}", input.len(), max);
                Err(Error::TooLong {
                    len: input.len(),
                    max,
                })
            }
            _ => Ok(()),
        }
    }
}
