//! Problem details for HTTP APIs (RFC 7807).
//!
//! A [`Problem`] is a JSON object describing an error: five standard fields
//! plus any number of extension members.
//!
//! # Examples
//!
//! ```
//! use http_rfcx::Problem;
//! use http_types::StatusCode;
//!
//! let mut problem = Problem::from_status(StatusCode::Forbidden);
//! problem.detail = "Your current balance is 30, but that costs 50.".into();
//! problem.extend("balance", 30)?;
//!
//! assert_eq!(
//!     serde_json::to_string(&problem).unwrap(),
//!     r#"{"title":"Forbidden","status":403,"detail":"Your current balance is 30, but that costs 50.","balance":30}"#
//! );
//! # Ok::<(), http_rfcx::Error>(())
//! ```

use std::convert::TryFrom;
use std::error::Error as StdError;
use std::fmt;

use http_types::headers::CONTENT_TYPE;
use http_types::{Response, StatusCode};
use serde_json::Value;

use crate::extensions::Extensions;
use crate::{Result, UriRef};

mod json;

/// The media type of a serialized [`Problem`].
pub const JSON_MEDIA_TYPE: &str = "application/problem+json";

/// Names that can't be used as extension keys, compared ASCII
/// case-insensitively.
pub const RESERVED_KEYS: &[&str] = &["type", "title", "status", "detail", "instance"];

/// A problem details record.
///
/// String fields are absent when empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// A URI reference identifying the problem type.
    pub r#type: String,
    /// A short summary of the problem type.
    pub title: String,
    /// The HTTP status code of this occurrence.
    pub status: Option<u16>,
    /// An explanation specific to this occurrence.
    pub detail: String,
    /// A URI reference identifying this occurrence.
    pub instance: Option<UriRef>,
    extensions: Extensions,
}

impl Default for Problem {
    fn default() -> Self {
        Self {
            r#type: String::new(),
            title: String::new(),
            status: None,
            detail: String::new(),
            instance: None,
            extensions: Extensions::new(RESERVED_KEYS),
        }
    }
}

impl Problem {
    /// Create an empty problem.
    pub fn new() -> Self {
        Self::default()
    }

    /// A problem carrying `status` and its canonical reason as the title.
    pub fn from_status(status: StatusCode) -> Self {
        Self {
            title: status.canonical_reason().to_owned(),
            status: Some(status as u16),
            ..Self::default()
        }
    }

    /// Add, replace, or remove an extension member.
    ///
    /// `Value::Null` removes the key. Reserved names fail with
    /// [`Error::ReservedKey`](crate::Error::ReservedKey) and leave the
    /// problem untouched.
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

    /// Build a response with this problem as its JSON body.
    ///
    /// The response status is the problem's status, or `500` when it is
    /// unset or not a valid status code.
    pub fn into_response(self) -> http_types::Result<Response> {
        let status = self
            .status
            .and_then(|status| StatusCode::try_from(status).ok())
            .unwrap_or(StatusCode::InternalServerError);

        let body = serde_json::to_string(&self)?;
        log::debug!("problem: responding {} with {} byte body", status, body.len());

        let mut res = Response::new(status);
        res.set_body(body);
        res.insert_header(CONTENT_TYPE, JSON_MEDIA_TYPE);
        Ok(res)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl StdError for Problem {}
