//! Decoding of reserved fields from a JSON document.

use serde_json::Value;

use crate::{Error, Result, UriRef};

/// A reserved field of a record, named for error reporting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field {
    pub(crate) record: &'static str,
    pub(crate) name: &'static str,
}

impl Field {
    pub(crate) fn new(record: &'static str, name: &'static str) -> Self {
        Self { record, name }
    }

    fn mismatch(self, expected: &'static str) -> Error {
        log::trace!("{}.{}: expected a {}", self.record, self.name, expected);
        Error::FieldKindMismatch {
            record: self.record,
            field: self.name,
            expected,
        }
    }

    pub(crate) fn string(self, value: Value) -> Result<String> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch("string")),
        }
    }

    /// A URI reference, absolute or relative.
    pub(crate) fn uri(self, value: Value) -> Result<UriRef> {
        match value {
            Value::String(s) => UriRef::parse(&s).map_err(|_| self.mismatch("uri")),
            _ => Err(self.mismatch("uri")),
        }
    }

    /// An HTTP status code. Fractional numbers are truncated.
    pub(crate) fn status(self, value: Value) -> Result<u16> {
        let n = match &value {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| *f >= 0.0 && *f <= f64::from(u16::MAX))
                    .map(|f| f as u64)
            }),
            _ => None,
        };
        match n {
            Some(n) if n <= u64::from(u16::MAX) => Ok(n as u16),
            _ => Err(self.mismatch("number")),
        }
    }
}
