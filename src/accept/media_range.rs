use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// The quality of a media range that does not declare one.
pub const DEFAULT_Q: f64 = 1.0;

/// One entry of an `Accept` header: `type/subtype` plus parameters and a
/// quality value.
///
/// `*/*` and `type/*` are wildcards; `*/subtype` is not a valid range.
#[derive(Debug, Clone)]
pub struct MediaRange {
    type_name: String,
    subtype_name: String,
    /// Declaration order, `q` excluded, names lowercase.
    params: Vec<(String, String)>,
    q: f64,
}

impl MediaRange {
    /// Create a range without parameters and with the default quality.
    ///
    /// Names are lowercased. Fails for `*/subtype`.
    pub fn new(type_name: &str, subtype_name: &str) -> Result<Self> {
        if type_name == "*" && subtype_name != "*" {
            return Err(Error::InvalidMediaRange);
        }
        Ok(Self {
            type_name: type_name.to_ascii_lowercase(),
            subtype_name: subtype_name.to_ascii_lowercase(),
            params: vec![],
            q: DEFAULT_Q,
        })
    }

    /// `*/*`
    pub fn any() -> Self {
        Self {
            type_name: "*".into(),
            subtype_name: "*".into(),
            params: vec![],
            q: DEFAULT_Q,
        }
    }

    /// Add a parameter. `q` sets the quality instead.
    pub fn param(mut self, name: &str, value: &str) -> Result<Self> {
        self.set_param(name, value)?;
        Ok(self)
    }

    /// Set the quality value.
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub(crate) fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        if name.eq_ignore_ascii_case("q") {
            self.q = value.parse().map_err(|_| {
                log::trace!("accept: q={:?} is not a number", value);
                Error::QMustBeNumberBetween0And1
            })?;
            return Ok(());
        }

        let name = name.to_ascii_lowercase();
        match self.params.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value.to_owned(),
            None => self.params.push((name, value.to_owned())),
        }
        Ok(())
    }

    /// The type, or `*`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The subtype, or `*`.
    pub fn subtype_name(&self) -> &str {
        &self.subtype_name
    }

    /// The quality value as declared.
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Parameters other than `q`, in declaration order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The value of a parameter, by lowercase name.
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v.as_str())
    }

    /// `q` clamped to `[0, 1]`.
    fn clamped_q(&self) -> f64 {
        // max/min rather than clamp, so a NaN lands on 0
        self.q.max(0.0).min(1.0)
    }

    /// Sort key for negotiation: quality, then specificity.
    ///
    /// A quality of zero counts as unset.
    pub fn weight(&self) -> f64 {
        let specificity = if self.type_name == "*" {
            0.00000
        } else if self.subtype_name == "*" {
            0.00001
        } else {
            0.00002
        };

        let q = match self.clamped_q() {
            q if q == 0.0 => DEFAULT_Q,
            q => q,
        };

        specificity + q + 0.00010 * self.params.len() as f64
    }

    /// Whether the concrete media type `media_type` falls in this range.
    ///
    /// An unparseable media type is never supported.
    pub fn supports(&self, media_type: &str) -> bool {
        let candidate = match media_type.parse::<MediaRange>() {
            Ok(candidate) => candidate,
            Err(_) => return false,
        };

        if self.type_name == "*" {
            return true;
        }
        if self.subtype_name == "*" {
            return candidate.type_name == self.type_name;
        }
        candidate.type_name == self.type_name
            && candidate.subtype_name == self.subtype_name
            && same_params(&candidate.params, &self.params)
    }
}

fn same_params(a: &[(String, String)], b: &[(String, String)]) -> bool {
    a.len() == b.len() && a.iter().all(|entry| b.contains(entry))
}

impl PartialEq for MediaRange {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.subtype_name == other.subtype_name
            && self.q == other.q
            && same_params(&self.params, &other.params)
    }
}

/// `q` is written with one decimal, so a quality below `0.05` renders as
/// `q=0.0` and reads back as unset.
impl fmt::Display for MediaRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_name, self.subtype_name)?;

        let q = self.clamped_q();
        if q > 0.0 && q < 1.0 {
            write!(f, "; q={:.1}", q)?;
        }

        for (name, value) in &self.params {
            write!(f, "; {}={}", name, value)?;
        }
        Ok(())
    }
}

impl FromStr for MediaRange {
    type Err = Error;

    /// Parse exactly one media range.
    fn from_str(s: &str) -> Result<Self> {
        super::parser::Parser::new(s).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(type_name: &str, subtype_name: &str) -> MediaRange {
        MediaRange::new(type_name, subtype_name).unwrap()
    }

    #[test]
    fn wildcard_type_needs_wildcard_subtype() {
        assert_eq!(
            MediaRange::new("*", "json").unwrap_err(),
            Error::InvalidMediaRange
        );
        assert_eq!(range("*", "*"), MediaRange::any());
    }

    #[test]
    fn render() {
        let cases = vec![
            (range("type", "subtype"), "type/subtype"),
            (range("type", "subtype").with_q(0.5), "type/subtype; q=0.5"),
            (
                range("type", "subtype").with_q(0.5).param("key", "value").unwrap(),
                "type/subtype; q=0.5; key=value",
            ),
            (
                range("type", "subtype").param("key", "value").unwrap(),
                "type/subtype; key=value",
            ),
            (range("type", "subtype").with_q(-1.0), "type/subtype"),
            (range("type", "subtype").with_q(2.0), "type/subtype"),
            (range("type", "subtype").with_q(0.0), "type/subtype"),
        ];
        for (range, expected) in cases {
            assert_eq!(range.to_string(), expected);
        }
    }

    #[test]
    fn quality_renders_with_one_decimal() {
        let r = range("a", "b").with_q(0.04);
        assert_eq!(r.to_string(), "a/b; q=0.0");

        // q=0.0 reads back as unset
        let reparsed: MediaRange = r.to_string().parse().unwrap();
        assert_eq!(reparsed.weight(), range("a", "b").weight());
        assert!(r.weight() < reparsed.weight());
    }

    #[test]
    fn q_parameter_sets_quality() {
        let r = range("text", "html").param("Q", "0.3").unwrap();
        assert_eq!(r.q(), 0.3);
        assert_eq!(r.params().count(), 0);

        assert_eq!(
            range("text", "html").param("q", "high").unwrap_err(),
            Error::QMustBeNumberBetween0And1
        );
    }

    #[test]
    fn repeated_params_overwrite() {
        let r = range("text", "html")
            .param("level", "1")
            .unwrap()
            .param("LEVEL", "2")
            .unwrap();
        assert_eq!(r.params().collect::<Vec<_>>(), vec![("level", "2")]);
        assert_eq!(r.get_param("level"), Some("2"));
    }

    #[test]
    fn param_order_does_not_matter_for_equality() {
        let a = range("a", "b").param("x", "1").unwrap().param("y", "2").unwrap();
        let b = range("a", "b").param("y", "2").unwrap().param("x", "1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn weight_orders_by_quality_then_specificity() {
        let any = MediaRange::any();
        let text = range("text", "*");
        let html = range("text", "html");
        let level = range("text", "html").param("level", "1").unwrap();
        let low = range("text", "html").with_q(0.5);

        assert!(any.weight() < text.weight());
        assert!(text.weight() < html.weight());
        assert!(html.weight() < level.weight());
        assert!(low.weight() < any.weight());
    }

    #[test]
    fn zero_and_out_of_range_quality() {
        assert_eq!(range("a", "b").with_q(0.0).weight(), range("a", "b").weight());
        assert_eq!(range("a", "b").with_q(7.0).weight(), range("a", "b").weight());
        assert_eq!(
            range("a", "b").with_q(f64::NAN).weight(),
            range("a", "b").weight()
        );
    }

    #[test]
    fn supports() {
        let cases = vec![
            (MediaRange::any(), "!@#$!@#$!@#%!@#%!@#$;;;", false),
            (MediaRange::any(), "any/type", true),
            (range("text", "*"), "text/type", true),
            (range("text", "*"), "application/type", false),
            (range("text", "plain"), "application/type", false),
            (range("text", "plain"), "TEXT/Plain", true),
            (range("text", "plain"), "text/plain;key=value", false),
            (
                range("text", "plain").param("key", "value").unwrap(),
                "text/plain;key=value",
                true,
            ),
            (
                range("text", "plain").param("key", "value").unwrap(),
                "text/plain",
                false,
            ),
        ];
        for (range, media_type, expected) in cases {
            assert_eq!(range.supports(media_type), expected, "{} vs {}", range, media_type);
        }
    }

    #[test]
    fn from_str_takes_exactly_one_range() {
        let r: MediaRange = "text/html; level=1; q=0.7".parse().unwrap();
        assert_eq!(r, range("text", "html").param("level", "1").unwrap().with_q(0.7));

        assert_eq!("".parse::<MediaRange>(), Err(Error::InvalidMediaRange));
        assert_eq!(
            "text/html, text/plain".parse::<MediaRange>(),
            Err(Error::InvalidMediaRange)
        );
    }
}
