use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use super::Link;
use crate::json::Field;
use crate::Result;

const RECORD: &str = "Link";

impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("href", self.href.as_str())?;
        for (name, value) in self.attributes() {
            map.serialize_entry(name, value)?;
        }
        for (key, value) in self.extensions.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Link {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let href = object
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("href"))
            .map(|(_, value)| value.clone())
            .ok_or_else(|| de::Error::missing_field("href"))?;
        let href = Field::new(RECORD, "href")
            .uri(href)
            .map_err(de::Error::custom)?;

        let mut link = Link::new(href);
        decode(&mut link, object).map_err(de::Error::custom)?;
        Ok(link)
    }
}

fn decode(link: &mut Link, object: Map<String, Value>) -> Result<()> {
    for (key, value) in object {
        let name = key.to_ascii_lowercase();
        let field = |name| Field::new(RECORD, name);
        match name.as_str() {
            "href" => {}
            "rel" => link.rel = field("rel").string(value)?,
            "hreflang" => link.hreflang = field("hreflang").string(value)?,
            "media" => link.media = field("media").string(value)?,
            "title" => link.title = field("title").string(value)?,
            "title*" => link.title_star = field("title*").string(value)?,
            "type" => link.r#type = field("type").string(value)?,
            _ => link.extend(key, value)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use http_types::Url;
    use serde_json::json;

    fn link(href: &str) -> Link {
        Link::new(Url::parse(href).unwrap())
    }

    #[test]
    fn serializes_set_fields_only() {
        let mut l = link("https://www.google.com");
        l.rel = "next".into();
        l.title_star = "t".into();
        assert_eq!(
            serde_json::to_value(&l).unwrap(),
            json!({"href": "https://www.google.com/", "rel": "next", "title*": "t"})
        );
    }

    #[test]
    fn serializes_extensions_in_order() {
        let mut l = link("https://x/");
        l.extend("z", json!({"nested": [1, 2]})).unwrap();
        l.extend("a", true).unwrap();
        assert_eq!(
            serde_json::to_string(&l).unwrap(),
            r#"{"href":"https://x/","z":{"nested":[1,2]},"a":true}"#
        );
    }

    #[test]
    fn deserializes_reserved_fields_and_extensions() {
        let l: Link = serde_json::from_str(
            r#"{"HREF": "https://x/", "rel": "next", "Title*": "t", "b": 1, "a": "2"}"#,
        )
        .unwrap();
        assert_eq!(l.href.as_str(), "https://x/");
        assert_eq!(l.rel, "next");
        assert_eq!(l.title_star, "t");
        assert_eq!(l.extension_keys(), ["b", "a"]);
        assert_eq!(l.extension("b"), Some(&json!(1)));
    }

    #[test]
    fn round_trips_through_json() {
        let mut l = link("https://x/");
        l.media = "screen".into();
        l.extend("ext", "v").unwrap();
        let json = serde_json::to_string(&l).unwrap();
        assert_eq!(serde_json::from_str::<Link>(&json).unwrap(), l);
    }

    #[test]
    fn relative_href() {
        let l: Link = serde_json::from_str(r#"{"href": "/page/2", "rel": "next"}"#).unwrap();
        assert!(l.href.is_relative());
        assert_eq!(
            serde_json::to_string(&l).unwrap(),
            r#"{"href":"/page/2","rel":"next"}"#
        );
    }

    #[test]
    fn wrong_kinds_fail() {
        let err = serde_json::from_str::<Link>(r#"{"href": "https://x/", "rel": 7}"#).unwrap_err();
        assert!(err.to_string().contains("Link.rel must be a string"));

        let err = serde_json::from_str::<Link>(r#"{"href": "http://[::1"}"#).unwrap_err();
        assert!(err.to_string().contains("Link.href must be a uri"));

        let err = serde_json::from_str::<Link>(r#"{"rel": "next"}"#).unwrap_err();
        assert!(err.to_string().contains("href"));
    }

    #[test]
    fn decode_reports_mismatches() {
        let mut l = link("https://x/");
        let object = json!({"type": ["a"]}).as_object().cloned().unwrap();
        assert_eq!(
            decode(&mut l, object),
            Err(Error::FieldKindMismatch {
                record: "Link",
                field: "type",
                expected: "string",
            })
        );
    }
}
