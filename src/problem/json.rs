use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use super::Problem;
use crate::json::Field;
use crate::Result;

const RECORD: &str = "Problem";

impl Serialize for Problem {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if !self.r#type.is_empty() {
            map.serialize_entry("type", &self.r#type)?;
        }
        if !self.title.is_empty() {
            map.serialize_entry("title", &self.title)?;
        }
        if let Some(status) = self.status {
            map.serialize_entry("status", &status)?;
        }
        if !self.detail.is_empty() {
            map.serialize_entry("detail", &self.detail)?;
        }
        if let Some(instance) = &self.instance {
            map.serialize_entry("instance", instance.as_str())?;
        }
        for (key, value) in self.extensions.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Problem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let mut problem = Problem::new();
        decode(&mut problem, object).map_err(de::Error::custom)?;
        Ok(problem)
    }
}

fn decode(problem: &mut Problem, object: Map<String, Value>) -> Result<()> {
    for (key, value) in object {
        let name = key.to_ascii_lowercase();
        let field = |name| Field::new(RECORD, name);
        match name.as_str() {
            "type" => problem.r#type = field("type").string(value)?,
            "title" => problem.title = field("title").string(value)?,
            "status" => problem.status = Some(field("status").status(value)?),
            "detail" => problem.detail = field("detail").string(value)?,
            "instance" => problem.instance = Some(field("instance").uri(value)?),
            _ => problem.extend(key, value)?,
        }
    }
    Ok(())
}
