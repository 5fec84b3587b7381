use std::collections::HashMap;

use serde_json::Value;

use crate::{Error, Result};

/// Caller-defined fields of a record, kept in insertion order and guarded
/// against the record's reserved field names.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Extensions {
    /// Reserved names, lowercase.
    reserved: &'static [&'static str],
    keys: Vec<String>,
    values: HashMap<String, Value>,
}

impl Extensions {
    pub(crate) fn new(reserved: &'static [&'static str]) -> Self {
        Self {
            reserved,
            keys: Vec::new(),
            values: HashMap::new(),
        }
    }

    pub(crate) fn is_reserved(&self, key: &str) -> bool {
        self.reserved.iter().any(|name| name.eq_ignore_ascii_case(key))
    }

    /// Insert, overwrite, or (with `Value::Null`) remove an extension.
    ///
    /// A new key goes to the end of the order; overwriting keeps its place.
    pub(crate) fn extend(&mut self, key: String, value: Value) -> Result<()> {
        if self.is_reserved(&key) {
            return Err(Error::ReservedKey(key));
        }

        if value.is_null() {
            if self.values.remove(&key).is_some() {
                self.keys.retain(|k| *k != key);
            }
            return Ok(());
        }

        if !self.values.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.values.insert(key, value);
        Ok(())
    }

    pub(crate) fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub(crate) fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Entries in insertion order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.keys
            .iter()
            .filter_map(move |key| self.values.get(key).map(|value| (key.as_str(), value)))
    }
}
