//! Construction helpers shared by the canonical record types.
//!
//! Records are built from one JSON object in three steps: the record's
//! [`AliasTable`] moves platform-specific keys under their canonical names,
//! a [`FieldReader`] takes each known field out of the object, and whatever
//! remains becomes the record's catch-all `extra` map.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Unknown keys kept on a record for forward compatibility.
pub type ExtraFields = Map<String, Value>;

/// Canonical field name mapped to the source keys accepted in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl AliasTable {
    /// Creates a table from `(canonical, sources)` pairs.
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// The `(canonical, sources)` pairs in declaration order.
    #[must_use]
    pub const fn entries(&self) -> &'static [(&'static str, &'static [&'static str])] {
        self.entries
    }

    /// Source keys accepted for `canonical`, if it is aliased.
    #[must_use]
    pub fn sources_for(&self, canonical: &str) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(name, _)| *name == canonical)
            .map(|(_, sources)| *sources)
    }

    /// Moves aliased keys under their canonical names.
    ///
    /// A canonical key that is already present wins and the alias keys stay
    /// where they are. Otherwise the first present source key, in table
    /// order, is moved under the canonical name.
    pub fn resolve(&self, object: &mut Map<String, Value>) {
        for (canonical, sources) in self.entries {
            if object.contains_key(*canonical) {
                continue;
            }
            let Some(value) = sources.iter().find_map(|source| object.remove(*source)) else {
                continue;
            };
            object.insert((*canonical).to_owned(), value);
        }
    }
}

/// Takes typed fields out of a JSON object, leaving unknown keys behind.
#[derive(Debug, Default)]
pub struct FieldReader {
    object: Map<String, Value>,
}

impl FieldReader {
    /// Wraps `object` after resolving `aliases` on it.
    #[must_use]
    pub fn new(mut object: Map<String, Value>, aliases: &AliasTable) -> Self {
        aliases.resolve(&mut object);
        Self { object }
    }

    /// Removes `key` and deserialises it. Missing keys and `null` give `None`.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` naming `key` when the value has the
    /// wrong shape.
    pub fn take<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, serde_json::Error> {
        match self.take_raw(key) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|error| <serde_json::Error as serde::de::Error>::custom(format!("{key}: {error}"))),
        }
    }

    /// Removes `key` without interpreting it. `null` gives `None`.
    pub fn take_raw(&mut self, key: &str) -> Option<Value> {
        self.object.remove(key).filter(|value| !value.is_null())
    }

    /// Returns the keys nobody claimed.
    #[must_use]
    pub fn into_extra(self) -> ExtraFields {
        self.object
    }
}

/// Interprets `value` as a JSON object or fails with a message naming
/// `record`.
///
/// # Errors
///
/// Returns a `serde_json::Error` when `value` is not an object.
pub fn expect_object(value: Value, record: &str) -> Result<Map<String, Value>, serde_json::Error> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(<serde_json::Error as serde::de::Error>::custom(format!(
            "{record} must be a JSON object, got {other}"
        ))),
    }
}

/// Implements `Deserialize` for a record by collecting a JSON object and
/// handing it to the record's `from_object` constructor.
macro_rules! deserialize_via_object {
    ($record:ty) => {
        impl<'de> serde::Deserialize<'de> for $record {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let object =
                    <serde_json::Map<String, serde_json::Value> as serde::Deserialize>::deserialize(deserializer)?;
                Self::from_object(object).map_err(<D::Error as serde::de::Error>::custom)
            }
        }
    };
}

pub(crate) use deserialize_via_object;
