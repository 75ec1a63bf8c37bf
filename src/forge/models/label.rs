//! Issue labels and the label normalisation rule.

use serde::Serialize;
use serde_json::{Map, Value};

use super::list::RecordList;
use super::record::{AliasTable, ExtraFields, FieldReader, deserialize_via_object, expect_object};

/// A label attached to an issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabelData {
    /// Platform identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// GraphQL node identifier (GitHub).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// API URL of the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Label name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Label description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Hex colour, with or without a leading `#` depending on the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether this is one of the repository's default labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    /// Fields this model does not know about.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl LabelData {
    /// Labels have no alias keys.
    pub const ALIASES: AliasTable = AliasTable::new(&[]);

    /// A label carrying only its name, as produced for platforms that list
    /// labels as plain strings.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Builds a label from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when a known field has the wrong type.
    pub fn from_object(object: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut fields = FieldReader::new(object, &Self::ALIASES);
        Ok(Self {
            id: fields.take("id")?,
            node_id: fields.take("node_id")?,
            url: fields.take("url")?,
            name: fields.take("name")?,
            description: fields.take("description")?,
            color: fields.take("color")?,
            default: fields.take("default")?,
            extra: fields.into_extra(),
        })
    }

    /// Builds a label from a JSON value that must be an object.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when `value` is not an object or a
    /// known field has the wrong type.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        Self::from_object(expect_object(value, "label")?)
    }
}

deserialize_via_object!(LabelData);

/// Labels on one issue, in source order.
pub type LabelDataList = RecordList<LabelData>;

impl RecordList<LabelData> {
    /// Applies the label rule to a raw `labels` value.
    ///
    /// `null` and non-array values give `None`. Array items that are objects
    /// become full labels, strings become name-only labels, and anything else
    /// is skipped.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when an object item has a known field
    /// of the wrong type.
    pub fn from_value(value: Option<Value>) -> Result<Option<Self>, serde_json::Error> {
        let items = match value {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Array(items)) => items,
            Some(other) => {
                tracing::debug!("ignoring labels value that is not a list: {other}");
                return Ok(None);
            }
        };

        let mut labels = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Object(object) => labels.push(LabelData::from_object(object)?),
                Value::String(name) => labels.push(LabelData::named(name)),
                other => tracing::warn!("skipping label entry that is neither a name nor an object: {other}"),
            }
        }
        Ok(Some(Self::new(labels)))
    }

    /// Label names in order, skipping labels without one.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(|label| label.name.as_deref())
    }
}
