//! Milestones.

use serde::Serialize;
use serde_json::{Map, Value};

use super::record::{AliasTable, ExtraFields, FieldReader, deserialize_via_object, expect_object};
use super::user::UserData;

/// A milestone an issue is scheduled against.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MilestoneData {
    /// API URL of the milestone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Browser URL of the milestone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// Labels API URL for the milestone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels_url: Option<String>,
    /// Platform identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// GraphQL node identifier (GitHub).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Repository-scoped milestone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    /// `open`, `closed` or `active`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Milestone title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Milestone description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Account that created the milestone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<UserData>,
    /// Number of open issues.
    pub open_issues: u64,
    /// Number of closed issues.
    pub closed_issues: u64,
    /// Creation timestamp (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Closing timestamp (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<String>,
    /// Due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<String>,
    /// Fields this model does not know about.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl MilestoneData {
    /// `html_url` ← `web_url`, `number` ← `iid`, `due_on` ← `due_date`.
    pub const ALIASES: AliasTable = AliasTable::new(&[
        ("html_url", &["web_url"]),
        ("number", &["iid"]),
        ("due_on", &["due_date"]),
    ]);

    /// Builds a milestone from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when a known field has the wrong type.
    pub fn from_object(object: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut fields = FieldReader::new(object, &Self::ALIASES);
        Ok(Self {
            url: fields.take("url")?,
            html_url: fields.take("html_url")?,
            labels_url: fields.take("labels_url")?,
            id: fields.take("id")?,
            node_id: fields.take("node_id")?,
            number: fields.take("number")?,
            state: fields.take("state")?,
            title: fields.take("title")?,
            description: fields.take("description")?,
            creator: fields.take("creator")?,
            open_issues: fields.take("open_issues")?.unwrap_or_default(),
            closed_issues: fields.take("closed_issues")?.unwrap_or_default(),
            created_at: fields.take("created_at")?,
            updated_at: fields.take("updated_at")?,
            closed_at: fields.take("closed_at")?,
            due_on: fields.take("due_on")?,
            extra: fields.into_extra(),
        })
    }

    /// Builds a milestone from a JSON value that must be an object.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when `value` is not an object or a
    /// known field has the wrong type.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        Self::from_object(expect_object(value, "milestone")?)
    }

    /// Milestone number under GitLab's spelling.
    #[must_use]
    pub const fn iid(&self) -> Option<u64> {
        self.number
    }

    /// Browser URL under GitLab's spelling.
    #[must_use]
    pub fn web_url(&self) -> Option<&str> {
        self.html_url.as_deref()
    }

    /// Due date under GitLab's spelling.
    #[must_use]
    pub fn due_date(&self) -> Option<&str> {
        self.due_on.as_deref()
    }
}

deserialize_via_object!(MilestoneData);
