//! Pull request marker carried by issues that are pull requests.

use serde::Serialize;
use serde_json::{Map, Value};

use super::record::{AliasTable, ExtraFields, FieldReader, deserialize_via_object};

/// Links to the pull request behind an issue. Its presence is what marks an
/// issue as a pull request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PullRequestData {
    /// API URL of the pull request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Browser URL of the pull request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// Diff download URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_url: Option<String>,
    /// Patch download URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_url: Option<String>,
    /// Fields this model does not know about.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl PullRequestData {
    const ALIASES: AliasTable = AliasTable::new(&[]);

    /// Builds the marker from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when a known field has the wrong type.
    pub fn from_object(object: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut fields = FieldReader::new(object, &Self::ALIASES);
        Ok(Self {
            url: fields.take("url")?,
            html_url: fields.take("html_url")?,
            diff_url: fields.take("diff_url")?,
            patch_url: fields.take("patch_url")?,
            extra: fields.into_extra(),
        })
    }
}

deserialize_via_object!(PullRequestData);
