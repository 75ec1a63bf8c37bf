//! User accounts referenced from issues and milestones.

use serde::Serialize;
use serde_json::{Map, Value};

use super::list::RecordList;
use super::record::{AliasTable, ExtraFields, FieldReader, deserialize_via_object, expect_object};

/// A user account as reported by any platform.
///
/// GitLab's `username` and `web_url` resolve to `login` and `html_url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserData {
    /// Account name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Platform identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// GraphQL node identifier (GitHub).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Legacy Gravatar identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravatar_id: Option<String>,
    /// API URL of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Browser URL of the profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// Followers API URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers_url: Option<String>,
    /// Following API URL template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following_url: Option<String>,
    /// Gists API URL template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gists_url: Option<String>,
    /// Starred repositories API URL template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred_url: Option<String>,
    /// Subscriptions API URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriptions_url: Option<String>,
    /// Organisations API URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations_url: Option<String>,
    /// Repositories API URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repos_url: Option<String>,
    /// Events API URL template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_url: Option<String>,
    /// Received events API URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_events_url: Option<String>,
    /// Account type, such as `User` or `Bot`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    /// Whether the account is a site administrator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_admin: Option<bool>,
    /// Fields this model does not know about.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl UserData {
    /// `login` ← `username`, `html_url` ← `web_url`.
    pub const ALIASES: AliasTable = AliasTable::new(&[("login", &["username"]), ("html_url", &["web_url"])]);

    /// Builds a user from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when a known field has the wrong type.
    pub fn from_object(object: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut fields = FieldReader::new(object, &Self::ALIASES);
        Ok(Self {
            login: fields.take("login")?,
            id: fields.take("id")?,
            node_id: fields.take("node_id")?,
            avatar_url: fields.take("avatar_url")?,
            gravatar_id: fields.take("gravatar_id")?,
            url: fields.take("url")?,
            html_url: fields.take("html_url")?,
            followers_url: fields.take("followers_url")?,
            following_url: fields.take("following_url")?,
            gists_url: fields.take("gists_url")?,
            starred_url: fields.take("starred_url")?,
            subscriptions_url: fields.take("subscriptions_url")?,
            organizations_url: fields.take("organizations_url")?,
            repos_url: fields.take("repos_url")?,
            events_url: fields.take("events_url")?,
            received_events_url: fields.take("received_events_url")?,
            user_type: fields.take("type")?,
            site_admin: fields.take("site_admin")?,
            extra: fields.into_extra(),
        })
    }

    /// Builds a user from a JSON value that must be an object.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when `value` is not an object or a
    /// known field has the wrong type.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        Self::from_object(expect_object(value, "user")?)
    }

    /// Account name under GitLab's spelling.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.login.as_deref()
    }

    /// Profile URL under GitLab's spelling.
    #[must_use]
    pub fn web_url(&self) -> Option<&str> {
        self.html_url.as_deref()
    }
}

deserialize_via_object!(UserData);

/// Ordered list of users, such as an issue's assignees.
pub type UserDataList = RecordList<UserData>;

impl RecordList<UserData> {
    /// Account names in order, skipping users without one.
    pub fn logins(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(|user| user.login.as_deref())
    }
}
