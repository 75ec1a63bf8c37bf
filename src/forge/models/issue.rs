//! Canonical issue records and the per-page issue list.

use serde::Serialize;
use serde_json::{Map, Value};

use super::label::LabelDataList;
use super::milestone::MilestoneData;
use super::pull_request::PullRequestData;
use super::record::{AliasTable, ExtraFields, FieldReader, deserialize_via_object, expect_object};
use super::user::{UserData, UserDataList};
use crate::forge::platform::Platform;

/// One issue (or pull request) in the platform-neutral shape.
///
/// GitLab spellings resolve to the GitHub-style names at construction time
/// and remain readable through the alias accessors, so `iid()` always agrees
/// with `number` and `description()` with `body`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssueData {
    /// Platform the issue came from.
    pub platform: Platform,
    /// Platform identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// GraphQL node identifier (GitHub).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// API URL of the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// API URL of the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    /// Labels API URL template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels_url: Option<String>,
    /// Comments API URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_url: Option<String>,
    /// Events API URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_url: Option<String>,
    /// Browser URL of the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// Repository-scoped issue number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    /// State in the platform's own vocabulary (`open`, `opened`, `closed`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Issue title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Issue body in Markdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserData>,
    /// Attached labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LabelDataList>,
    /// Primary assignee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<UserData>,
    /// Every assignee. `None` when the platform omitted the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<UserDataList>,
    /// Milestone the issue is scheduled against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<MilestoneData>,
    /// Whether conversation is locked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Reason given for locking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_lock_reason: Option<String>,
    /// Comment count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
    /// Present when the issue is a pull request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestData>,
    /// Creation timestamp (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Closing timestamp (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<String>,
    /// Account that closed the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_by: Option<UserData>,
    /// Author's relationship to the repository (GitHub).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_association: Option<String>,
    /// Why the issue reached its state (GitHub).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<String>,
    /// Fields this model does not know about.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl IssueData {
    /// GitLab spellings accepted for the canonical issue fields.
    pub const ALIASES: AliasTable = AliasTable::new(&[
        ("html_url", &["web_url"]),
        ("number", &["iid"]),
        ("body", &["description"]),
        ("user", &["author"]),
        ("comments", &["user_notes_count"]),
    ]);

    /// Builds an issue from one JSON object.
    ///
    /// A `platform` key in the object is honoured; otherwise the issue is
    /// tagged [`Platform::Unknown`] until the caller sets it.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when a known field, or a field of a
    /// nested record, has the wrong type.
    pub fn from_object(object: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut fields = FieldReader::new(object, &Self::ALIASES);
        Ok(Self {
            platform: fields.take("platform")?.unwrap_or_default(),
            id: fields.take("id")?,
            node_id: fields.take("node_id")?,
            url: fields.take("url")?,
            repository_url: fields.take("repository_url")?,
            labels_url: fields.take("labels_url")?,
            comments_url: fields.take("comments_url")?,
            events_url: fields.take("events_url")?,
            html_url: fields.take("html_url")?,
            number: fields.take("number")?,
            state: fields.take("state")?,
            title: fields.take("title")?,
            body: fields.take("body")?,
            user: fields.take("user")?,
            labels: LabelDataList::from_value(fields.take_raw("labels"))?,
            assignee: fields.take("assignee")?,
            assignees: fields.take("assignees")?,
            milestone: fields.take("milestone")?,
            locked: fields.take("locked")?,
            active_lock_reason: fields.take("active_lock_reason")?,
            comments: fields.take("comments")?,
            pull_request: fields.take("pull_request")?,
            created_at: fields.take("created_at")?,
            updated_at: fields.take("updated_at")?,
            closed_at: fields.take("closed_at")?,
            closed_by: fields.take("closed_by")?,
            author_association: fields.take("author_association")?,
            state_reason: fields.take("state_reason")?,
            extra: fields.into_extra(),
        })
    }

    /// Builds an issue from a JSON value that must be an object.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when `value` is not an object or a
    /// known field has the wrong type.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        Self::from_object(expect_object(value, "issue")?)
    }

    /// Returns the same issue tagged with `platform`.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Issue number under GitLab's spelling.
    #[must_use]
    pub const fn iid(&self) -> Option<u64> {
        self.number
    }

    /// Browser URL under GitLab's spelling.
    #[must_use]
    pub fn web_url(&self) -> Option<&str> {
        self.html_url.as_deref()
    }

    /// Body under GitLab's spelling.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Author under GitLab's spelling.
    #[must_use]
    pub const fn author(&self) -> Option<&UserData> {
        self.user.as_ref()
    }

    /// Comment count under GitLab's spelling.
    #[must_use]
    pub const fn user_notes_count(&self) -> Option<u64> {
        self.comments
    }

    /// Returns true when the item is a pull request rather than an issue.
    #[must_use]
    pub const fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    /// Label names in order; empty when the issue carried no labels.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().flat_map(LabelDataList::names)
    }
}

deserialize_via_object!(IssueData);

/// One page of issues plus the pagination that was requested.
///
/// `page` and `per_page` echo the request; they are not computed from the
/// response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssueDataList {
    /// Issues in response order.
    pub issues: Vec<IssueData>,
    /// Requested page number.
    pub page: u32,
    /// Requested page size.
    pub per_page: u32,
}

impl IssueDataList {
    /// Wraps one page of issues.
    #[must_use]
    pub const fn new(issues: Vec<IssueData>, page: u32, per_page: u32) -> Self {
        Self {
            issues,
            page,
            per_page,
        }
    }

    /// Number of issues on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true when the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issue at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&IssueData> {
        self.issues.get(index)
    }

    /// Iterates over the issues in order.
    pub fn iter(&self) -> std::slice::Iter<'_, IssueData> {
        self.issues.iter()
    }
}

impl IntoIterator for IssueDataList {
    type Item = IssueData;
    type IntoIter = std::vec::IntoIter<IssueData>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'list> IntoIterator for &'list IssueDataList {
    type Item = &'list IssueData;
    type IntoIter = std::slice::Iter<'list, IssueData>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}
