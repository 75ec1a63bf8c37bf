//! Canonical, platform-neutral records built from issue list responses.
//!
//! Each record keeps its known fields typed and every other key in an
//! `extra` map that is written back out on serialisation. Platform-specific
//! spellings (GitLab's `iid`, `web_url`, `description`, `author` and so on)
//! are resolved through per-record [`AliasTable`]s when the record is built.

mod issue;
mod label;
mod list;
mod milestone;
mod pull_request;
mod record;
mod user;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use issue::{IssueData, IssueDataList};
pub use label::{LabelData, LabelDataList};
pub use list::RecordList;
pub use milestone::MilestoneData;
pub use pull_request::PullRequestData;
pub use record::{AliasTable, ExtraFields, FieldReader};
pub use user::{UserData, UserDataList};

#[cfg(test)]
mod tests;
