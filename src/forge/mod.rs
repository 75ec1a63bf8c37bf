//! Issue listing across GitHub, GitLab and Gitea.
//!
//! A call flows through four stages: the caller's [`ListIssuesOptions`] are
//! validated against the platform's [`ParamSchema`], rewritten into the
//! platform's query vocabulary, sent as one GET through a [`Transport`], and
//! the JSON response is normalised into canonical [`IssueData`] records.

pub mod client;
pub mod error;
pub mod locator;
pub mod models;
pub mod normalize;
pub mod params;
pub mod platform;
pub mod platforms;
pub mod transform;
pub mod transport;

pub use client::{ClientOptions, IssueClient};
pub use error::{FieldError, FieldErrorKind, IssueError, ValidationReport};
pub use locator::{AccessToken, RepositoryName, RepositoryOwner};
pub use models::{
    IssueData, IssueDataList, LabelData, LabelDataList, MilestoneData, PullRequestData, UserData,
    UserDataList,
};
pub use normalize::normalize_issues;
pub use params::{ListIssuesOptions, ParamBag, ParamSchema, ValidatedParams, WireParams};
pub use platform::Platform;
pub use platforms::{GitHubSchema, GitLabSchema, GiteaSchema, IssueSchema};
pub use transform::{GitLabTransform, GiteaTransform, IdentityTransform, ParamTransform};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
