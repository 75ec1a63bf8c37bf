//! Per-platform descriptions of the list-issues endpoint.
//!
//! An [`IssueSchema`] bundles what differs between platforms: the parameter
//! schema and transform, the endpoint path, the default API location and the
//! `Accept` header. The client composes one schema with one transport.

mod gitea;
mod github;
mod gitlab;

pub use gitea::GiteaSchema;
pub use github::{GITHUB_MEDIA_TYPE, GitHubSchema};
pub use gitlab::GitLabSchema;

use url::Url;

use super::error::IssueError;
use super::locator::{RepositoryName, RepositoryOwner};
use super::params::{ParamSchema, ValidatedParams, WireParams};
use super::platform::Platform;

/// `Accept` value for platforms that serve plain JSON.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Platform-specific pieces of the list-issues call.
pub trait IssueSchema: Send + Sync {
    /// Platform tag stamped on normalised issues.
    fn platform(&self) -> Platform;

    /// Schema the caller's options are validated against.
    fn param_schema(&self) -> ParamSchema;

    /// Rewrites validated options into the platform's query vocabulary.
    fn transform(&self, params: &ValidatedParams) -> WireParams;

    /// Path segments of the list-issues endpoint below the API base.
    fn list_issues_segments(&self, owner: &RepositoryOwner, repository: &RepositoryName) -> Vec<String>;

    /// API base for an optional web base URL.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::InvalidUrl`] when `base_url` cannot be parsed.
    fn api_base(&self, base_url: Option<&str>) -> Result<Url, IssueError>;

    /// `Accept` header value sent with every request.
    fn accept(&self) -> &'static str {
        JSON_MEDIA_TYPE
    }
}

/// Segments shared by GitHub and Gitea: `repos/{owner}/{repository}/issues`.
fn repos_segments(owner: &RepositoryOwner, repository: &RepositoryName) -> Vec<String> {
    vec![
        "repos".to_owned(),
        owner.as_str().to_owned(),
        repository.as_str().to_owned(),
        "issues".to_owned(),
    ]
}

#[cfg(test)]
mod tests;
