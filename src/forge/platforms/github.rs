//! GitHub and GitHub Enterprise.

use url::Url;

use super::{IssueSchema, repos_segments};
use crate::forge::error::IssueError;
use crate::forge::locator::{RepositoryName, RepositoryOwner, derive_api_base};
use crate::forge::params::{ParamSchema, ValidatedParams, WireParams};
use crate::forge::platform::Platform;
use crate::forge::transform::{IdentityTransform, ParamTransform};

const PUBLIC_HOST: &str = "github.com";
const PUBLIC_API: &str = "https://api.github.com";
const ENTERPRISE_API_PATH: &str = "api/v3";

/// GitHub's REST media type.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// GitHub list-issues endpoint. Parameter names already match GitHub's, so
/// the transform is the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GitHubSchema;

impl IssueSchema for GitHubSchema {
    fn platform(&self) -> Platform {
        Platform::GitHub
    }

    fn param_schema(&self) -> ParamSchema {
        ParamSchema::github()
    }

    fn transform(&self, params: &ValidatedParams) -> WireParams {
        IdentityTransform.transform(params)
    }

    fn list_issues_segments(&self, owner: &RepositoryOwner, repository: &RepositoryName) -> Vec<String> {
        repos_segments(owner, repository)
    }

    fn api_base(&self, base_url: Option<&str>) -> Result<Url, IssueError> {
        derive_api_base(base_url, PUBLIC_HOST, PUBLIC_API, ENTERPRISE_API_PATH)
    }

    fn accept(&self) -> &'static str {
        GITHUB_MEDIA_TYPE
    }
}
