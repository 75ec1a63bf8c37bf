//! GitLab.com and self-managed GitLab.

use url::Url;

use super::IssueSchema;
use crate::forge::error::IssueError;
use crate::forge::locator::{RepositoryName, RepositoryOwner, derive_api_base};
use crate::forge::params::{ParamSchema, ValidatedParams, WireParams};
use crate::forge::platform::Platform;
use crate::forge::transform::{GitLabTransform, ParamTransform};

const PUBLIC_HOST: &str = "gitlab.com";
const PUBLIC_API: &str = "https://gitlab.com/api/v4";
const API_PATH: &str = "api/v4";

/// GitLab project issues endpoint.
///
/// Projects are addressed by their full path as one URL-encoded segment, so
/// `group/project` is requested as `projects/group%2Fproject/issues`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GitLabSchema;

impl IssueSchema for GitLabSchema {
    fn platform(&self) -> Platform {
        Platform::GitLab
    }

    fn param_schema(&self) -> ParamSchema {
        ParamSchema::gitlab()
    }

    fn transform(&self, params: &ValidatedParams) -> WireParams {
        GitLabTransform.transform(params)
    }

    fn list_issues_segments(&self, owner: &RepositoryOwner, repository: &RepositoryName) -> Vec<String> {
        vec![
            "projects".to_owned(),
            format!("{}/{}", owner.as_str(), repository.as_str()),
            "issues".to_owned(),
        ]
    }

    fn api_base(&self, base_url: Option<&str>) -> Result<Url, IssueError> {
        derive_api_base(base_url, PUBLIC_HOST, PUBLIC_API, API_PATH)
    }
}
