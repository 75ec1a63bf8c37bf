//! Gitea.

use url::Url;

use super::{IssueSchema, repos_segments};
use crate::forge::error::IssueError;
use crate::forge::locator::{RepositoryName, RepositoryOwner, derive_api_base};
use crate::forge::params::{ParamSchema, ValidatedParams, WireParams};
use crate::forge::platform::Platform;
use crate::forge::transform::{GiteaTransform, ParamTransform};

const PUBLIC_HOST: &str = "gitea.com";
const PUBLIC_API: &str = "https://gitea.com/api/v1";
const API_PATH: &str = "api/v1";

/// Gitea repository issues endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GiteaSchema;

impl IssueSchema for GiteaSchema {
    fn platform(&self) -> Platform {
        Platform::Gitea
    }

    fn param_schema(&self) -> ParamSchema {
        ParamSchema::gitea()
    }

    fn transform(&self, params: &ValidatedParams) -> WireParams {
        GiteaTransform.transform(params)
    }

    fn list_issues_segments(&self, owner: &RepositoryOwner, repository: &RepositoryName) -> Vec<String> {
        repos_segments(owner, repository)
    }

    fn api_base(&self, base_url: Option<&str>) -> Result<Url, IssueError> {
        derive_api_base(base_url, PUBLIC_HOST, PUBLIC_API, API_PATH)
    }
}
