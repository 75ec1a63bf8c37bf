//! Unit tests for the platform endpoint descriptions.

use rstest::rstest;

use super::{GITHUB_MEDIA_TYPE, GitHubSchema, GitLabSchema, GiteaSchema, IssueSchema, JSON_MEDIA_TYPE};
use crate::forge::locator::{RepositoryName, RepositoryOwner, join_segments};
use crate::forge::platform::Platform;

fn endpoint(schema: &dyn IssueSchema, base: Option<&str>, owner: &str, repository: &str) -> String {
    let owner_name = RepositoryOwner::new(owner).expect("owner should be valid");
    let repository_name = RepositoryName::new(repository).expect("repository should be valid");
    let api = schema.api_base(base).expect("API base should derive");
    join_segments(&api, &schema.list_issues_segments(&owner_name, &repository_name))
        .expect("segments should join")
        .to_string()
}

#[rstest]
#[case::github_public(&GitHubSchema as &dyn IssueSchema, None, "https://api.github.com/repos/octo/widgets/issues")]
#[case::github_enterprise(
    &GitHubSchema as &dyn IssueSchema,
    Some("https://ghe.example.com"),
    "https://ghe.example.com/api/v3/repos/octo/widgets/issues"
)]
#[case::gitlab_public(
    &GitLabSchema as &dyn IssueSchema,
    Some("https://gitlab.com"),
    "https://gitlab.com/api/v4/projects/octo%2Fwidgets/issues"
)]
#[case::gitlab_self_managed(
    &GitLabSchema as &dyn IssueSchema,
    Some("https://git.example.com/gitlab/"),
    "https://git.example.com/gitlab/api/v4/projects/octo%2Fwidgets/issues"
)]
#[case::gitea_public(&GiteaSchema as &dyn IssueSchema, None, "https://gitea.com/api/v1/repos/octo/widgets/issues")]
#[case::gitea_self_hosted(
    &GiteaSchema as &dyn IssueSchema,
    Some("http://localhost:3000"),
    "http://localhost:3000/api/v1/repos/octo/widgets/issues"
)]
fn list_issues_endpoint(#[case] schema: &dyn IssueSchema, #[case] base: Option<&str>, #[case] expected: &str) {
    assert_eq!(endpoint(schema, base, "octo", "widgets"), expected);
}

#[rstest]
fn gitlab_group_paths_stay_in_one_segment() {
    let url = endpoint(&GitLabSchema, None, "group/subgroup", "project");
    assert_eq!(
        url,
        "https://gitlab.com/api/v4/projects/group%2Fsubgroup%2Fproject/issues"
    );
}

#[rstest]
#[case::github(&GitHubSchema as &dyn IssueSchema, Platform::GitHub, GITHUB_MEDIA_TYPE, "GitHubListIssuesParams")]
#[case::gitlab(&GitLabSchema as &dyn IssueSchema, Platform::GitLab, JSON_MEDIA_TYPE, "GitLabListIssuesParams")]
#[case::gitea(&GiteaSchema as &dyn IssueSchema, Platform::Gitea, JSON_MEDIA_TYPE, "GiteaListIssuesParams")]
fn schema_identity(
    #[case] schema: &dyn IssueSchema,
    #[case] platform: Platform,
    #[case] accept: &str,
    #[case] params_name: &str,
) {
    assert_eq!(schema.platform(), platform);
    assert_eq!(schema.accept(), accept);
    assert_eq!(schema.param_schema().name(), params_name);
}
