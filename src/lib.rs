//! Issuegate library crate for listing repository issues on GitHub, GitLab
//! and Gitea.
//!
//! The library validates platform-neutral query options, maps them onto each
//! platform's query vocabulary, performs a single blocking request, and
//! normalises the response into one canonical issue model.

pub mod config;
pub mod forge;

pub use config::IssuegateConfig;
pub use forge::{
    AccessToken, ClientOptions, GitHubSchema, GitLabSchema, GiteaSchema, IssueClient, IssueData,
    IssueDataList, IssueError, IssueSchema, ListIssuesOptions, Platform, ReqwestTransport,
};
