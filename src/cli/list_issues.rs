//! Issue listing operation.
//!
//! Resolves the platform, token and repository from configuration, performs
//! one list request and writes either a summary or the raw JSON body.

use std::io::Write;
use std::time::Duration;

use issuegate::forge::Transport;
use issuegate::{
    AccessToken, GitHubSchema, GitLabSchema, GiteaSchema, IssueClient, IssueError, IssueSchema,
    IssuegateConfig, ListIssuesOptions, Platform, ReqwestTransport,
};

use super::output::{write_issue_summary, write_raw};

/// Lists issues for the configured repository over HTTP.
///
/// # Errors
///
/// Returns [`IssueError`] when configuration is incomplete, the options fail
/// validation, the request fails, or output cannot be written.
pub fn run<W: Write>(config: &IssuegateConfig, writer: &mut W) -> Result<(), IssueError> {
    run_with_transport(config, ReqwestTransport::new, writer)
}

/// Lists issues through the transport produced by `build_transport`.
///
/// The builder receives the configured request timeout.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_transport<T, F, W>(
    config: &IssuegateConfig,
    build_transport: F,
    writer: &mut W,
) -> Result<(), IssueError>
where
    T: Transport,
    F: FnOnce(Duration) -> Result<T, IssueError>,
    W: Write,
{
    let platform = config.resolve_platform()?;
    let (owner, repo) = config.require_repository_info()?;
    let token = AccessToken::new(config.resolve_token(platform)?)?;
    let options = config.list_options()?;
    let client_options = config.client_options();
    let transport = build_transport(client_options.timeout)?;

    let request = ListRequest {
        owner,
        repo,
        options: &options,
        raw: config.raw,
    };

    match platform {
        Platform::GitHub => request.send(
            &IssueClient::new(transport, GitHubSchema, &token, &client_options)?,
            writer,
        ),
        Platform::GitLab => request.send(
            &IssueClient::new(transport, GitLabSchema, &token, &client_options)?,
            writer,
        ),
        Platform::Gitea => request.send(
            &IssueClient::new(transport, GiteaSchema, &token, &client_options)?,
            writer,
        ),
        Platform::Unknown => Err(IssueError::Configuration {
            message: "a concrete platform is required (github, gitlab or gitea)".to_owned(),
        }),
    }
}

struct ListRequest<'a> {
    owner: &'a str,
    repo: &'a str,
    options: &'a ListIssuesOptions,
    raw: bool,
}

impl ListRequest<'_> {
    fn send<T: Transport, S: IssueSchema, W: Write>(
        &self,
        client: &IssueClient<T, S>,
        writer: &mut W,
    ) -> Result<(), IssueError> {
        if self.raw {
            let body = client.list_issues_raw(self.owner, self.repo, self.options)?;
            return write_raw(writer, &body);
        }

        let list = client.list_issues(self.owner, self.repo, self.options)?;
        tracing::info!(
            platform = %client.schema().platform(),
            count = list.len(),
            page = list.page,
            "listed issues"
        );
        write_issue_summary(writer, &list, self.owner, self.repo)
    }
}
