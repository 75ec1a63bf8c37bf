//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.issuegate.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `ISSUEGATE_*`, with `GITHUB_TOKEN`,
//!    `GITLAB_TOKEN` or `GITEA_TOKEN` as token fallbacks
//! 4. **Command-line arguments** – `--owner`/`-o`, `--repo`/`-r` and so on
//!
//! # Configuration File
//!
//! ```toml
//! platform = "gitlab"
//! base_url = "https://gitlab.example.com"
//! owner = "group"
//! repo = "project"
//! state = "open"
//! labels = "bug,ui"
//! per_page = 50
//! params = '{"issue_type": "incident"}'
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::forge::params::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::forge::{ClientOptions, IssueError, ListIssuesOptions, ParamBag, Platform};

const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use issuegate::IssuegateConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = IssuegateConfig::load().expect("failed to load configuration");
/// let platform = config.resolve_platform().expect("platform should be known");
/// let token = config.resolve_token(platform).expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "ISSUEGATE",
    discovery(
        dotfile_name = ".issuegate.toml",
        config_file_name = "issuegate.toml",
        app_name = "issuegate"
    )
)]
pub struct IssuegateConfig {
    /// Hosting platform: `github`, `gitlab` or `gitea`. Defaults to GitHub.
    #[ortho_config(cli_short = 'p')]
    pub platform: Option<String>,

    /// Access token sent as a bearer token.
    ///
    /// Falls back to `GITHUB_TOKEN`, `GITLAB_TOKEN` or `GITEA_TOKEN`
    /// depending on the platform.
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Web base URL of a self-hosted instance.
    #[ortho_config(cli_short = 'b')]
    pub base_url: Option<String>,

    /// Explicit API base URL, overriding the one derived from `base_url`.
    #[ortho_config(cli_short = 'A')]
    pub api_url: Option<String>,

    /// Repository owner, group or organisation.
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository or project name.
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Issue state filter: `open`, `closed` or `all`.
    #[ortho_config(cli_short = 's')]
    pub state: Option<String>,

    /// Assignee filter; `*` for any, `none` for unassigned.
    #[ortho_config(cli_short = 'a')]
    pub assignee: Option<String>,

    /// Milestone filter; `*` for any, `none` for no milestone.
    #[ortho_config(cli_short = 'm')]
    pub milestone: Option<String>,

    /// Comma-separated label names.
    #[ortho_config(cli_short = 'l')]
    pub labels: Option<String>,

    /// Sort field.
    #[ortho_config()]
    pub sort: Option<String>,

    /// Sort direction: `asc` or `desc`.
    #[ortho_config()]
    pub direction: Option<String>,

    /// Only issues updated at or after this ISO-8601 timestamp.
    #[ortho_config()]
    pub since: Option<String>,

    /// Results per page (1 to 100).
    #[ortho_config()]
    pub per_page: u32,

    /// Page number, starting at 1.
    #[ortho_config()]
    pub page: u32,

    /// Platform-specific options as a JSON object, such as
    /// `{"issue_type": "incident"}` for GitLab.
    #[ortho_config()]
    pub params: Option<String>,

    /// Prints the platform's JSON response instead of a summary.
    #[ortho_config()]
    pub raw: bool,

    /// Request timeout in seconds.
    #[ortho_config()]
    pub timeout_seconds: u64,
}

impl Default for IssuegateConfig {
    fn default() -> Self {
        Self {
            platform: None,
            token: None,
            base_url: None,
            api_url: None,
            owner: None,
            repo: None,
            state: None,
            assignee: None,
            milestone: None,
            labels: None,
            sort: None,
            direction: None,
            since: None,
            per_page: DEFAULT_PER_PAGE,
            page: DEFAULT_PAGE,
            params: None,
            raw: false,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl IssuegateConfig {
    /// Parses the configured platform, defaulting to GitHub.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::Configuration`] for an unrecognised platform.
    pub fn resolve_platform(&self) -> Result<Platform, IssueError> {
        self.platform
            .as_deref()
            .map_or(Ok(Platform::GitHub), str::parse)
    }

    /// Resolves the token from configuration or the platform's conventional
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::MissingToken`] when no source provides a value.
    pub fn resolve_token(&self, platform: Platform) -> Result<String, IssueError> {
        self.token
            .clone()
            .or_else(|| token_variable(platform).and_then(|name| env::var(name).ok()))
            .filter(|token| !token.trim().is_empty())
            .ok_or(IssueError::MissingToken)
    }

    /// Returns owner and repository if both are configured.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::Configuration`] when either is missing.
    pub fn require_repository_info(&self) -> Result<(&str, &str), IssueError> {
        match (&self.owner, &self.repo) {
            (Some(owner), Some(repo)) => Ok((owner.as_str(), repo.as_str())),
            (None, _) => Err(IssueError::Configuration {
                message: "repository owner is required (use --owner or -o)".to_owned(),
            }),
            (_, None) => Err(IssueError::Configuration {
                message: "repository name is required (use --repo or -r)".to_owned(),
            }),
        }
    }

    /// Builds list-issues options from the configured filters.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::Configuration`] when `params` is not a JSON
    /// object.
    pub fn list_options(&self) -> Result<ListIssuesOptions, IssueError> {
        Ok(ListIssuesOptions {
            state: self.state.clone(),
            assignee: self.assignee.clone(),
            milestone: self.milestone.clone(),
            labels: self.labels.iter().cloned().collect(),
            sort: self.sort.clone(),
            direction: self.direction.clone(),
            since: self.since.clone(),
            per_page: self.per_page,
            page: self.page,
            extra: self.extra_params()?,
        })
    }

    /// Builds client options from the configured URLs and timeout.
    #[must_use]
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone(),
            api_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
            ..ClientOptions::default()
        }
    }

    fn extra_params(&self) -> Result<ParamBag, IssueError> {
        let Some(text) = self.params.as_deref() else {
            return Ok(ParamBag::new());
        };
        serde_json::from_str(text).map_err(|error| IssueError::Configuration {
            message: format!("params must be a JSON object: {error}"),
        })
    }
}

const fn token_variable(platform: Platform) -> Option<&'static str> {
    match platform {
        Platform::GitHub => Some("GITHUB_TOKEN"),
        Platform::GitLab => Some("GITLAB_TOKEN"),
        Platform::Gitea => Some("GITEA_TOKEN"),
        Platform::Unknown => None,
    }
}

#[cfg(test)]
mod tests;
