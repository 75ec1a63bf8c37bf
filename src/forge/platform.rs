//! Source platform tag carried on every normalised record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::IssueError;

/// Git hosting platform an issue was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// github.com or GitHub Enterprise.
    GitHub,
    /// gitlab.com or a self-managed GitLab.
    GitLab,
    /// gitea.com or a self-hosted Gitea.
    Gitea,
    /// Records built without a known source.
    #[default]
    Unknown,
}

impl Platform {
    /// Lowercase platform name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
            Self::Gitea => "gitea",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = IssueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "github" => Ok(Self::GitHub),
            "gitlab" => Ok(Self::GitLab),
            "gitea" => Ok(Self::Gitea),
            other => Err(IssueError::Configuration {
                message: format!("unsupported platform `{other}` (expected github, gitlab or gitea)"),
            }),
        }
    }
}
