//! Identity wrappers and API base URL derivation.

use url::Url;

use super::error::IssueError;

/// Repository owner wrapper to avoid stringly typed parameters.
///
/// On GitLab this is the namespace (group or user) and may contain `/` for
/// nested groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates that the owner is not blank.
    ///
    /// # Errors
    ///
    /// Returns `IssueError::MissingPathSegments` when the value is blank.
    pub fn new(value: &str) -> Result<Self, IssueError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(IssueError::MissingPathSegments);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates that the repository name is not blank.
    ///
    /// # Errors
    ///
    /// Returns `IssueError::MissingPathSegments` when the value is blank.
    pub fn new(value: &str) -> Result<Self, IssueError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(IssueError::MissingPathSegments);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `IssueError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, IssueError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IssueError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Parses a URL, mapping failures into `IssueError::InvalidUrl`.
///
/// # Errors
///
/// Returns `IssueError::InvalidUrl` when `input` is not an absolute URL.
pub fn parse_url(input: &str) -> Result<Url, IssueError> {
    Url::parse(input).map_err(|error| IssueError::InvalidUrl(format!("{input}: {error}")))
}

/// Derives an API base URL from an optional web base URL.
///
/// When `base_url` is absent or its host is `public_host`, `public_api` is
/// returned. Otherwise `api_path` is appended to the base URL's path, so a
/// GitLab instance served under `/gitlab` resolves to `/gitlab/api/v4`.
///
/// # Errors
///
/// Returns `IssueError::InvalidUrl` when either URL fails to parse or the base
/// URL has no host.
pub fn derive_api_base(
    base_url: Option<&str>,
    public_host: &str,
    public_api: &str,
    api_path: &str,
) -> Result<Url, IssueError> {
    let Some(base) = base_url else {
        return parse_url(public_api);
    };

    let mut parsed = parse_url(base)?;
    let host = parsed
        .host_str()
        .ok_or_else(|| IssueError::InvalidUrl(format!("{base}: URL must include a host")))?;

    if host.eq_ignore_ascii_case(public_host) {
        return parse_url(public_api);
    }

    parsed.set_query(None);
    parsed.set_fragment(None);
    parsed
        .path_segments_mut()
        .map_err(|()| IssueError::InvalidUrl(format!("{base}: URL cannot be a base")))?
        .pop_if_empty()
        .extend(api_path.split('/').filter(|segment| !segment.is_empty()));
    Ok(parsed)
}

/// Appends already-decoded path segments to an API base URL.
///
/// Each segment is percent-encoded on its own, so a segment containing `/`
/// becomes `%2F` rather than a path separator.
///
/// # Errors
///
/// Returns `IssueError::InvalidUrl` when the API URL cannot carry a path.
pub fn join_segments<S: AsRef<str>>(api_base: &Url, segments: &[S]) -> Result<Url, IssueError> {
    let mut url = api_base.clone();
    url.path_segments_mut()
        .map_err(|()| IssueError::InvalidUrl(format!("{api_base}: URL cannot be a base")))?
        .pop_if_empty()
        .extend(segments.iter().map(AsRef::as_ref));
    Ok(url)
}
