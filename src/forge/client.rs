//! The list-issues client: validate, transform, request, normalise.

use std::time::Duration;

use http::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde_json::Value;
use url::Url;

use super::error::IssueError;
use super::locator::{AccessToken, RepositoryName, RepositoryOwner, join_segments, parse_url};
use super::models::IssueDataList;
use super::normalize::normalize_issues;
use super::params::{ListIssuesOptions, ValidatedParams};
use super::platforms::IssueSchema;
use super::transport::{DEFAULT_TIMEOUT, HttpRequest, ReqwestTransport, Transport};

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Where and how the client talks to a platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Web base URL of a self-hosted instance, such as
    /// `https://gitlab.example.com`. `None` targets the public service.
    pub base_url: Option<String>,
    /// Explicit API base URL. Takes precedence over `base_url`.
    pub api_url: Option<String>,
    /// Extra request headers. They replace default headers of the same name.
    pub extra_headers: Vec<(String, String)>,
    /// Bound on each request.
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            api_url: None,
            extra_headers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientOptions {
    /// Adds one extra request header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }
}

/// Lists repository issues on one platform.
///
/// Each call validates the options against the platform's schema, rewrites
/// them into the platform's vocabulary, performs exactly one GET and returns
/// either the canonical records or the raw body. Nothing is cached between
/// calls.
#[derive(Debug, Clone)]
pub struct IssueClient<T, S> {
    transport: T,
    schema: S,
    api_base: Url,
    headers: HeaderMap,
    timeout: Duration,
}

impl<S: IssueSchema> IssueClient<ReqwestTransport, S> {
    /// Builds a client backed by the blocking `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::Configuration`] when the HTTP client or a header
    /// cannot be built and [`IssueError::InvalidUrl`] for unusable URLs.
    pub fn with_reqwest(schema: S, token: &AccessToken, options: &ClientOptions) -> Result<Self, IssueError> {
        let transport = ReqwestTransport::new(options.timeout)?;
        Self::new(transport, schema, token, options)
    }
}

impl<T: Transport, S: IssueSchema> IssueClient<T, S> {
    /// Composes a transport and a platform schema.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::InvalidUrl`] when the API or base URL cannot be
    /// parsed and [`IssueError::Configuration`] when a header name or value
    /// is invalid.
    pub fn new(transport: T, schema: S, token: &AccessToken, options: &ClientOptions) -> Result<Self, IssueError> {
        let api_base = match options.api_url.as_deref() {
            Some(api_url) => parse_url(api_url)?,
            None => schema.api_base(options.base_url.as_deref())?,
        };
        let headers = build_headers(token, schema.accept(), &options.extra_headers)?;

        Ok(Self {
            transport,
            schema,
            api_base,
            headers,
            timeout: options.timeout,
        })
    }

    /// API base every request is built on.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Platform schema in use.
    #[must_use]
    pub const fn schema(&self) -> &S {
        &self.schema
    }

    /// Lists one page of issues as canonical records.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::Validation`] before any request when the
    /// options are invalid, [`IssueError::MissingPathSegments`] for a blank
    /// owner or repository, the transport's error when the request fails,
    /// and [`IssueError::Decode`] when the body is not a list of issues.
    pub fn list_issues(
        &self,
        owner: &str,
        repository: &str,
        options: &ListIssuesOptions,
    ) -> Result<IssueDataList, IssueError> {
        let (request, params) = self.prepare(owner, repository, options)?;
        let response = self.transport.get(&request)?;
        normalize_issues(
            response.body,
            self.schema.platform(),
            params.page(),
            params.per_page(),
        )
    }

    /// Lists one page of issues and returns the platform's JSON unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`IssueClient::list_issues`], except that the body is not
    /// decoded into records.
    pub fn list_issues_raw(
        &self,
        owner: &str,
        repository: &str,
        options: &ListIssuesOptions,
    ) -> Result<Value, IssueError> {
        let (request, _) = self.prepare(owner, repository, options)?;
        self.transport.get(&request).map(|response| response.body)
    }

    fn prepare(
        &self,
        owner: &str,
        repository: &str,
        options: &ListIssuesOptions,
    ) -> Result<(HttpRequest, ValidatedParams), IssueError> {
        let owner_name = RepositoryOwner::new(owner)?;
        let repository_name = RepositoryName::new(repository)?;

        let params = self
            .schema
            .param_schema()
            .validate(&options.to_bag())
            .map_err(|report| {
                report.log();
                IssueError::from(report)
            })?;
        let wire = self.schema.transform(&params);
        let url = join_segments(
            &self.api_base,
            &self.schema.list_issues_segments(&owner_name, &repository_name),
        )?;

        tracing::debug!(
            platform = %self.schema.platform(),
            %url,
            params = ?wire.names().collect::<Vec<_>>(),
            "listing issues"
        );

        let request = HttpRequest {
            url,
            headers: self.headers.clone(),
            query: wire.to_query_pairs(),
            timeout: self.timeout,
        };
        Ok((request, params))
    }
}

fn build_headers(token: &AccessToken, accept: &'static str, extra: &[(String, String)]) -> Result<HeaderMap, IssueError> {
    let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token.value())).map_err(|error| {
        IssueError::Configuration {
            message: format!("access token cannot be sent as a header: {error}"),
        }
    })?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(ACCEPT, HeaderValue::from_static(accept));
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

    for (name, value) in extra {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|error| IssueError::Configuration {
            message: format!("invalid header name `{name}`: {error}"),
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|error| IssueError::Configuration {
            message: format!("invalid value for header `{name}`: {error}"),
        })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
