//! Blocking HTTP transport used by the issue client.

use std::time::Duration;

use http::HeaderMap;
use reqwest::blocking::Client;
use serde_json::Value;
use url::Url;

use super::error::IssueError;

/// Default bound on one request, connection included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// One GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute endpoint URL without the query string.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// Query-string pairs in order. Names may repeat.
    pub query: Vec<(String, String)>,
    /// Bound on the whole request.
    pub timeout: Duration,
}

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed JSON body.
    pub body: Value,
    /// Raw body text.
    pub text: String,
}

/// Performs blocking GET requests.
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the parsed response.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::Transport`] when no response arrives (including
    /// timeouts), [`IssueError::HttpStatus`] for non-2xx statuses and
    /// [`IssueError::Decode`] when a 2xx body is not JSON.
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, IssueError>;
}

/// [`Transport`] backed by `reqwest`'s blocking client.
///
/// The blocking client runs its own runtime, so it must not be used from
/// inside an async context.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a transport whose client enforces `timeout` by default.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::Configuration`] when the HTTP client cannot be
    /// built, for example when no TLS backend is available.
    pub fn new(timeout: Duration) -> Result<Self, IssueError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| IssueError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, IssueError> {
        let url = request.url.as_str();
        tracing::debug!(url, query = ?request.query, "GET");

        let response = self
            .client
            .get(request.url.clone())
            .headers(request.headers.clone())
            .query(&request.query)
            .timeout(request.timeout)
            .send()
            .map_err(|error| {
                let message = if error.is_timeout() {
                    format!("request timed out after {:?}: {error}", request.timeout)
                } else {
                    error.to_string()
                };
                tracing::error!(url, "request failed: {message}");
                IssueError::Transport {
                    url: url.to_owned(),
                    message,
                }
            })?;

        let status = response.status();
        tracing::debug!(url, status = status.as_u16(), "response received");

        let text = response.text().map_err(|error| IssueError::Transport {
            url: url.to_owned(),
            message: format!("failed to read response body: {error}"),
        })?;

        if !status.is_success() {
            tracing::error!(url, status = status.as_u16(), body = %text, "request rejected");
            return Err(IssueError::HttpStatus {
                url: url.to_owned(),
                status: status.as_u16(),
                body: text,
            });
        }

        let body = serde_json::from_str(&text).map_err(|error| IssueError::Decode {
            message: format!("response from {url} is not JSON: {error}"),
        })?;

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
            text,
        })
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
