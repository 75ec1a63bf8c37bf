//! Conversion of a list-issues response body into canonical records.

use serde_json::Value;

use super::error::IssueError;
use super::models::{IssueData, IssueDataList};
use super::platform::Platform;

/// Builds one page of canonical issues from a response body.
///
/// The body must be a JSON array whose items are issue objects. Every issue
/// is tagged with `platform`; `page` and `per_page` are recorded as
/// requested.
///
/// # Errors
///
/// Returns [`IssueError::Decode`] when the body is not an array or an item
/// cannot be read as an issue.
pub fn normalize_issues(
    body: Value,
    platform: Platform,
    page: u32,
    per_page: u32,
) -> Result<IssueDataList, IssueError> {
    let items = match body {
        Value::Array(items) => items,
        other => {
            return Err(IssueError::Decode {
                message: format!("expected a JSON array of issues, got {}", kind_of(&other)),
            });
        }
    };

    let issues = items
        .into_iter()
        .enumerate()
        .map(|(position, item)| {
            IssueData::from_json(item)
                .map(|issue| issue.with_platform(platform))
                .map_err(|error| IssueError::Decode {
                    message: format!("issue at position {position}: {error}"),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(platform = %platform, count = issues.len(), page, per_page, "normalised issues");
    Ok(IssueDataList::new(issues, page, per_page))
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
