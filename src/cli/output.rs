//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use issuegate::{IssueData, IssueDataList, IssueError};
use serde_json::Value;

/// Writes a one-line-per-issue summary of a page of issues.
pub fn write_issue_summary<W: Write>(
    writer: &mut W,
    list: &IssueDataList,
    owner: &str,
    repo: &str,
) -> Result<(), IssueError> {
    writeln!(writer, "Issues for {owner}/{repo}:").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    for issue in list {
        writeln!(writer, "  {}", summary_line(issue)).map_err(|e| io_error(&e))?;
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Page {} ({} shown, {} per page)",
        list.page,
        list.len(),
        list.per_page
    )
    .map_err(|e| io_error(&e))?;

    if list.len() >= usize::try_from(list.per_page).unwrap_or(usize::MAX) && !list.is_empty() {
        writeln!(writer, "More pages may be available (use --page {}).", list.page.saturating_add(1))
            .map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Writes the platform's JSON body, pretty-printed.
pub fn write_raw<W: Write>(writer: &mut W, body: &Value) -> Result<(), IssueError> {
    serde_json::to_writer_pretty(&mut *writer, body).map_err(|error| IssueError::Io {
        message: error.to_string(),
    })?;
    writeln!(writer).map_err(|e| io_error(&e))
}

fn summary_line(issue: &IssueData) -> String {
    let number = issue
        .number
        .map_or_else(|| "?".to_owned(), |number| number.to_string());
    let state = issue.state.as_deref().unwrap_or("unknown");
    let title = issue.title.as_deref().unwrap_or("(no title)");
    let author = issue
        .user
        .as_ref()
        .and_then(|user| user.login.as_deref())
        .unwrap_or("unknown");
    let kind = if issue.is_pull_request() { " (pull request)" } else { "" };

    let mut line = format!("#{number} [{state}] {title} (@{author}){kind}");
    let labels: Vec<&str> = issue.label_names().collect();
    if !labels.is_empty() {
        line.push_str(" {");
        line.push_str(&labels.join(", "));
        line.push('}');
    }
    line
}

pub(crate) fn io_error(error: &io::Error) -> IssueError {
    IssueError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use issuegate::IssueData;
    use issuegate::forge::IssueDataList;
    use rstest::rstest;
    use serde_json::json;

    use super::{write_issue_summary, write_raw};

    fn issue(value: serde_json::Value) -> IssueData {
        IssueData::from_json(value).expect("issue should parse")
    }

    fn render(list: &IssueDataList) -> String {
        let mut buffer = Vec::new();
        write_issue_summary(&mut buffer, list, "octo", "widgets").expect("summary should render");
        String::from_utf8(buffer).expect("summary should be UTF-8")
    }

    #[rstest]
    fn summary_lists_each_issue() {
        let list = IssueDataList::new(
            vec![
                issue(json!({
                    "number": 7,
                    "state": "open",
                    "title": "Crash on start",
                    "user": { "login": "alice" },
                    "labels": ["bug", "p1"]
                })),
                issue(json!({
                    "iid": 8,
                    "state": "opened",
                    "title": "Add docs",
                    "author": { "username": "bob" },
                    "pull_request": { "url": "https://example.com/pulls/8" }
                })),
            ],
            2,
            30,
        );

        let output = render(&list);

        assert!(output.starts_with("Issues for octo/widgets:"), "{output}");
        assert!(output.contains("#7 [open] Crash on start (@alice) {bug, p1}"), "{output}");
        assert!(output.contains("#8 [opened] Add docs (@bob) (pull request)"), "{output}");
        assert!(output.contains("Page 2 (2 shown, 30 per page)"), "{output}");
        assert!(!output.contains("More pages"), "{output}");
    }

    #[rstest]
    fn full_page_hints_at_next_page() {
        let list = IssueDataList::new(vec![issue(json!({ "number": 1 }))], 1, 1);
        let output = render(&list);
        assert!(output.contains("use --page 2"), "{output}");
        assert!(output.contains("#1 [unknown] (no title) (@unknown)"), "{output}");
    }

    #[rstest]
    fn raw_output_is_pretty_json() {
        let mut buffer = Vec::new();
        write_raw(&mut buffer, &json!([{ "iid": 1 }])).expect("raw output should render");
        let output = String::from_utf8(buffer).expect("output should be UTF-8");

        assert!(output.ends_with("]\n"), "{output:?}");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("output should be JSON");
        assert_eq!(parsed, json!([{ "iid": 1 }]));
    }
}
