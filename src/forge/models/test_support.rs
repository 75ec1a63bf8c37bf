//! Sample issue payloads for tests.
//!
//! The payloads are trimmed copies of what each platform returns from its
//! list-issues endpoint, keeping the fields the canonical records care about
//! plus a few they do not.
//!
//! # Examples
//!
//! ```
//! use issuegate::forge::models::IssueData;
//! use issuegate::forge::models::test_support::gitlab_issue;
//!
//! let issue = IssueData::from_json(gitlab_issue(45)).expect("sample should parse");
//! assert_eq!(issue.number, Some(45));
//! ```

use serde_json::{Value, json};

/// A GitHub issue with object labels, one assignee and a milestone.
#[must_use]
pub fn github_issue(number: u64) -> Value {
    json!({
        "id": 1_000 + number,
        "node_id": "I_kwDOA",
        "url": format!("https://api.github.com/repos/octo/widgets/issues/{number}"),
        "repository_url": "https://api.github.com/repos/octo/widgets",
        "html_url": format!("https://github.com/octo/widgets/issues/{number}"),
        "number": number,
        "state": "open",
        "title": "Widget explodes on resize",
        "body": "Steps to reproduce...",
        "user": { "login": "octocat", "id": 1, "type": "User", "site_admin": false },
        "labels": [
            {
                "id": 208_045_946,
                "node_id": "MDU6TGFiZWwyMDgwNDU5NDY=",
                "url": "https://api.github.com/repos/octo/widgets/labels/bug",
                "name": "bug",
                "description": "Something isn't working",
                "color": "f29513",
                "default": true
            }
        ],
        "assignee": { "login": "hubot", "id": 2 },
        "assignees": [{ "login": "hubot", "id": 2 }],
        "milestone": {
            "id": 1_002_604,
            "number": 1,
            "state": "open",
            "title": "v1.0",
            "open_issues": 4,
            "closed_issues": 8,
            "due_on": "2012-10-09T23:39:01Z"
        },
        "locked": false,
        "comments": 3,
        "created_at": "2011-04-22T13:33:48Z",
        "updated_at": "2011-04-22T13:33:48Z",
        "closed_at": null,
        "author_association": "OWNER",
        "state_reason": null,
        "reactions": { "total_count": 0 }
    })
}

/// A GitHub pull request as it appears in the issues listing.
#[must_use]
pub fn github_pull_request(number: u64) -> Value {
    let mut issue = github_issue(number);
    if let Value::Object(ref mut object) = issue {
        object.insert(
            "pull_request".to_owned(),
            json!({
                "url": format!("https://api.github.com/repos/octo/widgets/pulls/{number}"),
                "html_url": format!("https://github.com/octo/widgets/pull/{number}"),
                "diff_url": format!("https://github.com/octo/widgets/pull/{number}.diff"),
                "patch_url": format!("https://github.com/octo/widgets/pull/{number}.patch"),
                "merged_at": null
            }),
        );
    }
    issue
}

/// A GitLab issue using GitLab spellings and string labels.
#[must_use]
pub fn gitlab_issue(iid: u64) -> Value {
    json!({
        "id": 76,
        "iid": iid,
        "project_id": 8,
        "title": "Consequatur vero maxime deserunt",
        "description": "Ratione dolores corrupti",
        "state": "opened",
        "created_at": "2016-01-04T15:31:51.081Z",
        "updated_at": "2016-01-04T15:31:51.081Z",
        "closed_at": null,
        "closed_by": null,
        "labels": ["foo", "bar"],
        "milestone": {
            "id": 1,
            "iid": 2,
            "project_id": 8,
            "title": "v2.0",
            "description": "Assumenda aut placeat",
            "state": "closed",
            "due_date": "2016-02-01",
            "web_url": "https://gitlab.example.com/group/project/-/milestones/2"
        },
        "assignees": [{
            "id": 1,
            "username": "root",
            "name": "Administrator",
            "state": "active",
            "web_url": "https://gitlab.example.com/root"
        }],
        "assignee": {
            "id": 1,
            "username": "root",
            "name": "Administrator",
            "web_url": "https://gitlab.example.com/root"
        },
        "author": {
            "id": 18,
            "username": "eileen.lowe",
            "name": "Alexandra Bashirian",
            "web_url": "https://gitlab.example.com/eileen.lowe"
        },
        "user_notes_count": 1,
        "web_url": format!("https://gitlab.example.com/group/project/-/issues/{iid}"),
        "confidential": false,
        "weight": null
    })
}

/// A Gitea issue; Gitea follows GitHub's field names.
#[must_use]
pub fn gitea_issue(number: u64) -> Value {
    json!({
        "id": 300 + number,
        "url": format!("https://gitea.example.com/api/v1/repos/team/app/issues/{number}"),
        "html_url": format!("https://gitea.example.com/team/app/issues/{number}"),
        "number": number,
        "user": { "id": 5, "login": "dev", "username": "dev", "full_name": "Dev Eloper" },
        "title": "Login page typo",
        "body": "",
        "labels": [{ "id": 9, "name": "docs", "color": "0e8a16", "description": "" }],
        "milestone": null,
        "assignee": null,
        "assignees": null,
        "state": "open",
        "is_locked": false,
        "comments": 0,
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-02T10:00:00Z",
        "pull_request": null
    })
}
