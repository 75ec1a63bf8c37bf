//! Unit tests for canonical record construction.

use rstest::rstest;
use serde_json::{Value, json};

use super::test_support::{gitea_issue, github_issue, github_pull_request, gitlab_issue};
use super::{IssueData, IssueDataList, LabelData, LabelDataList, MilestoneData, UserData};
use crate::forge::platform::Platform;

fn issue(value: Value) -> IssueData {
    IssueData::from_json(value).expect("sample issue should parse")
}

#[rstest]
fn github_issue_keeps_canonical_names() {
    let parsed = issue(github_issue(123));

    assert_eq!(parsed.number, Some(123));
    assert_eq!(parsed.iid(), Some(123));
    assert_eq!(parsed.title.as_deref(), Some("Widget explodes on resize"));
    assert_eq!(parsed.description(), Some("Steps to reproduce..."));
    assert_eq!(
        parsed.author().and_then(|user| user.login.as_deref()),
        Some("octocat")
    );
    assert_eq!(parsed.user_notes_count(), Some(3));
    assert!(!parsed.is_pull_request());
    assert_eq!(parsed.platform, Platform::Unknown);
}

#[rstest]
fn gitlab_spellings_resolve_to_canonical_fields() {
    let parsed = issue(gitlab_issue(45));

    assert_eq!(parsed.number, Some(45));
    assert_eq!(parsed.iid(), Some(45));
    assert_eq!(parsed.body.as_deref(), Some("Ratione dolores corrupti"));
    assert_eq!(
        parsed.html_url.as_deref(),
        Some("https://gitlab.example.com/group/project/-/issues/45")
    );
    assert_eq!(parsed.web_url(), parsed.html_url.as_deref());
    assert_eq!(parsed.comments, Some(1));
    assert_eq!(
        parsed.user.as_ref().and_then(|user| user.login.as_deref()),
        Some("eileen.lowe")
    );
    assert_eq!(parsed.state.as_deref(), Some("opened"));
}

#[rstest]
fn gitlab_alias_keys_are_consumed() {
    let parsed = issue(gitlab_issue(45));

    for key in ["iid", "description", "author", "web_url", "user_notes_count"] {
        assert!(!parsed.extra.contains_key(key), "{key} should not remain in extra");
    }
    assert_eq!(parsed.extra.get("project_id"), Some(&json!(8)));
    assert_eq!(parsed.extra.get("confidential"), Some(&json!(false)));
}

#[rstest]
fn canonical_key_beats_alias_and_alias_survives_in_extra() {
    let parsed = issue(json!({ "number": 1, "iid": 2, "body": "kept", "description": "shadowed" }));

    assert_eq!(parsed.number, Some(1));
    assert_eq!(parsed.body.as_deref(), Some("kept"));
    assert_eq!(parsed.extra.get("iid"), Some(&json!(2)));
    assert_eq!(parsed.extra.get("description"), Some(&json!("shadowed")));
}

#[rstest]
fn nested_records_resolve_their_own_aliases() {
    let parsed = issue(gitlab_issue(7));

    let milestone = parsed.milestone.as_ref().expect("milestone should parse");
    assert_eq!(milestone.number, Some(2));
    assert_eq!(milestone.due_on.as_deref(), Some("2016-02-01"));
    assert_eq!(milestone.due_date(), Some("2016-02-01"));
    assert_eq!(
        milestone.web_url(),
        Some("https://gitlab.example.com/group/project/-/milestones/2")
    );
    assert_eq!(milestone.open_issues, 0, "missing counts default to zero");
    assert_eq!(milestone.closed_issues, 0);

    let assignees = parsed.assignees.as_ref().expect("assignees should parse");
    assert_eq!(assignees.len(), 1);
    let first = assignees.get(0).expect("one assignee");
    assert_eq!(first.login.as_deref(), Some("root"));
    assert_eq!(first.username(), Some("root"));
    assert_eq!(first.html_url.as_deref(), Some("https://gitlab.example.com/root"));
    assert_eq!(first.extra.get("name"), Some(&json!("Administrator")));
}

#[rstest]
fn string_labels_become_name_only_labels() {
    let parsed = issue(gitlab_issue(1));
    let labels = parsed.labels.as_ref().expect("labels should parse");

    assert_eq!(labels.len(), 2);
    assert_eq!(labels.names().collect::<Vec<_>>(), vec!["foo", "bar"]);
    let first = labels.get(0).expect("first label");
    assert_eq!(first.id, None);
    assert_eq!(first.color, None);
}

#[rstest]
fn object_labels_keep_every_field() {
    let parsed = issue(github_issue(1));
    let label = parsed
        .labels
        .as_ref()
        .and_then(|labels| labels.get(0))
        .expect("one label");

    assert_eq!(label.id, Some(208_045_946));
    assert_eq!(label.name.as_deref(), Some("bug"));
    assert_eq!(label.color.as_deref(), Some("f29513"));
    assert_eq!(label.default, Some(true));
}

#[rstest]
#[case::absent(None, None)]
#[case::null(Some(json!(null)), None)]
#[case::not_a_list(Some(json!("bug")), None)]
#[case::empty(Some(json!([])), Some(0))]
#[case::mixed(Some(json!(["bug", { "name": "ui", "mood": "calm" }, 7, null])), Some(2))]
fn label_rule(#[case] raw: Option<Value>, #[case] expected_len: Option<usize>) {
    let labels = LabelDataList::from_value(raw).expect("labels should normalise");
    assert_eq!(labels.as_ref().map(LabelDataList::len), expected_len);
}

#[rstest]
fn label_extras_are_preserved() {
    let labels = LabelDataList::from_value(Some(json!([{ "name": "ui", "mood": "calm" }])))
        .expect("labels should normalise")
        .expect("labels should be present");
    let label = labels.get(0).expect("one label");
    assert_eq!(label.extra.get("mood"), Some(&json!("calm")));
}

#[rstest]
fn normalised_labels_pass_through_unchanged() {
    let original = LabelData {
        id: Some(4),
        name: Some("docs".to_owned()),
        ..LabelData::default()
    };
    let value = serde_json::to_value(&original).expect("label should serialise");
    let labels = LabelDataList::from_value(Some(json!([value])))
        .expect("labels should normalise")
        .expect("labels should be present");
    assert_eq!(labels.get(0), Some(&original));
}

#[rstest]
fn assignees_absent_differs_from_empty() {
    let absent = issue(json!({ "number": 1 }));
    let empty = issue(json!({ "number": 1, "assignees": [] }));

    assert!(absent.assignees.is_none());
    assert_eq!(empty.assignees.as_ref().map(|users| users.len()), Some(0));
}

#[rstest]
fn pull_request_marker_is_detected() {
    let parsed = issue(github_pull_request(9));
    assert!(parsed.is_pull_request());
    let marker = parsed.pull_request.as_ref().expect("marker present");
    assert_eq!(
        marker.diff_url.as_deref(),
        Some("https://github.com/octo/widgets/pull/9.diff")
    );
    assert_eq!(marker.extra.get("merged_at"), Some(&Value::Null));
}

#[rstest]
fn null_pull_request_is_not_a_marker() {
    let parsed = issue(gitea_issue(2));
    assert!(!parsed.is_pull_request());
    assert!(parsed.assignees.is_none());
}

#[rstest]
fn gitea_user_keeps_login_over_username() {
    let parsed = issue(gitea_issue(2));
    let user = parsed.user.as_ref().expect("user present");

    assert_eq!(user.login.as_deref(), Some("dev"));
    assert_eq!(user.extra.get("username"), Some(&json!("dev")));
}

#[rstest]
fn unknown_fields_survive_serialisation() {
    let parsed = issue(github_issue(5));
    let value = serde_json::to_value(&parsed).expect("issue should serialise");

    assert_eq!(value.get("reactions"), Some(&json!({ "total_count": 0 })));
    assert_eq!(value.get("platform"), Some(&json!("unknown")));

    let reparsed: IssueData = serde_json::from_value(value).expect("issue should deserialise");
    assert_eq!(reparsed, parsed);
}

#[rstest]
fn deserialize_resolves_aliases() {
    let user: UserData = serde_json::from_value(json!({ "username": "root", "web_url": "https://x" }))
        .expect("user should deserialise");
    assert_eq!(user.login.as_deref(), Some("root"));
    assert_eq!(user.html_url.as_deref(), Some("https://x"));
}

#[rstest]
fn wrong_field_type_is_an_error() {
    let error = IssueData::from_json(json!({ "number": "twelve" })).expect_err("string number should fail");
    assert!(error.to_string().contains("number"), "unexpected message: {error}");

    let nested = MilestoneData::from_json(json!({ "creator": 4 })).expect_err("creator must be an object");
    assert!(nested.to_string().contains("creator"), "unexpected message: {nested}");
}

#[rstest]
fn issue_must_be_an_object() {
    assert!(IssueData::from_json(json!([1, 2])).is_err());
}

#[rstest]
fn issue_list_reports_requested_pagination() {
    let list = IssueDataList::new(vec![issue(github_issue(1)), issue(github_issue(2))], 3, 2);

    assert_eq!(list.len(), 2);
    assert_eq!(list.page, 3);
    assert_eq!(list.per_page, 2);
    assert_eq!(list.get(1).and_then(|item| item.number), Some(2));
    assert!(list.get(2).is_none());
    assert_eq!(
        list.iter().filter_map(|item| item.number).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[rstest]
fn gitea_page_with_ghost_and_bot_authors_keeps_every_issue() {
    let mut ghost = gitea_issue(2);
    ghost["user"] = json!({ "id": -1, "login": "Ghost", "username": "Ghost" });
    let mut bot = gitea_issue(3);
    bot["user"] = json!({ "id": -2, "login": "gitea-actions" });

    let list = crate::forge::normalize_issues(
        json!([gitea_issue(1), ghost, bot]),
        Platform::Gitea,
        1,
        30,
    )
    .expect("negative user ids should normalise");

    assert_eq!(list.len(), 3);
    let authors: Vec<_> = list
        .iter()
        .map(|issue| issue.user.as_ref().and_then(|user| user.id))
        .collect();
    assert_eq!(authors, [Some(5), Some(-1), Some(-2)]);
    assert_eq!(
        list.get(1)
            .and_then(|issue| issue.user.as_ref())
            .and_then(|user| user.login.as_deref()),
        Some("Ghost")
    );
}
