//! End-to-end listing against a mock platform over real HTTP.
#![expect(
    clippy::expect_used,
    reason = "integration tests; allow-expect-in-tests does not cover integration tests"
)]

mod support;

use issuegate::forge::models::test_support::{gitea_issue, github_issue, github_pull_request, gitlab_issue};
use issuegate::{
    AccessToken, ClientOptions, GitHubSchema, GitLabSchema, GiteaSchema, IssueClient, IssueError,
    IssueSchema, ListIssuesOptions, Platform,
};
use rstest::{fixture, rstest};
use serde_json::json;
use support::MockPlatform;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

#[fixture]
fn platform() -> MockPlatform {
    MockPlatform::start()
}

fn client<S: IssueSchema>(
    platform: &MockPlatform,
    schema: S,
    api_path: &str,
) -> IssueClient<issuegate::ReqwestTransport, S> {
    let token = AccessToken::new("s3cret").expect("token should be accepted");
    let options = ClientOptions {
        api_url: Some(platform.url(api_path)),
        ..ClientOptions::default()
    };
    IssueClient::with_reqwest(schema, &token, &options).expect("client should build")
}

#[rstest]
fn github_listing_sends_generic_vocabulary(platform: MockPlatform) {
    platform.mount(
        Mock::given(method("GET"))
            .and(path("/repos/octo/widgets/issues"))
            .and(query_param("state", "closed"))
            .and(query_param("labels", "bug,ui"))
            .and(query_param("per_page", "50"))
            .and(query_param("page", "2"))
            .and(header("authorization", "Bearer s3cret"))
            .and(header("accept", "application/vnd.github+json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([github_issue(12), github_pull_request(13)])),
            ),
    );
    let options = ListIssuesOptions {
        state: Some("closed".to_owned()),
        labels: vec!["bug".to_owned(), "ui".to_owned()],
        per_page: 50,
        page: 2,
        ..ListIssuesOptions::default()
    };

    let list = client(&platform, GitHubSchema, "")
        .list_issues("octo", "widgets", &options)
        .expect("listing should succeed");

    assert_eq!(list.len(), 2);
    assert_eq!((list.page, list.per_page), (2, 50));
    let first = list.get(0).expect("first issue");
    assert_eq!(first.platform, Platform::GitHub);
    assert_eq!(first.number, Some(12));
    assert!(!first.is_pull_request());
    assert!(list.get(1).is_some_and(issuegate::IssueData::is_pull_request));
}

#[rstest]
fn gitlab_listing_rewrites_parameters_and_encodes_project(platform: MockPlatform) {
    platform.mount(
        Mock::given(method("GET"))
            .and(path("/api/v4/projects/group%2Fsub%2Fproject/issues"))
            .and(query_param("state", "opened"))
            .and(query_param("order_by", "created_at"))
            .and(query_param("sort", "asc"))
            .and(query_param("milestone", "None"))
            .and(query_param_is_missing("direction"))
            .and(header("authorization", "Bearer s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([gitlab_issue(45)]))),
    );
    let options = ListIssuesOptions {
        state: Some("open".to_owned()),
        sort: Some("created".to_owned()),
        direction: Some("asc".to_owned()),
        milestone: Some("none".to_owned()),
        ..ListIssuesOptions::default()
    };

    let list = client(&platform, GitLabSchema, "/api/v4")
        .list_issues("group/sub", "project", &options)
        .expect("listing should succeed");

    let issue = list.get(0).expect("one issue");
    assert_eq!(issue.platform, Platform::GitLab);
    assert_eq!(issue.iid(), Some(45));
    assert_eq!(issue.description(), Some("Ratione dolores corrupti"));
    assert_eq!(
        issue.author().and_then(|author| author.login.as_deref()),
        Some("eileen.lowe")
    );
    assert_eq!(issue.label_names().collect::<Vec<_>>(), ["foo", "bar"]);
}

#[rstest]
fn gitea_listing_uses_limit(platform: MockPlatform) {
    platform.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/repos/team/app/issues"))
            .and(query_param("limit", "10"))
            .and(query_param("type", "issues"))
            .and(query_param_is_missing("per_page"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([gitea_issue(4)]))),
    );
    let mut options = ListIssuesOptions {
        per_page: 10,
        ..ListIssuesOptions::default()
    };
    options.extra.insert("type".to_owned(), json!("issues"));

    let list = client(&platform, GiteaSchema, "/api/v1")
        .list_issues("team", "app", &options)
        .expect("listing should succeed");

    let issue = list.get(0).expect("one issue");
    assert_eq!(issue.platform, Platform::Gitea);
    assert_eq!(issue.assignees, None);
    assert_eq!(issue.label_names().collect::<Vec<_>>(), ["docs"]);
}

#[rstest]
fn unauthorised_response_surfaces_status_and_body(platform: MockPlatform) {
    platform.mount(
        Mock::given(method("GET"))
            .and(path("/repos/octo/widgets/issues"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })),
            ),
    );

    let result = client(&platform, GitHubSchema, "").list_issues(
        "octo",
        "widgets",
        &ListIssuesOptions::default(),
    );

    match result {
        Err(IssueError::HttpStatus { status, body, .. }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Bad credentials"), "{body}");
        }
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}

#[rstest]
fn raw_listing_returns_body_unchanged(platform: MockPlatform) {
    let body = json!([{ "iid": 1, "web_url": "https://gitlab.example.com/a/b/-/issues/1" }]);
    platform.mount(
        Mock::given(method("GET"))
            .and(path("/api/v4/projects/a%2Fb/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone())),
    );

    let raw = client(&platform, GitLabSchema, "/api/v4")
        .list_issues_raw("a", "b", &ListIssuesOptions::default())
        .expect("listing should succeed");

    assert_eq!(raw, body);
}

#[rstest]
fn unsupported_parameter_never_reaches_the_server(platform: MockPlatform) {
    let mut options = ListIssuesOptions::default();
    options.extra.insert("iids".to_owned(), json!([1, 2]));

    let result = client(&platform, GitHubSchema, "").list_issues("octo", "widgets", &options);

    match result {
        Err(IssueError::Validation(report)) => {
            assert!(report.unsupported.contains(&"iids".to_owned()), "{report:?}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
