//! Unit tests for configuration loading and precedence.

use std::time::Duration;

use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::{Value, json};

use super::IssuegateConfig;
use crate::forge::{IssueError, Platform};

/// Applies a configuration layer to the composer based on the layer type.
fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

fn build_config_from_layers(layers: Vec<(&str, Value)>) -> IssuegateConfig {
    let mut composer = MergeComposer::new();
    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value);
    }
    IssuegateConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"owner": "default-owner"})), ("file", json!({"owner": "file-owner"}))],
    "owner",
    "file-owner",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"token": "file-token"})), ("environment", json!({"token": "env-token"}))],
    "token",
    "env-token",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"platform": "gitea"})), ("cli", json!({"platform": "gitlab"}))],
    "platform",
    "gitlab",
    "CLI should override environment"
)]
fn test_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] field: &str,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(layers);

    let actual = match field {
        "owner" => config.owner.as_deref(),
        "token" => config.token.as_deref(),
        "platform" => config.platform.as_deref(),
        _ => panic!("unknown field: {field}"),
    };

    assert_eq!(actual, Some(expected), "{message}");
}

#[rstest]
fn defaults_apply_when_layers_are_silent() {
    let config = build_config_from_layers(vec![("file", json!({"owner": "octo"}))]);

    assert_eq!(config.per_page, 30);
    assert_eq!(config.page, 1);
    assert_eq!(config.timeout_seconds, 60);
    assert!(!config.raw);
}

#[rstest]
#[case::absent(None, Platform::GitHub)]
#[case::gitlab(Some("gitlab"), Platform::GitLab)]
#[case::mixed_case(Some("Gitea"), Platform::Gitea)]
fn resolve_platform_parses_names(#[case] platform: Option<&str>, #[case] expected: Platform) {
    let config = IssuegateConfig {
        platform: platform.map(ToOwned::to_owned),
        ..IssuegateConfig::default()
    };
    assert_eq!(config.resolve_platform().ok(), Some(expected));
}

#[rstest]
fn resolve_platform_rejects_unknown_names() {
    let config = IssuegateConfig {
        platform: Some("bitbucket".to_owned()),
        ..IssuegateConfig::default()
    };
    let error = config.resolve_platform().expect_err("bitbucket is unsupported");
    assert!(matches!(error, IssueError::Configuration { .. }), "unexpected error: {error:?}");
}

#[rstest]
fn resolve_token_prefers_configured_value() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("env-token"))]);
    let config = IssuegateConfig {
        token: Some("my-token".to_owned()),
        ..IssuegateConfig::default()
    };

    assert_eq!(
        config.resolve_token(Platform::GitHub).ok(),
        Some("my-token".to_owned())
    );
}

#[rstest]
#[case::github(Platform::GitHub, "GITHUB_TOKEN")]
#[case::gitlab(Platform::GitLab, "GITLAB_TOKEN")]
#[case::gitea(Platform::Gitea, "GITEA_TOKEN")]
fn resolve_token_falls_back_to_platform_variable(#[case] platform: Platform, #[case] variable: &str) {
    let _guard = env_lock::lock_env([(variable, Some("from-env"))]);
    let config = IssuegateConfig::default();

    assert_eq!(config.resolve_token(platform).ok(), Some("from-env".to_owned()));
}

#[rstest]
fn resolve_token_ignores_other_platforms_variables() {
    let _guard = env_lock::lock_env([
        ("GITHUB_TOKEN", Some("github-token")),
        ("GITLAB_TOKEN", None::<&str>),
    ]);
    let config = IssuegateConfig::default();

    assert_eq!(config.resolve_token(Platform::GitLab), Err(IssueError::MissingToken));
}

#[rstest]
fn resolve_token_rejects_blank_values() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = IssuegateConfig {
        token: Some("   ".to_owned()),
        ..IssuegateConfig::default()
    };

    assert_eq!(config.resolve_token(Platform::GitHub), Err(IssueError::MissingToken));
}

#[rstest]
fn require_repository_info_returns_values_when_present() {
    let config = IssuegateConfig {
        owner: Some("octocat".to_owned()),
        repo: Some("hello-world".to_owned()),
        ..IssuegateConfig::default()
    };

    assert_eq!(
        config.require_repository_info().ok(),
        Some(("octocat", "hello-world"))
    );
}

#[rstest]
#[case::owner_missing(None, Some("hello-world"), "owner")]
#[case::repo_missing(Some("octocat"), None, "name")]
fn require_repository_info_names_the_missing_part(
    #[case] owner: Option<&str>,
    #[case] repo: Option<&str>,
    #[case] expected: &str,
) {
    let config = IssuegateConfig {
        owner: owner.map(ToOwned::to_owned),
        repo: repo.map(ToOwned::to_owned),
        ..IssuegateConfig::default()
    };

    let error = config
        .require_repository_info()
        .expect_err("incomplete repository should be rejected");
    assert!(error.to_string().contains(expected), "unexpected message: {error}");
}

#[rstest]
fn list_options_carry_filters_and_params() {
    let config = IssuegateConfig {
        state: Some("closed".to_owned()),
        labels: Some("bug, ui".to_owned()),
        per_page: 50,
        page: 3,
        params: Some(r#"{"issue_type": "incident", "weight": 2}"#.to_owned()),
        ..IssuegateConfig::default()
    };

    let options = config.list_options().expect("options should build");

    assert_eq!(options.state.as_deref(), Some("closed"));
    assert_eq!(options.labels, vec!["bug, ui".to_owned()]);
    assert_eq!(options.per_page, 50);
    assert_eq!(options.page, 3);
    assert_eq!(options.extra.get("issue_type"), Some(&json!("incident")));
    assert_eq!(options.extra.get("weight"), Some(&json!(2)));
}

#[rstest]
#[case::not_json("issue_type=incident")]
#[case::not_an_object("[1, 2]")]
fn list_options_reject_malformed_params(#[case] params: &str) {
    let config = IssuegateConfig {
        params: Some(params.to_owned()),
        ..IssuegateConfig::default()
    };

    let error = config.list_options().expect_err("params should be rejected");
    assert!(matches!(error, IssueError::Configuration { .. }), "unexpected error: {error:?}");
}

#[rstest]
fn client_options_use_urls_and_timeout() {
    let config = IssuegateConfig {
        base_url: Some("https://gitlab.example.com".to_owned()),
        timeout_seconds: 5,
        ..IssuegateConfig::default()
    };

    let options = config.client_options();

    assert_eq!(options.base_url.as_deref(), Some("https://gitlab.example.com"));
    assert_eq!(options.api_url, None);
    assert_eq!(options.timeout, Duration::from_secs(5));
}
