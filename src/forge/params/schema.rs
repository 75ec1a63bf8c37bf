//! Declarative parameter schemas for the generic layer and each platform.

use super::{DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// Issue states every platform accepts in the generic vocabulary.
pub const GENERIC_STATES: &[&str] = &["open", "closed", "all"];
/// Generic sort fields.
pub const GENERIC_SORTS: &[&str] = &["created", "updated", "comments"];
/// Sort directions.
pub const DIRECTIONS: &[&str] = &["asc", "desc"];

const GITLAB_SORTS: &[&str] = &[
    "created",
    "updated",
    "priority",
    "due_date",
    "relative_position",
    "label_priority",
    "milestone_due",
    "popularity",
    "weight",
];
const GITLAB_ISSUE_TYPES: &[&str] = &["issue", "incident", "test_case", "task"];
const GITLAB_NOT_FIELDS: &[&str] = &[
    "labels",
    "milestone",
    "author_id",
    "author_username",
    "assignee_id",
    "assignee_username",
    "my_reaction_emoji",
    "search",
    "in",
];
const GITLAB_SCOPES: &[&str] = &["created_by_me", "assigned_to_me", "all"];
const GITEA_TYPES: &[&str] = &["issues", "pulls"];

/// Value rule for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Any string.
    Text,
    /// A string from a fixed set.
    Choice(&'static [&'static str]),
    /// Whole number with optional inclusive bounds.
    Integer {
        /// Smallest accepted value.
        min: Option<i64>,
        /// Largest accepted value.
        max: Option<i64>,
    },
    /// Boolean.
    Flag,
    /// Label names as a list or a comma-joined string.
    Labels,
    /// List of whole numbers.
    IntegerList,
}

/// One recognised field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Canonical field name.
    pub name: &'static str,
    /// Additional accepted input names, in priority order after `name`.
    pub aliases: &'static [&'static str],
    /// Value rule.
    pub kind: FieldKind,
    /// Value used when the caller leaves the field unset.
    pub default: Option<i64>,
}

impl FieldSpec {
    /// A field with no aliases and no default.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            aliases: &[],
            kind,
            default: None,
        }
    }

    /// Adds accepted alias names.
    #[must_use]
    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub const fn with_default(mut self, default: i64) -> Self {
        self.default = Some(default);
        self
    }

    /// Input keys this field accepts, canonical name first.
    pub fn accepted_keys(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

const fn text(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, FieldKind::Text)
}

const fn choice(name: &'static str, values: &'static [&'static str]) -> FieldSpec {
    FieldSpec::new(name, FieldKind::Choice(values))
}

const fn integer(name: &'static str) -> FieldSpec {
    FieldSpec::new(
        name,
        FieldKind::Integer {
            min: None,
            max: None,
        },
    )
}

const fn flag(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, FieldKind::Flag)
}

/// Closed set of accepted fields plus cross-field exclusivity rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSchema {
    name: &'static str,
    fields: Vec<FieldSpec>,
    exclusive: Vec<(&'static str, &'static str)>,
}

impl ParamSchema {
    /// The platform-agnostic list-issues schema.
    #[must_use]
    pub fn generic() -> Self {
        Self {
            name: "ListIssuesParams",
            fields: vec![
                choice("state", GENERIC_STATES),
                text("assignee"),
                text("milestone"),
                FieldSpec::new("labels", FieldKind::Labels),
                choice("sort", GENERIC_SORTS),
                choice("direction", DIRECTIONS),
                text("since"),
                FieldSpec::new(
                    "per_page",
                    FieldKind::Integer {
                        min: Some(1),
                        max: Some(i64::from(MAX_PER_PAGE)),
                    },
                )
                .with_default(i64::from(DEFAULT_PER_PAGE)),
                FieldSpec::new(
                    "page",
                    FieldKind::Integer {
                        min: Some(1),
                        max: Some(i64::from(u32::MAX)),
                    },
                )
                .with_default(i64::from(DEFAULT_PAGE)),
            ],
            exclusive: Vec::new(),
        }
    }

    /// GitHub extension: adds the `type` filter.
    #[must_use]
    pub fn github() -> Self {
        Self::generic().extend("GitHubListIssuesParams", vec![text("type")])
    }

    /// GitLab extension: alias names, a wider sort set and GitLab-only filters.
    #[must_use]
    pub fn gitlab() -> Self {
        Self::generic()
            .extend(
                "GitLabListIssuesParams",
                vec![
                    text("assignee").with_aliases(&["assignee_username"]),
                    choice("sort", GITLAB_SORTS),
                    text("since").with_aliases(&["updated_after"]),
                    integer("assignee_id"),
                    integer("author_id"),
                    text("author_username"),
                    flag("confidential"),
                    text("created_before"),
                    text("due_date"),
                    integer("epic_id"),
                    FieldSpec::new("iids", FieldKind::IntegerList),
                    choice("issue_type", GITLAB_ISSUE_TYPES),
                    integer("iteration_id"),
                    text("iteration_title"),
                    text("my_reaction_emoji"),
                    choice("not_", GITLAB_NOT_FIELDS).with_aliases(&["not"]),
                    choice("scope", GITLAB_SCOPES),
                    text("search"),
                    text("updated_before"),
                    integer("weight"),
                    flag("with_labels_details"),
                ],
            )
            .with_exclusive("assignee", "assignee_id")
            .with_exclusive("author_id", "author_username")
            .with_exclusive("iteration_id", "iteration_title")
    }

    /// Gitea extension: item type and user/text filters.
    #[must_use]
    pub fn gitea() -> Self {
        Self::generic().extend(
            "GiteaListIssuesParams",
            vec![
                choice("type", GITEA_TYPES),
                text("q"),
                text("before"),
                text("created_by"),
                text("mentioned_by"),
            ],
        )
    }

    /// Returns a new schema with `fields` added. A field whose name already
    /// exists replaces the earlier definition.
    #[must_use]
    pub fn extend(mut self, name: &'static str, fields: Vec<FieldSpec>) -> Self {
        self.name = name;
        for field in fields {
            if let Some(existing) = self
                .fields
                .iter_mut()
                .find(|candidate| candidate.name == field.name)
            {
                *existing = field;
            } else {
                self.fields.push(field);
            }
        }
        self
    }

    /// Declares two fields that must not both be set.
    #[must_use]
    pub fn with_exclusive(mut self, first: &'static str, second: &'static str) -> Self {
        self.exclusive.push((first, second));
        self
    }

    /// Schema name used in validation reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Field definitions in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Mutually exclusive field pairs.
    #[must_use]
    pub fn exclusive_pairs(&self) -> &[(&'static str, &'static str)] {
        &self.exclusive
    }

    /// Finds the field that accepts `key`, by canonical name or alias.
    #[must_use]
    pub fn field_for_key(&self, key: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|field| field.accepted_keys().any(|accepted| accepted == key))
    }

    /// Every accepted input key, sorted.
    #[must_use]
    pub fn supported_fields(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .fields
            .iter()
            .flat_map(FieldSpec::accepted_keys)
            .map(ToOwned::to_owned)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}
