//! Generic list-issues parameters: caller options, validated values and
//! platform wire parameters.
//!
//! Callers describe a query with [`ListIssuesOptions`] (or a raw
//! [`ParamBag`]). A [`ParamSchema`] validates the bag into
//! [`ValidatedParams`], and a platform transform rewrites those into
//! [`WireParams`], which render to query-string pairs.

use std::collections::BTreeMap;

use serde_json::Value;

mod schema;
mod validate;

pub use schema::{FieldKind, FieldSpec, ParamSchema};

/// Raw, unvalidated options keyed by field name.
pub type ParamBag = serde_json::Map<String, Value>;

/// Default number of results per page.
pub const DEFAULT_PER_PAGE: u32 = 30;
/// Largest page size any supported platform accepts.
pub const MAX_PER_PAGE: u32 = 100;
/// Default page number (1-based).
pub const DEFAULT_PAGE: u32 = 1;

/// A single validated parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Free text or a member of a fixed value set.
    Text(String),
    /// Whole number.
    Integer(i64),
    /// Boolean switch.
    Flag(bool),
    /// List of whole numbers, sent as repeated `key[]` pairs.
    IntegerList(Vec<i64>),
}

impl ParamValue {
    /// Returns the text value, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an integer.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Caller-facing options for one list-issues request.
///
/// Generic filters are typed fields; platform extensions (for example
/// GitLab's `assignee_id` or `issue_type`) go into `extra`. Everything is
/// validated by the platform's [`ParamSchema`] before a request is made.
///
/// # Example
///
/// ```
/// use issuegate::forge::params::ListIssuesOptions;
///
/// let options = ListIssuesOptions {
///     state: Some("open".to_owned()),
///     labels: vec!["bug".to_owned(), "ui".to_owned()],
///     ..ListIssuesOptions::default()
/// }
/// .with_param("issue_type", "incident");
///
/// let bag = options.to_bag();
/// assert_eq!(bag.get("state").and_then(|v| v.as_str()), Some("open"));
/// assert_eq!(bag.get("issue_type").and_then(|v| v.as_str()), Some("incident"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ListIssuesOptions {
    /// `open`, `closed` or `all`.
    pub state: Option<String>,
    /// Assignee username, `*` for any, `none` for unassigned.
    pub assignee: Option<String>,
    /// Milestone title, `*` for any, `none` for no milestone.
    pub milestone: Option<String>,
    /// Label names. Entries may themselves be comma-joined.
    pub labels: Vec<String>,
    /// Sort field.
    pub sort: Option<String>,
    /// `asc` or `desc`.
    pub direction: Option<String>,
    /// ISO-8601 timestamp; only issues updated at or after it are returned.
    pub since: Option<String>,
    /// Results per page (1 to 100).
    pub per_page: u32,
    /// Page number (1-based).
    pub page: u32,
    /// Platform-specific extra options.
    pub extra: ParamBag,
}

impl Default for ListIssuesOptions {
    fn default() -> Self {
        Self {
            state: None,
            assignee: None,
            milestone: None,
            labels: Vec::new(),
            sort: None,
            direction: None,
            since: None,
            per_page: DEFAULT_PER_PAGE,
            page: DEFAULT_PAGE,
            extra: ParamBag::new(),
        }
    }
}

impl ListIssuesOptions {
    /// Adds one platform-specific option.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Flattens the options into a raw bag for validation.
    ///
    /// Typed fields that are set take precedence over an `extra` entry with
    /// the same name.
    #[must_use]
    pub fn to_bag(&self) -> ParamBag {
        let mut bag = self.extra.clone();
        let text_fields = [
            ("state", &self.state),
            ("assignee", &self.assignee),
            ("milestone", &self.milestone),
            ("sort", &self.sort),
            ("direction", &self.direction),
            ("since", &self.since),
        ];
        for (name, value) in text_fields {
            if let Some(text) = value {
                bag.insert(name.to_owned(), Value::String(text.clone()));
            }
        }
        if !self.labels.is_empty() {
            bag.insert(
                "labels".to_owned(),
                Value::Array(self.labels.iter().cloned().map(Value::String).collect()),
            );
        }
        bag.insert("per_page".to_owned(), Value::from(self.per_page));
        bag.insert("page".to_owned(), Value::from(self.page));
        bag
    }
}

/// Parameters that passed schema validation, keyed by canonical field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedParams {
    values: BTreeMap<String, ParamValue>,
}

impl ValidatedParams {
    pub(crate) const fn new(values: BTreeMap<String, ParamValue>) -> Self {
        Self { values }
    }

    /// Looks up a field by canonical name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Looks up a text field by canonical name.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_text)
    }

    /// Returns true when the field was set (or defaulted).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of set fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Requested page size.
    #[must_use]
    pub fn per_page(&self) -> u32 {
        self.pagination_value("per_page", DEFAULT_PER_PAGE)
    }

    /// Requested page number.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.pagination_value("page", DEFAULT_PAGE)
    }

    fn pagination_value(&self, name: &str, fallback: u32) -> u32 {
        self.get(name)
            .and_then(ParamValue::as_integer)
            .and_then(|value| u32::try_from(value).ok())
            .unwrap_or(fallback)
    }

    /// Copies the validated values into wire parameters, unchanged.
    #[must_use]
    pub fn to_wire(&self) -> WireParams {
        WireParams {
            values: self.values.clone(),
        }
    }
}

/// Platform query parameters produced by a transform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireParams {
    values: BTreeMap<String, ParamValue>,
}

impl WireParams {
    /// Looks up a wire parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Looks up a text wire parameter.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_text)
    }

    /// Returns true when the wire parameter is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of wire parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when there are no wire parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over parameter names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Sets a wire parameter, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Removes and returns a wire parameter.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.values.remove(name)
    }

    /// Moves the value stored under `from` to `to`, if present.
    pub fn rename(&mut self, from: &str, to: &str) {
        if let Some(value) = self.values.remove(from) {
            self.values.insert(to.to_owned(), value);
        }
    }

    /// Renders the parameters as query-string pairs.
    ///
    /// Integer lists become repeated `name[]` pairs.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.values.len());
        for (name, value) in &self.values {
            match value {
                ParamValue::Text(text) => pairs.push((name.clone(), text.clone())),
                ParamValue::Integer(number) => pairs.push((name.clone(), number.to_string())),
                ParamValue::Flag(flag) => pairs.push((name.clone(), flag.to_string())),
                ParamValue::IntegerList(numbers) => pairs.extend(
                    numbers
                        .iter()
                        .map(|number| (format!("{name}[]"), number.to_string())),
                ),
            }
        }
        pairs
    }
}
