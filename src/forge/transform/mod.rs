//! Per-platform rewriting of validated parameters into wire parameters.
//!
//! Transforms are pure: they read [`ValidatedParams`] and return a fresh
//! [`WireParams`]. Adding a platform means adding a transform; the validator
//! and the response normaliser stay untouched.

use super::params::{ParamValue, ValidatedParams, WireParams};

/// Maps generic parameter names and values onto one platform's vocabulary.
pub trait ParamTransform: Send + Sync {
    /// Rewrites validated parameters into wire parameters.
    fn transform(&self, params: &ValidatedParams) -> WireParams;
}

/// Passes validated parameters through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityTransform;

impl ParamTransform for IdentityTransform {
    fn transform(&self, params: &ValidatedParams) -> WireParams {
        params.to_wire()
    }
}

/// GitLab vocabulary.
///
/// GitLab uses `order_by` for the sort field and `sort` for the direction,
/// spells the open state `opened`, and capitalises the milestone sentinels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GitLabTransform;

impl ParamTransform for GitLabTransform {
    fn transform(&self, params: &ValidatedParams) -> WireParams {
        let mut wire = params.to_wire();

        if params.text("state") == Some("open") {
            wire.insert("state", "opened");
        }

        wire.rename("assignee", "assignee_username");

        match params.text("milestone") {
            Some("*") => wire.insert("milestone", "Any"),
            Some("none") => wire.insert("milestone", "None"),
            _ => {}
        }

        // Direction must move out of `sort` before the sort field is written
        // to `order_by`, since GitLab reuses the `sort` key for direction.
        let direction = wire.remove("direction");
        if let Some(sort) = wire.remove("sort") {
            let column = match sort.as_text() {
                Some("created") => Some("created_at"),
                Some("updated") => Some("updated_at"),
                _ => None,
            };
            wire.insert("order_by", column.map_or(sort, ParamValue::from));
        }
        if let Some(order) = direction {
            wire.insert("sort", order);
        }

        wire.rename("not_", "not");
        wire
    }
}

/// Gitea vocabulary: `limit` for the page size, `milestones` for the
/// milestone filter and `assigned_by` for the assignee.
///
/// Gitea's repository issues endpoint cannot sort, so `sort` and `direction`
/// are dropped with a warning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GiteaTransform;

impl ParamTransform for GiteaTransform {
    fn transform(&self, params: &ValidatedParams) -> WireParams {
        let mut wire = params.to_wire();
        wire.rename("per_page", "limit");
        wire.rename("milestone", "milestones");
        wire.rename("assignee", "assigned_by");
        for unsupported in ["sort", "direction"] {
            if let Some(value) = wire.remove(unsupported) {
                tracing::warn!(
                    parameter = unsupported,
                    ?value,
                    "gitea cannot sort repository issues; dropping parameter"
                );
            }
        }
        wire
    }
}
