//! CLI operation handlers.
//!
//! - [`list_issues`]: list one page of issues for the configured repository
//! - [`logging`]: `tracing` subscriber setup
//!
//! Output formatting utilities are in [`output`].

pub mod list_issues;
pub mod logging;
pub mod output;
