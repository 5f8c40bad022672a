//! Database models.

pub mod faq;
pub mod issue;
pub mod plugin;
pub mod tag;

pub use faq::{CreateFaq, Faq};
pub use issue::{CreateIssue, Issue, IssueFilter, NewIssue};
pub use plugin::{CreatePlugin, NewPlugin, Plugin, PluginWithTags};
pub use tag::Tag;

/// Trim a text field, treating an all-whitespace value as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
