//! Plugin tagging subsystem.
//!
//! This module provides:
//! - Tag name normalization (trim, drop empties, de-duplicate)
//! - `resolve_tag`: get-or-create a tag id by name
//! - `link`: idempotent plugin/tag association writer

mod linker;
mod resolver;

pub use linker::{LinkOutcome, link};
pub use resolver::{Resolution, resolve_tag};

use std::collections::HashSet;

/// Trim a raw tag name, returning `None` when nothing is left.
pub fn normalize_tag_name(raw: &str) -> Option<&str> {
    let name = raw.trim();
    (!name.is_empty()).then_some(name)
}

/// Normalize a list of raw tag names into distinct names, keeping the order
/// in which each name first appears.
pub fn distinct_tag_names<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for item in raw {
        let Some(name) = normalize_tag_name(item.as_ref()) else {
            continue;
        };
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize_tag_name("  debug\t"), Some("debug"));
    }

    #[test]
    fn normalize_rejects_blank() {
        assert_eq!(normalize_tag_name(""), None);
        assert_eq!(normalize_tag_name("   "), None);
    }

    #[test]
    fn distinct_names_drop_duplicates_after_trim() {
        assert_eq!(
            distinct_tag_names(["ui", "ui", " debug", "debug ", ""]),
            vec!["ui".to_string(), "debug".to_string()]
        );
    }

    #[test]
    fn distinct_names_are_case_sensitive() {
        assert_eq!(
            distinct_tag_names(["UI", "ui"]),
            vec!["UI".to_string(), "ui".to_string()]
        );
    }

    #[test]
    fn distinct_names_of_nothing_is_empty() {
        assert!(distinct_tag_names(Vec::<String>::new()).is_empty());
    }
}
