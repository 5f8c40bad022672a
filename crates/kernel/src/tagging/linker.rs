//! Plugin-tag linker.

use anyhow::{Context, Result};
use sqlx::SqliteConnection;

/// Outcome of linking a plugin to a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// A new link row was written.
    Linked,

    /// The pair was already linked; nothing changed.
    AlreadyLinked,
}

/// Associate a plugin with a tag. Linking an existing pair is a no-op.
///
/// Both ids must refer to existing rows; the foreign keys on `plugin_tags`
/// reject anything else.
pub async fn link(conn: &mut SqliteConnection, plugin_id: i64, tag_id: i64) -> Result<LinkOutcome> {
    let result = sqlx::query("INSERT OR IGNORE INTO plugin_tags (plugin_id, tag_id) VALUES (?, ?)")
        .bind(plugin_id)
        .bind(tag_id)
        .execute(conn)
        .await
        .context("failed to link plugin to tag")?;

    Ok(if result.rows_affected() > 0 {
        LinkOutcome::Linked
    } else {
        LinkOutcome::AlreadyLinked
    })
}
