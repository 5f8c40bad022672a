//! Storage schema: plugins, tags, plugin_tags, issues, faqs.
//!
//! Applied at startup. Every statement is idempotent so restarting against
//! an existing database file is a no-op.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::debug;

const STATEMENTS: &[(&str, &str)] = &[
    (
        "plugins",
        r#"
        CREATE TABLE IF NOT EXISTS plugins (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            name    TEXT NOT NULL CHECK (length(name) > 0),
            author  TEXT NOT NULL CHECK (length(author) > 0),
            version TEXT NOT NULL CHECK (length(version) > 0),
            rating  REAL NOT NULL CHECK (rating >= 0.0 AND rating <= 5.0)
        )
        "#,
    ),
    (
        "tags",
        r#"
        CREATE TABLE IF NOT EXISTS tags (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE CHECK (length(name) > 0)
        )
        "#,
    ),
    (
        "plugin_tags",
        r#"
        CREATE TABLE IF NOT EXISTS plugin_tags (
            plugin_id INTEGER NOT NULL REFERENCES plugins (id) ON DELETE CASCADE,
            tag_id    INTEGER NOT NULL REFERENCES tags (id) ON DELETE CASCADE,
            PRIMARY KEY (plugin_id, tag_id)
        )
        "#,
    ),
    (
        "plugin_tags_tag_idx",
        "CREATE INDEX IF NOT EXISTS plugin_tags_tag_idx ON plugin_tags (tag_id)",
    ),
    (
        "issues",
        r#"
        CREATE TABLE IF NOT EXISTS issues (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            title      TEXT NOT NULL CHECK (length(title) > 0),
            severity   TEXT NOT NULL DEFAULT 'low',
            status     TEXT NOT NULL DEFAULT 'open',
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        )
        "#,
    ),
    (
        "issues_created_idx",
        "CREATE INDEX IF NOT EXISTS issues_created_idx ON issues (created_at DESC, id DESC)",
    ),
    (
        "faqs",
        r#"
        CREATE TABLE IF NOT EXISTS faqs (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL CHECK (length(question) > 0),
            answer   TEXT NOT NULL CHECK (length(answer) > 0)
        )
        "#,
    ),
];

/// Create any missing tables and indexes.
pub async fn apply(pool: &SqlitePool) -> Result<()> {
    for (name, sql) in STATEMENTS {
        sqlx::query(sql)
            .execute(pool)
            .await
            .with_context(|| format!("failed to create {name}"))?;
        debug!(object = name, "schema object ready");
    }

    Ok(())
}
