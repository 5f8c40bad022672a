//! Tag model.
//!
//! Tags are created lazily the first time a plugin names them and are never
//! deleted. Names are unique (case-sensitive).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqlitePool};

/// A tag shared by every plugin that references its name.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    /// System-assigned identifier.
    pub id: i64,

    /// Unique tag name.
    pub name: String,
}

impl Tag {
    /// Look up a tag id by exact name.
    pub async fn find_id_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<i64>> {
        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM tags WHERE name = ?")
            .bind(name)
            .fetch_optional(conn)
            .await
            .context("failed to look up tag")?;

        Ok(id)
    }

    /// Insert a tag row and return its new id.
    ///
    /// The raw driver error is returned so callers can tell a uniqueness
    /// violation apart from other failures.
    pub async fn insert(conn: &mut SqliteConnection, name: &str) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>("INSERT INTO tags (name) VALUES (?) RETURNING id")
            .bind(name)
            .fetch_one(conn)
            .await
    }

    /// List all tags ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>> {
        let tags = sqlx::query_as::<_, Self>("SELECT id, name FROM tags ORDER BY name")
            .fetch_all(pool)
            .await
            .context("failed to list tags")?;

        Ok(tags)
    }
}
