//! Tag resolver: map a tag name to its id, creating the tag on first use.

use anyhow::{Context, Result, anyhow};
use sqlx::SqliteConnection;
use tracing::debug;

use super::normalize_tag_name;
use crate::models::Tag;

/// Outcome of resolving a tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The name was blank after trimming; nothing to link.
    Skipped,

    /// The tag already existed.
    Existing(i64),

    /// The tag was created by this call.
    Created(i64),
}

impl Resolution {
    /// The resolved tag id, if any.
    pub fn tag_id(self) -> Option<i64> {
        match self {
            Resolution::Skipped => None,
            Resolution::Existing(id) | Resolution::Created(id) => Some(id),
        }
    }
}

/// Resolve a tag name to its id, inserting the tag if it does not exist.
///
/// A uniqueness violation on insert means another writer created the same
/// tag first; the existing row is re-fetched instead of failing.
pub async fn resolve_tag(conn: &mut SqliteConnection, raw_name: &str) -> Result<Resolution> {
    let Some(name) = normalize_tag_name(raw_name) else {
        return Ok(Resolution::Skipped);
    };

    if let Some(id) = Tag::find_id_by_name(conn, name).await? {
        return Ok(Resolution::Existing(id));
    }

    insert_or_fetch(conn, name).await
}

/// Insert a tag the caller believes is missing, falling back to the row
/// another writer committed first.
async fn insert_or_fetch(conn: &mut SqliteConnection, name: &str) -> Result<Resolution> {
    match Tag::insert(conn, name).await {
        Ok(id) => {
            debug!(tag = name, tag_id = id, "created tag");
            Ok(Resolution::Created(id))
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            debug!(tag = name, "tag created concurrently, re-fetching");
            Tag::find_id_by_name(conn, name)
                .await?
                .map(Resolution::Existing)
                .ok_or_else(|| anyhow!("tag {name:?} missing after uniqueness conflict"))
        }
        Err(e) => Err(e).context("failed to insert tag"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn skipped_has_no_id() {
        assert_eq!(Resolution::Skipped.tag_id(), None);
        assert_eq!(Resolution::Existing(3).tag_id(), Some(3));
        assert_eq!(Resolution::Created(4).tag_id(), Some(4));
    }

    async fn store() -> sqlx::SqlitePool {
        let pool = crate::db::create_pool(&crate::Config::in_memory())
            .await
            .unwrap();
        crate::schema::apply(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn insert_conflict_falls_back_to_existing_row() {
        let pool = store().await;
        let mut conn = pool.acquire().await.unwrap();

        // Another writer committed the tag between lookup and insert.
        let winner = Tag::insert(&mut conn, "debug").await.unwrap();

        let resolution = insert_or_fetch(&mut conn, "debug").await.unwrap();
        assert_eq!(resolution, Resolution::Existing(winner));

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags WHERE name = 'debug'")
            .fetch_one(&mut *conn)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn duplicate_insert_is_a_unique_violation() {
        let pool = store().await;
        let mut conn = pool.acquire().await.unwrap();

        Tag::insert(&mut conn, "ui").await.unwrap();
        let err = Tag::insert(&mut conn, "ui").await.unwrap_err();

        match err {
            sqlx::Error::Database(e) => assert!(e.is_unique_violation(), "{e}"),
            other => panic!("expected a database error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn insert_of_new_name_reports_created() {
        let pool = store().await;
        let mut conn = pool.acquire().await.unwrap();

        let resolution = insert_or_fetch(&mut conn, "perf").await.unwrap();
        assert!(matches!(resolution, Resolution::Created(_)));
    }
}
