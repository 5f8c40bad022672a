//! Plugin model and creation input.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqlitePool};

use super::non_blank;
use crate::error::{AppError, AppResult};
use crate::tagging;

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted rating.
pub const MAX_RATING: f64 = 5.0;

/// A stored plugin.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Plugin {
    /// System-assigned identifier.
    pub id: i64,

    pub name: String,

    pub author: String,

    pub version: String,

    /// Rating in `[0.0, 5.0]`.
    pub rating: f64,
}

/// A plugin together with the names of its tags.
#[derive(Debug, Clone, Serialize)]
pub struct PluginWithTags {
    #[serde(flatten)]
    pub plugin: Plugin,

    /// Tag names sorted ascending.
    pub tags: Vec<String>,
}

/// Raw plugin-creation request body.
///
/// Every field is optional so that missing fields surface as validation
/// errors naming the field rather than as body rejections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlugin {
    pub name: Option<String>,
    pub author: Option<String>,
    pub version: Option<String>,
    pub rating: Option<f64>,
    pub tags: Option<Vec<String>>,
}

/// Validated plugin-creation input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlugin {
    pub name: String,
    pub author: String,
    pub version: String,
    pub rating: f64,

    /// Distinct, trimmed, non-empty tag names in first-seen order.
    pub tags: Vec<String>,
}

impl CreatePlugin {
    /// Check required fields and the rating range.
    ///
    /// Missing fields are all reported at once; the rating range is only
    /// checked once every field is present.
    pub fn validate(self) -> AppResult<NewPlugin> {
        let name = non_blank(self.name);
        let author = non_blank(self.author);
        let version = non_blank(self.version);

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push("name");
        }
        if author.is_none() {
            missing.push("author");
        }
        if version.is_none() {
            missing.push("version");
        }
        if self.rating.is_none() {
            missing.push("rating");
        }

        let (Some(name), Some(author), Some(version), Some(rating)) =
            (name, author, version, self.rating)
        else {
            return Err(AppError::validation(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )));
        };

        if !rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AppError::validation(format!(
                "rating must be a number between {MIN_RATING} and {MAX_RATING}"
            )));
        }

        let tags = tagging::distinct_tag_names(self.tags.iter().flatten());

        Ok(NewPlugin {
            name,
            author,
            version,
            rating,
            tags,
        })
    }
}

impl Plugin {
    /// Insert a plugin row and return its assigned id.
    pub async fn insert(conn: &mut SqliteConnection, input: &NewPlugin) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO plugins (name, author, version, rating)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(&input.author)
        .bind(&input.version)
        .bind(input.rating)
        .fetch_one(conn)
        .await
        .context("failed to insert plugin")?;

        Ok(id)
    }

    /// Find a plugin by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>> {
        let plugin = sqlx::query_as::<_, Self>(
            "SELECT id, name, author, version, rating FROM plugins WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch plugin")?;

        Ok(plugin)
    }

    /// List all plugins, best rated first, ties broken by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>> {
        let plugins = sqlx::query_as::<_, Self>(
            "SELECT id, name, author, version, rating FROM plugins ORDER BY rating DESC, name ASC, id ASC",
        )
        .fetch_all(pool)
        .await
        .context("failed to list plugins")?;

        Ok(plugins)
    }

    /// Names of the tags linked to a plugin, sorted ascending.
    pub async fn tag_names(pool: &SqlitePool, id: i64) -> Result<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT t.name
            FROM tags t
            INNER JOIN plugin_tags pt ON pt.tag_id = t.id
            WHERE pt.plugin_id = ?
            ORDER BY t.name
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await
        .context("failed to fetch plugin tags")?;

        Ok(names)
    }
}
