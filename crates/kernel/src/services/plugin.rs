//! Plugin service: plugin creation with tags, plugin and tag listing.
//!
//! A plugin row and all of its tag links are written in one transaction, so
//! a failure while tagging rolls the plugin back as well.

use std::sync::Arc;

use anyhow::Result;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{CreatePlugin, NewPlugin, Plugin, PluginWithTags, Tag};
use crate::tagging::{self, LinkOutcome};

/// Service for creating and reading plugins and their tags.
pub struct PluginService {
    pool: SqlitePool,
}

impl PluginService {
    /// Create a new PluginService.
    pub fn new(pool: SqlitePool) -> Arc<Self> {
        Arc::new(Self { pool })
    }

    /// Validate and store a plugin, then resolve and link each of its tags.
    ///
    /// Returns the new plugin id once every link is in place.
    pub async fn create_plugin(&self, input: CreatePlugin) -> AppResult<i64> {
        let plugin = input.validate()?;

        let mut tx = self.pool.begin().await?;

        match insert_with_tags(&mut *tx, &plugin).await {
            Ok(plugin_id) => {
                tx.commit().await?;
                info!(
                    plugin_id,
                    name = %plugin.name,
                    tags = plugin.tags.len(),
                    "plugin created"
                );
                Ok(plugin_id)
            }
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    warn!(error = %rollback, "failed to roll back plugin creation");
                }
                warn!(name = %plugin.name, "plugin creation rolled back");
                Err(e.into())
            }
        }
    }

    /// List all plugins, best rated first.
    pub async fn list_plugins(&self) -> AppResult<Vec<Plugin>> {
        Ok(Plugin::list(&self.pool).await?)
    }

    /// Fetch one plugin with its tag names.
    pub async fn get_plugin(&self, id: i64) -> AppResult<PluginWithTags> {
        let plugin = Plugin::find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::NotFound)?;
        let tags = Plugin::tag_names(&self.pool, id).await?;

        Ok(PluginWithTags { plugin, tags })
    }

    /// List all tags ordered by name.
    pub async fn list_tags(&self) -> AppResult<Vec<Tag>> {
        Ok(Tag::list(&self.pool).await?)
    }
}

async fn insert_with_tags(conn: &mut SqliteConnection, plugin: &NewPlugin) -> Result<i64> {
    // Writing first takes the SQLite write lock before any tag lookup, so
    // concurrent creations queue on busy_timeout instead of deadlocking.
    let plugin_id = Plugin::insert(conn, plugin).await?;

    for name in &plugin.tags {
        let Some(tag_id) = tagging::resolve_tag(conn, name).await?.tag_id() else {
            continue;
        };

        if tagging::link(conn, plugin_id, tag_id).await? == LinkOutcome::AlreadyLinked {
            debug!(plugin_id, tag = %name, "tag already linked");
        }
    }

    Ok(plugin_id)
}
