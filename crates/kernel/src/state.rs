//! Application state shared across all handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::Config;
use crate::db;
use crate::schema;
use crate::services::PluginService;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// SQLite connection pool.
    db: SqlitePool,

    /// Plugin and tag service.
    plugins: Arc<PluginService>,

    /// Directory served for the front-end pages.
    static_dir: PathBuf,
}

impl AppState {
    /// Open the database, apply the schema, and build the services.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = db::create_pool(config)
            .await
            .context("failed to create database pool")?;

        schema::apply(&db)
            .await
            .context("failed to apply storage schema")?;

        info!(url = %config.database_url, "storage schema ready");

        Ok(Self::from_parts(db, config.static_dir.clone()))
    }

    /// Build state around an already-prepared pool.
    pub fn from_parts(db: SqlitePool, static_dir: PathBuf) -> Self {
        let plugins = PluginService::new(db.clone());

        Self {
            inner: Arc::new(AppStateInner {
                db,
                plugins,
                static_dir,
            }),
        }
    }

    /// Get the database pool.
    pub fn db(&self) -> &SqlitePool {
        &self.inner.db
    }

    /// Get the plugin service.
    pub fn plugins(&self) -> &Arc<PluginService> {
        &self.inner.plugins
    }

    /// Get the front-end directory.
    pub fn static_dir(&self) -> &Path {
        &self.inner.static_dir
    }

    /// Check if the database is reachable.
    pub async fn database_healthy(&self) -> bool {
        db::check_health(&self.inner.db).await
    }
}
