//! Issue model: reported problems with a free-text severity and status.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::non_blank;
use crate::error::{AppError, AppResult};

/// Severity used when the caller omits one.
pub const DEFAULT_SEVERITY: &str = "low";

/// Status used when the caller omits one.
pub const DEFAULT_STATUS: &str = "open";

/// A stored issue.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Issue {
    pub id: i64,
    pub title: String,

    /// Opaque text, e.g. low/medium/high/critical.
    pub severity: String,

    /// Opaque text, e.g. open/in_progress/closed.
    pub status: String,

    /// Assigned by the store at insert time.
    pub created_at: DateTime<Utc>,
}

/// Raw issue-creation request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateIssue {
    pub title: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
}

/// Validated issue-creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub severity: String,
    pub status: String,
}

/// Optional exact-match filters for listing issues.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueFilter {
    pub severity: Option<String>,
    pub status: Option<String>,
}

impl CreateIssue {
    /// Require a title and fill in the default severity and status.
    pub fn validate(self) -> AppResult<NewIssue> {
        let title = non_blank(self.title)
            .ok_or_else(|| AppError::validation("missing required field(s): title"))?;

        Ok(NewIssue {
            title,
            severity: non_blank(self.severity).unwrap_or_else(|| DEFAULT_SEVERITY.to_string()),
            status: non_blank(self.status).unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        })
    }
}

impl IssueFilter {
    fn severity(&self) -> Option<&str> {
        self.severity.as_deref().filter(|s| !s.is_empty())
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

impl Issue {
    /// List issues newest first, narrowed by any filters given.
    pub async fn list(pool: &SqlitePool, filter: &IssueFilter) -> Result<Vec<Self>> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, title, severity, status, created_at FROM issues");

        let mut clause = " WHERE ";
        if let Some(severity) = filter.severity() {
            query.push(clause).push("severity = ").push_bind(severity);
            clause = " AND ";
        }
        if let Some(status) = filter.status() {
            query.push(clause).push("status = ").push_bind(status);
        }
        query.push(" ORDER BY created_at DESC, id DESC");

        let issues = query
            .build_query_as::<Self>()
            .fetch_all(pool)
            .await
            .context("failed to list issues")?;

        Ok(issues)
    }

    /// Insert an issue and return the stored row.
    pub async fn create(pool: &SqlitePool, input: &NewIssue) -> Result<Self> {
        let issue = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO issues (title, severity, status)
            VALUES (?, ?, ?)
            RETURNING id, title, severity, status, created_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.severity)
        .bind(&input.status)
        .fetch_one(pool)
        .await
        .context("failed to create issue")?;

        Ok(issue)
    }
}
