//! Issue API routes.

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::get,
};

use crate::error::AppResult;
use crate::models::{CreateIssue, Issue, IssueFilter};
use crate::state::AppState;

/// Create the issue router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/issues", get(list_issues).post(create_issue))
}

async fn list_issues(
    State(state): State<AppState>,
    filter: Result<Query<IssueFilter>, QueryRejection>,
) -> AppResult<Json<Vec<Issue>>> {
    let Query(filter) = filter?;
    Ok(Json(Issue::list(state.db(), &filter).await?))
}

async fn create_issue(
    State(state): State<AppState>,
    payload: Result<Json<CreateIssue>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Issue>)> {
    let Json(input) = payload?;
    let issue = Issue::create(state.db(), &input.validate()?).await?;

    tracing::info!(issue_id = issue.id, severity = %issue.severity, "issue created");

    Ok((StatusCode::CREATED, Json(issue)))
}
