//! Plugin and tag API routes.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::get,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{CreatePlugin, Plugin, PluginWithTags, Tag};
use crate::state::AppState;

/// Create the plugin router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/plugins", get(list_plugins).post(create_plugin))
        .route("/api/plugins/{id}", get(get_plugin))
        .route("/api/tags", get(list_tags))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PluginCreatedResponse {
    message: &'static str,
    plugin_id: i64,
}

async fn list_plugins(State(state): State<AppState>) -> AppResult<Json<Vec<Plugin>>> {
    Ok(Json(state.plugins().list_plugins().await?))
}

async fn create_plugin(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlugin>, JsonRejection>,
) -> AppResult<(StatusCode, Json<PluginCreatedResponse>)> {
    let Json(input) = payload?;
    let plugin_id = state.plugins().create_plugin(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(PluginCreatedResponse {
            message: "Plugin created",
            plugin_id,
        }),
    ))
}

async fn get_plugin(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<PluginWithTags>> {
    // A non-numeric id can never name a stored plugin
    let Ok(Path(id)) = id else {
        return Err(AppError::NotFound);
    };

    Ok(Json(state.plugins().get_plugin(id).await?))
}

async fn list_tags(State(state): State<AppState>) -> AppResult<Json<Vec<Tag>>> {
    Ok(Json(state.plugins().list_tags().await?))
}
