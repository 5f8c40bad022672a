//! Front-end page serving.

use std::path::Path as FsPath;

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::fs;
use tracing::warn;

use crate::state::AppState;

/// Create the static files router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(serve_index))
        .route("/static/{*path}", get(serve_static))
}

async fn serve_index(State(state): State<AppState>) -> Response {
    serve_file(state.static_dir(), "index.html").await
}

/// Serve a file from the front-end directory.
async fn serve_static(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    serve_file(state.static_dir(), &path).await
}

async fn serve_file(static_dir: &FsPath, path: &str) -> Response {
    // Security: prevent path traversal
    let path = path.trim_start_matches('/');
    if path.is_empty() || path.contains("..") || path.contains('\0') {
        return not_found();
    }

    let file_path = static_dir.join(path);

    let content = match fs::read(&file_path).await {
        Ok(content) => content,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %file_path.display(), error = %e, "failed to read static file");
            }
            return not_found();
        }
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime_from_path(&file_path)),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        content,
    )
        .into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

fn mime_from_path(path: &FsPath) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
