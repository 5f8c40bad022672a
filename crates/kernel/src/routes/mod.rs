//! HTTP route handlers.

pub mod faq;
pub mod health;
pub mod issue;
pub mod plugin;
pub mod static_files;

use axum::Router;

use crate::state::AppState;

/// All routes served by the kernel, without middleware.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(plugin::router())
        .merge(issue::router())
        .merge(faq::router())
        .merge(static_files::router())
}
