//! FAQ API routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};

use crate::error::AppResult;
use crate::models::{CreateFaq, Faq};
use crate::state::AppState;

/// Create the FAQ router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/faqs", get(list_faqs).post(create_faq))
}

async fn list_faqs(State(state): State<AppState>) -> AppResult<Json<Vec<Faq>>> {
    Ok(Json(Faq::list(state.db()).await?))
}

async fn create_faq(
    State(state): State<AppState>,
    payload: Result<Json<CreateFaq>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Faq>)> {
    let Json(input) = payload?;
    let (question, answer) = input.validate()?;
    let faq = Faq::create(state.db(), &question, &answer).await?;

    Ok((StatusCode::CREATED, Json(faq)))
}
