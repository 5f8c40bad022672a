//! FAQ model.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::non_blank;
use crate::error::{AppError, AppResult};

/// A stored question/answer pair.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

/// Raw FAQ-creation request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFaq {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl CreateFaq {
    /// Require both a question and an answer. Returns `(question, answer)`.
    pub fn validate(self) -> AppResult<(String, String)> {
        match (non_blank(self.question), non_blank(self.answer)) {
            (Some(q), Some(a)) => Ok((q, a)),
            (None, Some(_)) => Err(AppError::validation("missing required field(s): question")),
            (Some(_), None) => Err(AppError::validation("missing required field(s): answer")),
            (None, None) => Err(AppError::validation(
                "missing required field(s): question, answer",
            )),
        }
    }
}

impl Faq {
    /// List all FAQs in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>> {
        let faqs = sqlx::query_as::<_, Self>("SELECT id, question, answer FROM faqs ORDER BY id")
            .fetch_all(pool)
            .await
            .context("failed to list faqs")?;

        Ok(faqs)
    }

    /// Insert a FAQ and return the stored row.
    pub async fn create(pool: &SqlitePool, question: &str, answer: &str) -> Result<Self> {
        let faq = sqlx::query_as::<_, Self>(
            "INSERT INTO faqs (question, answer) VALUES (?, ?) RETURNING id, question, answer",
        )
        .bind(question)
        .bind(answer)
        .fetch_one(pool)
        .await
        .context("failed to create faq")?;

        Ok(faq)
    }
}
