//! Quiz play endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use trivia_core::{ErrorKind, Question, QuizBody, QuizRequest, QuizSelector};

use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;

/// Next quiz question; `question` is null once the pool is exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - next unseen question for the chosen category
async fn next_question(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<QuizBody>,
) -> Result<Json<QuizResponse>, ApiError> {
    // A missing quiz_category is reported as 422, not 400
    let request = QuizRequest::try_from(body).map_err(|e| match e.kind() {
        ErrorKind::InvalidArgument => ApiError::unprocessable(e.to_string()),
        _ => ApiError::from(e),
    })?;

    let question = QuizSelector::new(&*state.store)
        .next_question(&request)
        .await?;

    if question.is_none() {
        tracing::debug!(category = ?request.category, "quiz pool exhausted");
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
