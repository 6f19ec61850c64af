//! Question endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use trivia_core::models::{category_map, QuestionDraft};
use trivia_core::{
    paginate, CategoryId, NewQuestion, Question, QuestionFilter, QuestionId, TriviaError,
    QUESTIONS_PER_PAGE,
};

use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, IdPath, PageQuery};
use crate::http::server::AppState;

/// One page of all questions, with the category lookup the client needs
#[derive(Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub categories: BTreeMap<CategoryId, String>,
    pub current_category: Option<CategoryId>,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Single question response
#[derive(Serialize)]
pub struct QuestionResponse {
    pub success: bool,
    pub question: Question,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

/// Search request body
#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Search results for the requested page
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Count of questions on this page, not of all matches
    pub total_questions: usize,
}

/// GET /questions?page=N - paginated list ordered by id
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let selection = state.store.find(&QuestionFilter::all()).await?;
    let questions = paginate(page, QUESTIONS_PER_PAGE, &selection);

    if questions.is_empty() {
        return Err(ApiError::not_found("page", page.number()));
    }

    let categories = state.store.list().await?;

    Ok(Json(QuestionsResponse {
        success: true,
        categories: category_map(&categories),
        current_category: None,
        questions: questions.to_vec(),
        total_questions: selection.len(),
    }))
}

/// POST /questions - create a question (all four fields required)
async fn create_question(
    State(state): State<Arc<AppState>>,
    ApiJson(draft): ApiJson<QuestionDraft>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let new_question = NewQuestion::try_from(draft).map_err(TriviaError::from)?;
    let question = state.store.insert(new_question).await?;

    tracing::info!(id = question.id, category = question.category, "question created");

    Ok(Json(QuestionResponse {
        success: true,
        question,
    }))
}

/// GET /questions/{id} - fetch one question
async fn get_question(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("question", id))?;

    Ok(Json(QuestionResponse {
        success: true,
        question,
    }))
}

/// DELETE /questions/{id} - delete one question
async fn delete_question(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<DeletedResponse>, ApiError> {
    if !state.store.delete(id).await? {
        return Err(ApiError::not_found("question", id));
    }

    tracing::info!(id, "question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

/// POST /questions/search - case-insensitive substring search
///
/// Zero hits is a successful, empty result.
async fn search_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = req
        .search_term
        .ok_or_else(|| ApiError::unprocessable("searchTerm is required"))?;

    let selection = state
        .store
        .find(&QuestionFilter::all().containing(term))
        .await?;
    let questions = paginate(page, QUESTIONS_PER_PAGE, &selection).to_vec();

    tracing::debug!(matches = selection.len(), page = page.number(), "search");

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", get(get_question).delete(delete_question))
}
