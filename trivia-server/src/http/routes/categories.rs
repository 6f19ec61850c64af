//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use trivia_core::models::category_map;
use trivia_core::{paginate, CategoryId, Question, QuestionFilter, QUESTIONS_PER_PAGE};

use crate::http::error::ApiError;
use crate::http::extractors::{IdPath, PageQuery};
use crate::http::server::AppState;

/// Category listing response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<CategoryId, String>,
}

/// One page of questions in a category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: CategoryId,
}

/// GET /categories - all categories as `{id: type}`
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store.list().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

/// GET /categories/{id}/questions - paginated questions in one category
///
/// An unknown category and a page past the end are both 404.
async fn questions_by_category(
    State(state): State<Arc<AppState>>,
    IdPath(category_id): IdPath,
    PageQuery(page): PageQuery,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let selection = state
        .store
        .find(&QuestionFilter::all().in_category(category_id))
        .await?;

    let questions = paginate(page, QUESTIONS_PER_PAGE, &selection);
    if questions.is_empty() {
        return Err(ApiError::not_found("category", category_id));
    }

    tracing::debug!(
        category = category_id,
        page = page.number(),
        total = selection.len(),
        "questions by category"
    );

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: questions.to_vec(),
        total_questions: selection.len(),
        current_category: category_id,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
}
