//! Quiz selector - picks the next unseen question for a game
//!
//! The candidate pool is a single filter composition: an optional
//! category predicate AND an id-exclusion predicate. One question is
//! drawn uniformly from the pool; an empty pool ends the game.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, TriviaError};
use crate::filter::QuestionFilter;
use crate::models::{integer_field, CategoryId, Question, QuestionId};
use crate::store::QuestionStore;

/// Category id clients send to mean "every category"
pub const ALL_CATEGORIES: CategoryId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Only(CategoryId),
}

impl From<CategoryId> for QuizCategory {
    fn from(id: CategoryId) -> Self {
        if id == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(id)
        }
    }
}

/// Play state for one quiz round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub category: QuizCategory,
    pub previous_questions: BTreeSet<QuestionId>,
}

impl QuizRequest {
    pub fn new<I>(category: QuizCategory, previous_questions: I) -> Self
    where
        I: IntoIterator<Item = QuestionId>,
    {
        Self {
            category,
            previous_questions: previous_questions.into_iter().collect(),
        }
    }

    /// Filter describing the candidate pool.
    pub fn filter(&self) -> QuestionFilter {
        let filter = QuestionFilter::all().excluding(self.previous_questions.iter().copied());
        match self.category {
            QuizCategory::All => filter,
            QuizCategory::Only(id) => filter.in_category(id),
        }
    }
}

/// `quiz_category` as sent by clients: `{"id": 0, "type": "click"}`.
/// Only `id` decides selection; `type` is a display label and is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategoryBody {
    pub id: Option<Value>,
}

/// Request body for `POST /quizzes`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizBody {
    pub quiz_category: Option<QuizCategoryBody>,
    pub previous_questions: Option<Vec<QuestionId>>,
}

impl TryFrom<QuizBody> for QuizRequest {
    type Error = TriviaError;

    fn try_from(body: QuizBody) -> Result<Self> {
        let category = body
            .quiz_category
            .ok_or_else(|| TriviaError::invalid_argument("quiz_category", "missing"))?;

        let id = integer_field("quiz_category.id", category.id.as_ref())?
            .ok_or_else(|| TriviaError::invalid_argument("quiz_category.id", "missing"))?;

        Ok(Self::new(
            QuizCategory::from(id),
            body.previous_questions.unwrap_or_default(),
        ))
    }
}

/// Draw one question uniformly from `pool`.
pub fn pick<R>(pool: &[Question], rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    pool.choose(rng).cloned()
}

/// Resolves the next quiz question against a store handle
pub struct QuizSelector<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> QuizSelector<'a, S>
where
    S: QuestionStore + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Next unseen question, or `None` once the pool is exhausted.
    pub async fn next_question(&self, request: &QuizRequest) -> Result<Option<Question>> {
        let pool = self.store.find(&request.filter()).await?;
        tracing::debug!(
            category = ?request.category,
            excluded = request.previous_questions.len(),
            candidates = pool.len(),
            "quiz candidate pool"
        );

        Ok(pick(&pool, &mut rand::thread_rng()))
    }
}
