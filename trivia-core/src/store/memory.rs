//! In-memory store used by tests and `serve --in-memory`

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CategoryStore, QuestionStore};
use crate::error::Result;
use crate::filter::QuestionFilter;
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId, DEFAULT_CATEGORIES};

#[derive(Default)]
struct Tables {
    questions: BTreeMap<QuestionId, Question>,
    categories: Vec<Category>,
    next_question_id: QuestionId,
}

/// Thread-safe in-memory question and category store.
///
/// Ids are assigned sequentially from 1 and never reused.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the default categories (ids 1..=6).
    pub fn with_default_categories() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(kind, id)| Category {
                id,
                kind: (*kind).to_owned(),
            })
            .collect();

        Self {
            tables: RwLock::new(Tables {
                categories,
                ..Tables::default()
            }),
        }
    }

    /// Add a category, returning its id.
    pub async fn add_category(&self, kind: &str) -> CategoryId {
        let mut tables = self.tables.write().await;
        let id = tables.categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        tables.categories.push(Category {
            id,
            kind: kind.to_owned(),
        });
        id
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn find(&self, filter: &QuestionFilter) -> Result<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect())
    }

    async fn get(&self, id: QuestionId) -> Result<Option<Question>> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question> {
        let mut tables = self.tables.write().await;
        tables.next_question_id += 1;
        let stored = question.into_question(tables.next_question_id);
        tables.questions.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool> {
        Ok(self.tables.write().await.questions.remove(&id).is_some())
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Category>> {
        let mut categories = self.tables.read().await.categories.clone();
        categories.sort_by(|a, b| a.kind.cmp(&b.kind));
        Ok(categories)
    }
}
