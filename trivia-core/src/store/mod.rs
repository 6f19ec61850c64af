//! Storage seams for questions and categories
//!
//! Handlers and the quiz selector only see these traits, so the same
//! logic runs against PostgreSQL in production and memory in tests.

#[cfg(feature = "memory")]
pub mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::filter::QuestionFilter;
use crate::models::{Category, NewQuestion, Question, QuestionId};

#[cfg(feature = "memory")]
pub use memory::MemoryStore;

/// Persistent collection of questions
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Questions matching `filter`, ordered by id.
    async fn find(&self, filter: &QuestionFilter) -> Result<Vec<Question>>;

    async fn get(&self, id: QuestionId) -> Result<Option<Question>>;

    /// Insert and return the stored record with its assigned id.
    async fn insert(&self, question: NewQuestion) -> Result<Question>;

    /// Delete by id. Returns `false` when nothing was deleted.
    async fn delete(&self, id: QuestionId) -> Result<bool>;
}

/// Persistent collection of categories
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories, ordered by type.
    async fn list(&self) -> Result<Vec<Category>>;
}
