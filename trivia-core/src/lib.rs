//! trivia-core: question model, pagination and quiz selection
//!
//! Storage is abstracted behind [`store::QuestionStore`] and
//! [`store::CategoryStore`]; everything here is independent of HTTP and SQL.

pub mod error;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod quiz;
pub mod store;

pub use error::{ErrorKind, Result, TriviaError};
pub use filter::QuestionFilter;
pub use models::{Category, CategoryId, NewQuestion, Question, QuestionId};
pub use pagination::{paginate, Page, PageParams, QUESTIONS_PER_PAGE};
pub use quiz::{QuizBody, QuizCategory, QuizRequest, QuizSelector};
pub use store::{CategoryStore, QuestionStore};

#[cfg(feature = "memory")]
pub use store::MemoryStore;
