//! Domain models with validation at construction
//!
//! Client input is validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod category;
pub mod question;
pub mod validation;

pub use category::{category_map, Category, CategoryId, DEFAULT_CATEGORIES};
pub use question::{NewQuestion, Question, QuestionDraft, QuestionId};
pub use validation::{integer_field, ValidationError};
