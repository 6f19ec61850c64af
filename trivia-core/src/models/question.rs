//! Question records and creation input

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::category::CategoryId;
use super::validation::{integer_field, ValidationError};

/// Server-assigned question identifier
pub type QuestionId = i32;

/// A stored trivia question, exactly as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// Validated input for inserting a question.
///
/// All four fields are required and must be "truthy": non-empty text,
/// non-zero category and difficulty. Text is stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: i32,
}

impl NewQuestion {
    /// Create a new question.
    ///
    /// # Example
    /// ```
    /// use trivia_core::models::NewQuestion;
    ///
    /// assert!(NewQuestion::new("Who painted the Mona Lisa?", "Leonardo", 2, 1).is_ok());
    /// assert!(NewQuestion::new("", "Leonardo", 2, 1).is_err());
    /// assert!(NewQuestion::new("Who?", "Leonardo", 0, 1).is_err());
    /// ```
    pub fn new(
        question: &str,
        answer: &str,
        category: CategoryId,
        difficulty: i32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            question: non_empty("question", question)?,
            answer: non_empty("answer", answer)?,
            category: non_zero("category", category)?,
            difficulty: non_zero("difficulty", difficulty)?,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// Attach the id assigned by a store.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value.to_owned())
}

fn non_zero(field: &'static str, value: i32) -> Result<i32, ValidationError> {
    if value == 0 {
        return Err(ValidationError::Zero { field });
    }
    Ok(value)
}

/// Loosely-typed creation body as sent by clients.
///
/// `category` and `difficulty` may be numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<Value>,
    pub difficulty: Option<Value>,
}

impl TryFrom<QuestionDraft> for NewQuestion {
    type Error = ValidationError;

    fn try_from(draft: QuestionDraft) -> Result<Self, Self::Error> {
        let question = draft.question.ok_or(ValidationError::Empty { field: "question" })?;
        let answer = draft.answer.ok_or(ValidationError::Empty { field: "answer" })?;
        let category = integer_field("category", draft.category.as_ref())?
            .ok_or(ValidationError::Empty { field: "category" })?;
        let difficulty = integer_field("difficulty", draft.difficulty.as_ref())?
            .ok_or(ValidationError::Empty { field: "difficulty" })?;

        Self::new(&question, &answer, category, difficulty)
    }
}
