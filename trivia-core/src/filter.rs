//! Composable question filters
//!
//! A filter is a conjunction of optional predicates. Stores translate it
//! into their own query language; [`QuestionFilter::matches`] is the
//! reference semantics.

use std::collections::BTreeSet;

use crate::models::{CategoryId, Question, QuestionId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    /// Only questions in this category
    pub category: Option<CategoryId>,
    /// Skip questions with these ids
    pub exclude: BTreeSet<QuestionId>,
    /// Case-insensitive substring of the question text
    pub text: Option<String>,
}

impl QuestionFilter {
    /// A filter that matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    pub fn excluding<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = QuestionId>,
    {
        self.exclude.extend(ids);
        self
    }

    pub fn containing(mut self, term: impl Into<String>) -> Self {
        self.text = Some(term.into());
        self
    }

    pub fn matches(&self, question: &Question) -> bool {
        if let Some(category) = self.category {
            if question.category != category {
                return false;
            }
        }

        if self.exclude.contains(&question.id) {
            return false;
        }

        match &self.text {
            Some(term) => question
                .question
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        }
    }
}
