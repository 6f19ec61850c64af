//! PostgreSQL-backed question and category store
//!
//! - find: one query built from the filter (no per-row lookups)
//! - insert: RETURNING the assigned id
//! - delete: single statement, reports whether a row was removed

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use trivia_core::{
    Category, CategoryStore, NewQuestion, Question, QuestionFilter, QuestionId, QuestionStore,
};

use super::DbError;

/// Question row from database
#[derive(Debug, Clone, FromRow)]
struct QuestionRow {
    id: i32,
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(r: QuestionRow) -> Self {
        Self {
            id: r.id,
            question: r.question,
            answer: r.answer,
            category: r.category,
            difficulty: r.difficulty,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
struct CategoryRow {
    id: i32,
    kind: String,
}

/// Escape `%`, `_` and `\` so a search term matches literally inside ILIKE.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Translate a filter into a `SELECT` ordered by id.
fn select_questions(filter: &QuestionFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE TRUE",
    );

    if let Some(category) = filter.category {
        qb.push(" AND category = ").push_bind(category);
    }

    if !filter.exclude.is_empty() {
        let ids: Vec<QuestionId> = filter.exclude.iter().copied().collect();
        qb.push(" AND NOT (id = ANY(").push_bind(ids).push("))");
    }

    if let Some(term) = &filter.text {
        qb.push(" AND question ILIKE ")
            .push_bind(format!("%{}%", escape_like(term)))
            .push(" ESCAPE '\\'");
    }

    qb.push(" ORDER BY id");
    qb
}

/// Store handle over a connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for PgStore {
    async fn find(&self, filter: &QuestionFilter) -> trivia_core::Result<Vec<Question>> {
        let rows: Vec<QuestionRow> = select_questions(filter)
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::from)?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn get(&self, id: QuestionId) -> trivia_core::Result<Option<Question>> {
        let row: Option<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(row.map(Question::from))
    }

    async fn insert(&self, question: NewQuestion) -> trivia_core::Result<Question> {
        let row: QuestionRow = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(question.question())
        .bind(question.answer())
        .bind(question.category())
        .bind(question.difficulty())
        .fetch_one(&self.pool)
        .await
        .map_err(DbError::from)?;

        tracing::debug!(id = row.id, "question inserted");
        Ok(row.into())
    }

    async fn delete(&self, id: QuestionId) -> trivia_core::Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CategoryStore for PgStore {
    async fn list(&self) -> trivia_core::Result<Vec<Category>> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as("SELECT id, type AS kind FROM categories ORDER BY type")
                .fetch_all(&self.pool)
                .await
                .map_err(DbError::from)?;

        Ok(rows
            .into_iter()
            .map(|r| Category {
                id: r.id,
                kind: r.kind,
            })
            .collect())
    }
}
