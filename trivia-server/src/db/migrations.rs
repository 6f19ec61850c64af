//! Schema setup for the trivia tables

use sqlx::PgPool;
use trivia_core::models::DEFAULT_CATEGORIES;

use super::DbError;

/// Create tables if missing and seed default categories into an empty table.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    // Keep seed order so ids line up with DEFAULT_CATEGORIES
    let names: Vec<String> = DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect();
    let seeded = sqlx::query(
        r#"
        INSERT INTO categories (type)
        SELECT u.name
        FROM unnest($1::text[]) WITH ORDINALITY AS u(name, n)
        WHERE NOT EXISTS (SELECT 1 FROM categories)
        ORDER BY u.n
        "#,
    )
    .bind(names)
    .execute(pool)
    .await?
    .rows_affected();

    if seeded > 0 {
        tracing::info!(count = seeded, "Seeded default categories");
    }

    tracing::info!("Migrations complete");
    Ok(())
}
