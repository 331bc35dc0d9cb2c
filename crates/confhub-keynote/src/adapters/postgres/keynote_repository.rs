//! PostgreSQL implementation of KeynoteRepository

use async_trait::async_trait;
use sqlx::PgPool;

use confhub::{DomainError, Keynote, KeynoteDraft, KeynoteRepository};

/// PostgreSQL implementation of KeynoteRepository
pub struct PgKeynoteRepository {
    pool: PgPool,
}

impl PgKeynoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct KeynoteRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    role: Option<String>,
}

impl From<KeynoteRow> for Keynote {
    fn from(row: KeynoteRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            role: row.role,
        }
    }
}

/// Unique violations on the email index become `Conflict`
fn write_error(e: sqlx::Error, email: &str) -> DomainError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            DomainError::Conflict(format!("Email already in use: {}", email))
        }
        _ => DomainError::Repository(e.to_string()),
    }
}

#[async_trait]
impl KeynoteRepository for PgKeynoteRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Keynote>, DomainError> {
        let row = sqlx::query_as::<_, KeynoteRow>("SELECT * FROM keynotes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Keynote>, DomainError> {
        let row = sqlx::query_as::<_, KeynoteRow>("SELECT * FROM keynotes WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Keynote>, DomainError> {
        let rows = sqlx::query_as::<_, KeynoteRow>("SELECT * FROM keynotes ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, keynote: &KeynoteDraft) -> Result<Keynote, DomainError> {
        let row = sqlx::query_as::<_, KeynoteRow>(
            r#"
            INSERT INTO keynotes (first_name, last_name, email, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&keynote.first_name)
        .bind(&keynote.last_name)
        .bind(&keynote.email)
        .bind(&keynote.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &keynote.email))?;

        Ok(row.into())
    }

    async fn update(&self, keynote: &Keynote) -> Result<Keynote, DomainError> {
        let row = sqlx::query_as::<_, KeynoteRow>(
            r#"
            UPDATE keynotes
            SET first_name = $2, last_name = $3, email = $4, role = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(keynote.id)
        .bind(&keynote.first_name)
        .bind(&keynote.last_name)
        .bind(&keynote.email)
        .bind(&keynote.role)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &keynote.email))?
        .ok_or_else(|| DomainError::not_found("Keynote", keynote.id))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM keynotes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
