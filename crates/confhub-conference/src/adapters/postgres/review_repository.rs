//! PostgreSQL implementation of ReviewRepository
//!
//! Mutations run on a [`PgReviewUnitOfWork`] wrapping a sqlx transaction;
//! dropping it without `commit` rolls everything back.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};

use confhub::{DomainError, NewReview, Rating, Review, ReviewRepository, ReviewUnitOfWork};

/// PostgreSQL implementation of ReviewRepository
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    conference_id: i64,
    date: NaiveDate,
    body: String,
    rating: i32,
}

impl TryFrom<ReviewRow> for Review {
    type Error = DomainError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        let rating = Rating::new(row.rating)
            .map_err(|e| DomainError::Repository(format!("review {}: {}", row.id, e)))?;

        Ok(Self {
            id: row.id,
            conference_id: row.conference_id,
            date: row.date,
            body: row.body,
            rating,
        })
    }
}

fn repository_error(e: sqlx::Error) -> DomainError {
    DomainError::Repository(e.to_string())
}

/// A review insert that loses its conference to a concurrent delete
/// trips the foreign key; report it like any missing conference.
fn insert_error(e: sqlx::Error, conference_id: i64) -> DomainError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            DomainError::not_found("Conference", conference_id)
        }
        _ => repository_error(e),
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    type UnitOfWork = PgReviewUnitOfWork;

    async fn begin(&self) -> Result<PgReviewUnitOfWork, DomainError> {
        let tx = self.pool.begin().await.map_err(repository_error)?;
        Ok(PgReviewUnitOfWork { tx })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, DomainError> {
        let row = sqlx::query_as::<_, ReviewRow>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        row.map(Review::try_from).transpose()
    }

    async fn find_by_conference(&self, conference_id: i64) -> Result<Vec<Review>, DomainError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            "SELECT * FROM reviews WHERE conference_id = $1 ORDER BY date DESC, id DESC",
        )
        .bind(conference_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        rows.into_iter().map(Review::try_from).collect()
    }
}

/// Review mutations and score updates inside one Postgres transaction
pub struct PgReviewUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl ReviewUnitOfWork for PgReviewUnitOfWork {
    async fn conference_exists(&mut self, conference_id: i64) -> Result<bool, DomainError> {
        // FOR SHARE holds off a concurrent delete until this transaction ends
        let row = sqlx::query_scalar::<_, i64>("SELECT id FROM conferences WHERE id = $1 FOR SHARE")
            .bind(conference_id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(repository_error)?;

        Ok(row.is_some())
    }

    async fn find_review(&mut self, id: i64) -> Result<Option<Review>, DomainError> {
        let row = sqlx::query_as::<_, ReviewRow>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(repository_error)?;

        row.map(Review::try_from).transpose()
    }

    async fn insert_review(&mut self, review: &NewReview) -> Result<Review, DomainError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            INSERT INTO reviews (conference_id, date, body, rating)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(review.conference_id)
        .bind(review.date)
        .bind(&review.body)
        .bind(review.rating.value())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| insert_error(e, review.conference_id))?;

        row.try_into()
    }

    async fn update_review(&mut self, review: &Review) -> Result<Review, DomainError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            UPDATE reviews
            SET date = $2, body = $3, rating = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(review.id)
        .bind(review.date)
        .bind(&review.body)
        .bind(review.rating.value())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(repository_error)?
        .ok_or_else(|| DomainError::not_found("Review", review.id))?;

        row.try_into()
    }

    async fn delete_review(&mut self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn ratings_for(&mut self, conference_id: i64) -> Result<Vec<i32>, DomainError> {
        sqlx::query_scalar::<_, i32>("SELECT rating FROM reviews WHERE conference_id = $1")
            .bind(conference_id)
            .fetch_all(&mut *self.tx)
            .await
            .map_err(repository_error)
    }

    async fn update_score(
        &mut self,
        conference_id: i64,
        score: f64,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE conferences SET score = $2 WHERE id = $1")
            .bind(conference_id)
            .bind(score)
            .execute(&mut *self.tx)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn commit(self) -> Result<(), DomainError> {
        self.tx.commit().await.map_err(repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::fmt;

    #[derive(Debug)]
    struct ConstraintError {
        foreign_key: bool,
    }

    impl fmt::Display for ConstraintError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("constraint violated")
        }
    }

    impl std::error::Error for ConstraintError {}

    impl DatabaseError for ConstraintError {
        fn message(&self) -> &str {
            "constraint violated"
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            if self.foreign_key {
                ErrorKind::ForeignKeyViolation
            } else {
                ErrorKind::CheckViolation
            }
        }
    }

    #[test]
    fn test_vanished_conference_on_insert_is_not_found() {
        let e = sqlx::Error::Database(Box::new(ConstraintError { foreign_key: true }));
        assert!(matches!(
            insert_error(e, 7),
            DomainError::NotFound { ref id, .. } if id == "7"
        ));
    }

    #[test]
    fn test_other_insert_failures_stay_repository_errors() {
        let e = sqlx::Error::Database(Box::new(ConstraintError { foreign_key: false }));
        assert!(matches!(insert_error(e, 7), DomainError::Repository(_)));
        assert!(matches!(
            insert_error(sqlx::Error::PoolClosed, 7),
            DomainError::Repository(_)
        ));
    }
}
