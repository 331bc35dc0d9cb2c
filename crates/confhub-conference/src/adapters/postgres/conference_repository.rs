//! PostgreSQL implementation of ConferenceRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use confhub::{
    Conference, ConferenceRepository, ConferenceSearch, ConferenceType, DomainError,
    NewConference,
};

/// PostgreSQL implementation of ConferenceRepository
pub struct PgConferenceRepository {
    pool: PgPool,
}

impl PgConferenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ConferenceRow {
    id: i64,
    title: String,
    conference_type: String,
    date: NaiveDate,
    duration_minutes: Option<i32>,
    registrants: Option<i32>,
    score: Option<f64>,
    keynote_id: Option<i64>,
}

impl TryFrom<ConferenceRow> for Conference {
    type Error = DomainError;

    fn try_from(row: ConferenceRow) -> Result<Self, Self::Error> {
        let conference_type = row
            .conference_type
            .parse::<ConferenceType>()
            .map_err(DomainError::Repository)?;

        Ok(Self {
            id: row.id,
            title: row.title,
            conference_type,
            date: row.date,
            duration_minutes: row.duration_minutes,
            registrants: row.registrants,
            score: row.score,
            keynote_id: row.keynote_id,
        })
    }
}

/// ILIKE pattern matching `fragment` literally anywhere in the title
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn into_conferences(rows: Vec<ConferenceRow>) -> Result<Vec<Conference>, DomainError> {
    rows.into_iter().map(Conference::try_from).collect()
}

#[async_trait]
impl ConferenceRepository for PgConferenceRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Conference>, DomainError> {
        let row = sqlx::query_as::<_, ConferenceRow>("SELECT * FROM conferences WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(Conference::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Conference>, DomainError> {
        let rows =
            sqlx::query_as::<_, ConferenceRow>("SELECT * FROM conferences ORDER BY date, id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        into_conferences(rows)
    }

    async fn find_by_type(
        &self,
        conference_type: ConferenceType,
    ) -> Result<Vec<Conference>, DomainError> {
        let rows = sqlx::query_as::<_, ConferenceRow>(
            "SELECT * FROM conferences WHERE conference_type = $1 ORDER BY date, id",
        )
        .bind(conference_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        into_conferences(rows)
    }

    async fn find_by_keynote(&self, keynote_id: i64) -> Result<Vec<Conference>, DomainError> {
        let rows = sqlx::query_as::<_, ConferenceRow>(
            "SELECT * FROM conferences WHERE keynote_id = $1 ORDER BY date, id",
        )
        .bind(keynote_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        into_conferences(rows)
    }

    async fn search(&self, search: &ConferenceSearch) -> Result<Vec<Conference>, DomainError> {
        let rows = sqlx::query_as::<_, ConferenceRow>(
            r#"
            SELECT * FROM conferences
            WHERE ($1::TEXT IS NULL OR title ILIKE $1 ESCAPE '\')
              AND ($2::DATE IS NULL OR date >= $2)
              AND ($3::DATE IS NULL OR date <= $3)
            ORDER BY date, id
            "#,
        )
        .bind(search.title_contains.as_deref().map(contains_pattern))
        .bind(search.from)
        .bind(search.to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        into_conferences(rows)
    }

    async fn insert(&self, conference: &NewConference) -> Result<Conference, DomainError> {
        let row = sqlx::query_as::<_, ConferenceRow>(
            r#"
            INSERT INTO conferences
                (title, conference_type, date, duration_minutes, registrants, keynote_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&conference.title)
        .bind(conference.conference_type.as_str())
        .bind(conference.date)
        .bind(conference.duration_minutes)
        .bind(conference.registrants)
        .bind(conference.keynote_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.try_into()
    }

    async fn update(&self, conference: &Conference) -> Result<Conference, DomainError> {
        let row = sqlx::query_as::<_, ConferenceRow>(
            r#"
            UPDATE conferences
            SET title = $2, conference_type = $3, date = $4,
                duration_minutes = $5, registrants = $6, keynote_id = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(conference.id)
        .bind(&conference.title)
        .bind(conference.conference_type.as_str())
        .bind(conference.date)
        .bind(conference.duration_minutes)
        .bind(conference.registrants)
        .bind(conference.keynote_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?
        .ok_or_else(|| DomainError::not_found("Conference", conference.id))?;

        row.try_into()
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        // reviews go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM conferences WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
