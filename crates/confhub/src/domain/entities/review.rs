//! Review - Rated comment on a conference
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::Rating;

/// Longest review body the store accepts
pub const MAX_REVIEW_BODY_LEN: usize = 1000;

/// Review - exclusively owned by one conference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub conference_id: i64,
    pub date: NaiveDate,
    pub body: String,
    pub rating: Rating,
}

/// Review fields supplied on creation
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub conference_id: i64,
    pub date: NaiveDate,
    pub body: String,
    pub rating: Rating,
}

/// Partial review update. The owning conference cannot be changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewPatch {
    pub date: Option<NaiveDate>,
    pub body: Option<String>,
    pub rating: Option<i32>,
}

fn validate_body(body: &str) -> Result<(), DomainError> {
    if body.trim().is_empty() {
        return Err(DomainError::validation("Review text is required"));
    }
    if body.chars().count() > MAX_REVIEW_BODY_LEN {
        return Err(DomainError::validation(format!(
            "Review text must be at most {} characters",
            MAX_REVIEW_BODY_LEN
        )));
    }
    Ok(())
}

impl NewReview {
    /// Validate raw input and build a review for `conference_id`
    pub fn new(
        conference_id: i64,
        date: NaiveDate,
        body: String,
        rating: i32,
    ) -> Result<Self, DomainError> {
        let rating = Rating::new(rating)?;
        validate_body(&body)?;
        Ok(Self {
            conference_id,
            date,
            body,
            rating,
        })
    }

    pub fn into_review(self, id: i64) -> Review {
        Review {
            id,
            conference_id: self.conference_id,
            date: self.date,
            body: self.body,
            rating: self.rating,
        }
    }
}

impl Review {
    /// Apply a partial update, keeping the owning conference
    pub fn apply(self, patch: ReviewPatch) -> Result<Self, DomainError> {
        let rating = match patch.rating {
            Some(value) => Rating::new(value)?,
            None => self.rating,
        };
        if let Some(body) = &patch.body {
            validate_body(body)?;
        }
        Ok(Self {
            id: self.id,
            conference_id: self.conference_id,
            date: patch.date.unwrap_or(self.date),
            body: patch.body.unwrap_or(self.body),
            rating,
        })
    }
}
