//! Review Application Service (Use Case)
//!
//! Every review mutation and the recomputation of the owning conference's
//! score commit together in one unit of work.

use chrono::NaiveDate;
use std::sync::Arc;

use confhub::{
    average_score, ConferenceRepository, DomainError, NewReview, Review, ReviewPatch,
    ReviewRepository, ReviewUnitOfWork,
};

/// Recompute and store the score of `conference_id` from its current reviews.
///
/// With no reviews left the stored score is kept as it is. A conference
/// that disappeared in the meantime is not an error.
pub async fn recompute_score<U: ReviewUnitOfWork>(
    uow: &mut U,
    conference_id: i64,
) -> Result<Option<f64>, DomainError> {
    let ratings = uow.ratings_for(conference_id).await?;
    let Some(score) = average_score(&ratings) else {
        tracing::debug!(
            "Conference {} has no reviews, score left unchanged",
            conference_id
        );
        return Ok(None);
    };

    if !uow.update_score(conference_id, score).await? {
        tracing::debug!(
            "Conference {} vanished before its score could be stored",
            conference_id
        );
        return Ok(None);
    }

    Ok(Some(score))
}

/// Application service for Review operations
pub struct ReviewService<C: ConferenceRepository, R: ReviewRepository> {
    conferences: Arc<C>,
    reviews: Arc<R>,
}

impl<C: ConferenceRepository, R: ReviewRepository> ReviewService<C, R> {
    pub fn new(conferences: Arc<C>, reviews: Arc<R>) -> Self {
        Self {
            conferences,
            reviews,
        }
    }

    /// Get a Review by ID
    pub async fn get(&self, id: i64) -> Result<Review, DomainError> {
        self.reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Review", id))
    }

    /// Get the Reviews of a Conference, newest first
    pub async fn list_for_conference(
        &self,
        conference_id: i64,
    ) -> Result<Vec<Review>, DomainError> {
        if self.conferences.find_by_id(conference_id).await?.is_none() {
            return Err(DomainError::not_found("Conference", conference_id));
        }
        self.reviews.find_by_conference(conference_id).await
    }

    /// Add a Review to a Conference and refresh its score
    pub async fn add(
        &self,
        conference_id: i64,
        date: Option<NaiveDate>,
        body: String,
        rating: i32,
    ) -> Result<Review, DomainError> {
        let mut uow = self.reviews.begin().await?;

        if !uow.conference_exists(conference_id).await? {
            return Err(DomainError::not_found("Conference", conference_id));
        }

        let date = date.unwrap_or_else(|| chrono::Utc::now().date_naive());
        let draft = NewReview::new(conference_id, date, body, rating)?;

        let review = uow.insert_review(&draft).await?;
        let score = recompute_score(&mut uow, conference_id).await?;
        uow.commit().await?;

        tracing::info!(
            "Review added with ID: {} for Conference ID: {} (score: {:?})",
            review.id,
            conference_id,
            score
        );

        Ok(review)
    }

    /// Update a Review and refresh its Conference's score
    pub async fn update(&self, id: i64, patch: ReviewPatch) -> Result<Review, DomainError> {
        let mut uow = self.reviews.begin().await?;

        let current = uow
            .find_review(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Review", id))?;
        let conference_id = current.conference_id;

        let updated = current.apply(patch)?;
        let saved = uow.update_review(&updated).await?;
        recompute_score(&mut uow, conference_id).await?;
        uow.commit().await?;

        tracing::info!("Review updated with ID: {}", id);

        Ok(saved)
    }

    /// Delete a Review and refresh its Conference's score
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut uow = self.reviews.begin().await?;

        // the link to the conference disappears with the row
        let conference_id = uow
            .find_review(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Review", id))?
            .conference_id;

        if !uow.delete_review(id).await? {
            return Err(DomainError::not_found("Review", id));
        }
        recompute_score(&mut uow, conference_id).await?;
        uow.commit().await?;

        tracing::info!("Review deleted with ID: {}", id);

        Ok(())
    }
}
