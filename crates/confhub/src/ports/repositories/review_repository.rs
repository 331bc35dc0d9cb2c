//! Review Repository Port
//!
//! Reads go straight to the store. Every mutation goes through a
//! [`ReviewUnitOfWork`] so the conference score is recomputed in the
//! same transaction as the review change.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewReview, Review};

/// Repository interface for Review entities
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    type UnitOfWork: ReviewUnitOfWork;

    /// Open a unit of work. Dropping it without `commit` discards its writes.
    async fn begin(&self) -> Result<Self::UnitOfWork, DomainError>;

    /// Find a Review by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, DomainError>;

    /// Find the Reviews of a Conference, newest first
    async fn find_by_conference(&self, conference_id: i64) -> Result<Vec<Review>, DomainError>;
}

/// Transactional view over reviews and conference scores
#[async_trait]
pub trait ReviewUnitOfWork: Send {
    /// Check if a Conference exists
    async fn conference_exists(&mut self, conference_id: i64) -> Result<bool, DomainError>;

    /// Find a Review by ID
    async fn find_review(&mut self, id: i64) -> Result<Option<Review>, DomainError>;

    /// Insert a Review, returning it with its assigned ID
    async fn insert_review(&mut self, review: &NewReview) -> Result<Review, DomainError>;

    /// Update date, body and rating of a Review
    async fn update_review(&mut self, review: &Review) -> Result<Review, DomainError>;

    /// Delete a Review by ID
    async fn delete_review(&mut self, id: i64) -> Result<bool, DomainError>;

    /// Ratings of every Review of a Conference
    async fn ratings_for(&mut self, conference_id: i64) -> Result<Vec<i32>, DomainError>;

    /// Store a Conference score. Returns false if the Conference is gone.
    async fn update_score(&mut self, conference_id: i64, score: f64)
        -> Result<bool, DomainError>;

    /// Make every write of this unit visible
    async fn commit(self) -> Result<(), DomainError>;
}
