//! Conference Application Service (Use Case)
//!
//! Conference CRUD plus keynote enrichment. The keynote lookup goes through
//! the shared circuit breaker and never fails the enclosing request: when
//! the keynote service cannot answer, a placeholder keynote is attached.

use std::sync::Arc;

use confhub::{
    Conference, ConferencePatch, ConferenceRepository, ConferenceSearch, ConferenceType,
    DomainError, Keynote, KeynoteClient, NewConference, Review, ReviewRepository,
};

use crate::services::{BreakerError, CircuitBreaker};

/// A conference with its reviews and, when requested, its keynote
#[derive(Debug, Clone)]
pub struct ConferenceDetails {
    pub conference: Conference,
    pub reviews: Vec<Review>,
    pub keynote: Option<Keynote>,
}

/// Application service for Conference operations
pub struct ConferenceService<C, R, K>
where
    C: ConferenceRepository,
    R: ReviewRepository,
    K: KeynoteClient,
{
    conferences: Arc<C>,
    reviews: Arc<R>,
    keynotes: Arc<K>,
    keynote_breaker: Arc<CircuitBreaker>,
}

impl<C, R, K> ConferenceService<C, R, K>
where
    C: ConferenceRepository,
    R: ReviewRepository,
    K: KeynoteClient,
{
    pub fn new(
        conferences: Arc<C>,
        reviews: Arc<R>,
        keynotes: Arc<K>,
        keynote_breaker: Arc<CircuitBreaker>,
    ) -> Self {
        Self {
            conferences,
            reviews,
            keynotes,
            keynote_breaker,
        }
    }

    /// Get all Conferences
    pub async fn list_all(&self) -> Result<Vec<Conference>, DomainError> {
        self.conferences.find_all().await
    }

    /// Get Conferences of a type
    pub async fn list_by_type(
        &self,
        conference_type: ConferenceType,
    ) -> Result<Vec<Conference>, DomainError> {
        self.conferences.find_by_type(conference_type).await
    }

    /// Get Conferences given by a keynote
    pub async fn list_by_keynote(&self, keynote_id: i64) -> Result<Vec<Conference>, DomainError> {
        self.conferences.find_by_keynote(keynote_id).await
    }

    /// Search Conferences by title and date range
    pub async fn search(&self, search: ConferenceSearch) -> Result<Vec<Conference>, DomainError> {
        search.validate()?;
        self.conferences.search(&search).await
    }

    /// Get a Conference with its Reviews
    pub async fn get(&self, id: i64) -> Result<ConferenceDetails, DomainError> {
        let conference = self
            .conferences
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Conference", id))?;
        let reviews = self.reviews.find_by_conference(id).await?;

        Ok(ConferenceDetails {
            conference,
            reviews,
            keynote: None,
        })
    }

    /// Get a Conference with its Reviews and its Keynote.
    ///
    /// Only a missing conference is an error; keynote lookup failures
    /// degrade to a placeholder keynote.
    pub async fn get_with_keynote(&self, id: i64) -> Result<ConferenceDetails, DomainError> {
        let mut details = self.get(id).await?;
        if let Some(keynote_id) = details.conference.keynote_id {
            details.keynote = Some(self.resolve_keynote(keynote_id).await);
        }
        Ok(details)
    }

    /// Create a new Conference
    pub async fn create(&self, draft: NewConference) -> Result<Conference, DomainError> {
        draft.validate()?;
        let saved = self.conferences.insert(&draft).await?;

        tracing::info!("Conference created with ID: {} ({})", saved.id, saved.title);

        Ok(saved)
    }

    /// Update the supplied fields of a Conference
    pub async fn update(&self, id: i64, patch: ConferencePatch) -> Result<Conference, DomainError> {
        let current = self
            .conferences
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Conference", id))?;

        let updated = current.apply(patch)?;
        let saved = self.conferences.update(&updated).await?;

        tracing::info!("Conference updated with ID: {}", id);

        Ok(saved)
    }

    /// Delete a Conference together with its Reviews
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.conferences.delete(id).await? {
            return Err(DomainError::not_found("Conference", id));
        }

        tracing::info!("Conference deleted with ID: {}", id);

        Ok(())
    }

    async fn resolve_keynote(&self, keynote_id: i64) -> Keynote {
        let result = self
            .keynote_breaker
            .call(|| self.keynotes.fetch_keynote(keynote_id))
            .await;

        match result {
            Ok(Some(keynote)) => keynote,
            Ok(None) => {
                tracing::warn!(
                    "Keynote {} not found in keynote service, using placeholder",
                    keynote_id
                );
                Keynote::unavailable(keynote_id)
            }
            Err(BreakerError::Open(name)) => {
                tracing::warn!(
                    "Circuit breaker '{}' open, using placeholder for keynote {}",
                    name,
                    keynote_id
                );
                Keynote::unavailable(keynote_id)
            }
            Err(BreakerError::Inner(e)) => {
                tracing::warn!(
                    "Fallback triggered for keynote {}. Error: {}",
                    keynote_id,
                    e
                );
                Keynote::unavailable(keynote_id)
            }
        }
    }
}
