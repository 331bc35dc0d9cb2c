//! Conference Repository Port
//!
//! Abstract interface for Conference persistence operations.

use async_trait::async_trait;

use crate::domain::{
    errors::DomainError, Conference, ConferenceSearch, ConferenceType, NewConference,
};

/// Repository interface for Conference entities
#[async_trait]
pub trait ConferenceRepository: Send + Sync {
    /// Find a Conference by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Conference>, DomainError>;

    /// Find all Conferences
    async fn find_all(&self) -> Result<Vec<Conference>, DomainError>;

    /// Find Conferences of a given type
    async fn find_by_type(
        &self,
        conference_type: ConferenceType,
    ) -> Result<Vec<Conference>, DomainError>;

    /// Find Conferences referencing a keynote
    async fn find_by_keynote(&self, keynote_id: i64) -> Result<Vec<Conference>, DomainError>;

    /// Find Conferences matching title and date criteria
    async fn search(&self, search: &ConferenceSearch) -> Result<Vec<Conference>, DomainError>;

    /// Insert a new Conference, returning it with its assigned ID
    async fn insert(&self, conference: &NewConference) -> Result<Conference, DomainError>;

    /// Update the editable fields of a Conference (never the score)
    async fn update(&self, conference: &Conference) -> Result<Conference, DomainError>;

    /// Delete a Conference and, with it, all of its Reviews
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
