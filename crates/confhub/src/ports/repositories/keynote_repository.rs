//! Keynote Repository Port
//!
//! Abstract interface for Keynote persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Keynote, KeynoteDraft};

/// Repository interface for Keynote entities
#[async_trait]
pub trait KeynoteRepository: Send + Sync {
    /// Find a Keynote by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Keynote>, DomainError>;

    /// Find a Keynote by email
    async fn find_by_email(&self, email: &str) -> Result<Option<Keynote>, DomainError>;

    /// Find all Keynotes
    async fn find_all(&self) -> Result<Vec<Keynote>, DomainError>;

    /// Insert a Keynote. A duplicate email yields `DomainError::Conflict`.
    async fn insert(&self, keynote: &KeynoteDraft) -> Result<Keynote, DomainError>;

    /// Replace every field of a Keynote
    async fn update(&self, keynote: &Keynote) -> Result<Keynote, DomainError>;

    /// Delete a Keynote by ID
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
