//! Keynote Client Port
//!
//! Remote lookup of keynotes owned by the keynote service.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Keynote};

/// Client for the keynote service
#[async_trait]
pub trait KeynoteClient: Send + Sync {
    /// Fetch a keynote by ID
    ///
    /// Returns `Ok(None)` when the keynote service answers that the keynote
    /// does not exist, and `DomainError::DownstreamUnavailable` for
    /// timeouts, connection failures and server errors.
    async fn fetch_keynote(&self, id: i64) -> Result<Option<Keynote>, DomainError>;
}
